//! Log out of the current session
//! POST /auth/logout
use campus::models::Session;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Logout
///
/// Delete the current session.
#[post("/logout")]
pub async fn logout(campus: &State<Campus>, session: Session) -> Result<EmptyResponse> {
    session.delete(campus).await.map(|_| EmptyResponse)
}
