//! Close the current account
//! DELETE /users/me
use campus::models::{Session, User};
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Close Account
///
/// Delete the current account together with its session.
#[delete("/me")]
pub async fn close_account(
    campus: &State<Campus>,
    session: Session,
    user: User,
) -> Result<EmptyResponse> {
    campus.database.delete_user(&user.id).await?;

    session.delete(campus).await.map(|_| EmptyResponse)
}
