//! Fetch the current user
//! GET /users/me
use campus::models::{User, UserProfile};
use campus::Result;
use rocket::serde::json::Json;

/// # Fetch Self
///
/// Fetch the profile behind the current session.
#[get("/me")]
pub async fn fetch_me(user: User) -> Result<Json<UserProfile>> {
    Ok(Json(user.into()))
}
