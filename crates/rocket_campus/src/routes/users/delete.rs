//! Delete a user
//! DELETE /users/<id>
use campus::derive::rocket::Admin;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Delete User
///
/// Remove a user account.
#[delete("/<id>")]
pub async fn delete(campus: &State<Campus>, _admin: Admin, id: String) -> Result<EmptyResponse> {
    // resolves to UnknownUser for missing ids
    campus.database.find_user(&id).await?;

    campus.database.delete_user(&id).await.map(|_| EmptyResponse)
}
