//! Delete an author
//! DELETE /authors/<id>
use campus::derive::rocket::Admin;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Delete Author
///
/// Remove an author record. Existing courses keep their embedded
/// snapshot.
#[delete("/<id>")]
pub async fn delete(campus: &State<Campus>, _admin: Admin, id: String) -> Result<EmptyResponse> {
    campus.database.find_author(&id).await?;

    campus
        .database
        .delete_author(&id)
        .await
        .map(|_| EmptyResponse)
}
