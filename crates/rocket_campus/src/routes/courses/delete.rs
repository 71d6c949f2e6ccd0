//! Delete a course
//! DELETE /courses/<id>
use campus::derive::rocket::Admin;
use campus::models::Course;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Delete Course
///
/// Remove a course together with its embedded tokens, lessons, addons
/// and reviews.
#[delete("/<id>")]
pub async fn delete(campus: &State<Campus>, _admin: Admin, id: String) -> Result<EmptyResponse> {
    campus.database.find_course(&id).await?;

    Course::delete(campus, &id).await.map(|_| EmptyResponse)
}
