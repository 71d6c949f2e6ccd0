//! Remove a lesson
//! DELETE /courses/video/<id>/<lesson_id>
use campus::derive::rocket::Admin;
use campus::models::Course;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Remove Video
///
/// Pull a lesson off a course; removing an absent lesson is a no-op.
#[delete("/video/<id>/<lesson_id>")]
pub async fn remove_video(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    lesson_id: String,
) -> Result<EmptyResponse> {
    campus.database.find_course(&id).await?;

    Course::remove_lesson(campus, &id, &lesson_id)
        .await
        .map(|_| EmptyResponse)
}
