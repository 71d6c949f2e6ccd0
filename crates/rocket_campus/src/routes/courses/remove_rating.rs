//! Remove the caller's review
//! DELETE /courses/rate/<id>
use campus::models::{Course, User};
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Remove Rating
///
/// Delete the current user's review of a course, freeing them to
/// review it again.
#[delete("/rate/<id>")]
pub async fn remove_rating(
    campus: &State<Campus>,
    user: User,
    id: String,
) -> Result<EmptyResponse> {
    campus.database.find_course(&id).await?;

    Course::remove_review(campus, &id, &user.id)
        .await
        .map(|_| EmptyResponse)
}
