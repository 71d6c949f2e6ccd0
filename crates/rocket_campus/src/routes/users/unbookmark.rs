//! Remove a bookmark
//! POST /users/unbookmark
use campus::models::User;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Bookmark Data
#[derive(Serialize, Deserialize)]
pub struct DataUnbookmark {
    /// Course id
    pub course: String,
}

/// # Unbookmark
///
/// Remove a course from the current user's bookmarks; absent bookmarks
/// are a no-op.
#[post("/unbookmark", data = "<data>")]
pub async fn unbookmark(
    campus: &State<Campus>,
    user: User,
    data: Json<DataUnbookmark>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    campus
        .database
        .remove_bookmark(&user.id, &data.course)
        .await
        .map(|_| EmptyResponse)
}
