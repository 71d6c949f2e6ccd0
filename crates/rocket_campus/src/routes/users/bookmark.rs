//! Bookmark a course
//! POST /users/bookmark
use campus::models::User;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Bookmark Data
#[derive(Serialize, Deserialize)]
pub struct DataBookmark {
    /// Course id
    pub course: String,
}

/// # Bookmark
///
/// Add a course to the current user's bookmarks. Bookmarking the same
/// course twice is a no-op.
#[post("/bookmark", data = "<data>")]
pub async fn bookmark(
    campus: &State<Campus>,
    user: User,
    data: Json<DataBookmark>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    campus.database.find_course(&data.course).await?;

    campus
        .database
        .add_bookmark(&user.id, &data.course)
        .await
        .map(|_| EmptyResponse)
}
