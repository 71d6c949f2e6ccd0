//! Fetch the lessons of a course
//! GET /courses/video/<id>
use campus::models::{Lesson, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Videos
#[get("/video/<id>")]
pub async fn fetch_videos(
    campus: &State<Campus>,
    _user: User,
    id: String,
) -> Result<Json<Vec<Lesson>>> {
    Ok(Json(campus.database.find_course(&id).await?.lessons))
}
