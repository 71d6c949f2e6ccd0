//! Submit a course review
//! PATCH /courses/rate/<id>
use campus::models::{Course, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Review Data
#[derive(Serialize, Deserialize)]
pub struct DataSubmitRating {
    /// Rating out of 5
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// # Review Response
#[derive(Serialize, Deserialize)]
pub struct ResponseSubmitRating {
    /// False when the user already has a review on this course
    pub applied: bool,
}

/// # Submit Rating
///
/// Review a course. One review per user; a repeat submission is a
/// no-op reported through `applied`.
#[patch("/rate/<id>", data = "<data>")]
pub async fn submit_rating(
    campus: &State<Campus>,
    user: User,
    id: String,
    data: Json<DataSubmitRating>,
) -> Result<Json<ResponseSubmitRating>> {
    let data = data.into_inner();

    let applied = Course::submit_review(campus, &id, &user, data.rating, data.comment).await?;

    Ok(Json(ResponseSubmitRating { applied }))
}
