//! Redeem an enrollment code
//! PATCH /courses/activate
use campus::models::{Course, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Activation Data
#[derive(Serialize, Deserialize)]
pub struct DataActivate {
    /// Course id
    pub course: String,
    /// Enrollment code
    pub token: String,
}

/// # Activate Course
///
/// Redeem an enrollment code and enroll the current user. A code can
/// be redeemed exactly once; reusing it fails even for the same user.
#[patch("/activate", data = "<data>")]
pub async fn activate(
    campus: &State<Campus>,
    user: User,
    data: Json<DataActivate>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    campus.database.find_course(&data.course).await?;

    Course::redeem_code(campus, &data.course, &data.token, &user.id).await?;

    if campus
        .database
        .add_subscription(&user.id, &data.course)
        .await?
    {
        campus
            .database
            .adjust_subscriber_count(&data.course, 1)
            .await?;
    }

    Ok(EmptyResponse)
}
