//! Withdraw from a course
//! POST /users/unsubscribe
use campus::models::User;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Withdrawal Data
#[derive(Serialize, Deserialize)]
pub struct DataUnsubscribe {
    /// Course id
    pub course: String,
}

/// # Unsubscribe
///
/// Withdraw the current user from a course. The subscriber counter only
/// moves when an enrollment was actually removed.
#[post("/unsubscribe", data = "<data>")]
pub async fn unsubscribe(
    campus: &State<Campus>,
    user: User,
    data: Json<DataUnsubscribe>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    let removed = campus
        .database
        .remove_subscription(&user.id, &data.course)
        .await?;

    if removed {
        campus
            .database
            .adjust_subscriber_count(&data.course, -1)
            .await?;
    }

    Ok(EmptyResponse)
}
