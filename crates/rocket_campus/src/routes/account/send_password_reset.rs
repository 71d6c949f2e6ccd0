//! Request a password reset email
//! POST /auth/reset_password
use campus::util::normalise_email;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Reset Data
#[derive(Serialize, Deserialize)]
pub struct DataSendPasswordReset {
    /// Email address
    pub email: String,
}

/// # Send Password Reset
///
/// Send a password reset token to the given address, if an account
/// exists for it. Always reports success so addresses cannot be probed.
#[post("/reset_password", data = "<data>")]
pub async fn send_password_reset(
    campus: &State<Campus>,
    data: Json<DataSendPasswordReset>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    if let Some(mut user) = campus
        .database
        .find_user_by_normalised_email(&normalise_email(data.email))
        .await?
    {
        user.start_password_reset(campus).await?;
    }

    Ok(EmptyResponse)
}
