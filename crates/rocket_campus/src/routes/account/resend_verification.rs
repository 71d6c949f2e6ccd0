//! Resend a verification email
//! POST /auth/resend_verification
use campus::util::normalise_email;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Resend Data
#[derive(Serialize, Deserialize)]
pub struct DataResendVerification {
    /// Email address
    pub email: String,
}

/// # Resend Verification
///
/// Issue a fresh verification token for an unverified account. Always
/// reports success so addresses cannot be probed.
#[post("/resend_verification", data = "<data>")]
pub async fn resend_verification(
    campus: &State<Campus>,
    data: Json<DataResendVerification>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    if let Some(mut user) = campus
        .database
        .find_user_by_normalised_email(&normalise_email(data.email))
        .await?
    {
        if !user.is_verified() {
            user.start_email_verification(campus).await?;
        }
    }

    Ok(EmptyResponse)
}
