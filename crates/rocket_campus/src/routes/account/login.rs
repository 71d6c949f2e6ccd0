//! Log in to an account
//! POST /auth/login
use campus::models::Session;
use campus::util::normalise_email;
use campus::{Campus, Error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Login Data
#[derive(Serialize, Deserialize)]
pub struct DataLogin {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Friendly name for the new session
    pub friendly_name: Option<String>,
}

/// # Login
///
/// Exchange credentials for a session token.
#[post("/login", data = "<data>")]
pub async fn login(campus: &State<Campus>, data: Json<DataLogin>) -> Result<Json<Session>> {
    let data = data.into_inner();

    let user = campus
        .database
        .find_user_by_normalised_email(&normalise_email(data.email))
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !user.is_verified() {
        return Err(Error::UnverifiedAccount);
    }

    user.verify_password(&data.password)?;

    let name = data.friendly_name.unwrap_or_else(|| "Unknown".to_string());

    Ok(Json(user.create_session(campus, name).await?))
}
