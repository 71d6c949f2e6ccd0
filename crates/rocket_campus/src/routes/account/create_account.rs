//! Sign up for an account
//! POST /auth/signup
use campus::r#impl::NewUser;
use campus::models::{User, UserProfile};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Signup Data
#[derive(Serialize, Deserialize)]
pub struct DataCreateAccount {
    /// Unique username
    pub username: String,
    /// Email address
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Mobile number, digits only
    pub mobile: String,
    /// Plaintext password
    pub password: String,
}

/// # Signup
///
/// Create a new, initially unverified account.
#[post("/signup", data = "<data>")]
pub async fn create_account(
    campus: &State<Campus>,
    data: Json<DataCreateAccount>,
) -> Result<Json<UserProfile>> {
    let data = data.into_inner();

    let user = User::create(
        campus,
        NewUser {
            username: data.username,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            mobile: data.mobile,
            password: data.password,
            is_admin: false,
        },
    )
    .await?;

    Ok(Json(user.into()))
}
