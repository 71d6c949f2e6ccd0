//! Create a user
//! POST /users
use campus::derive::rocket::Admin;
use campus::models::{User, UserProfile};
use campus::r#impl::NewUser;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # User Data
#[derive(Serialize, Deserialize)]
pub struct DataCreateUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub password: String,
    /// Whether the new user may perform admin operations
    #[serde(default)]
    pub is_admin: bool,
}

/// # Create User
///
/// Create a user directly, optionally with admin rights.
#[post("/", data = "<data>")]
pub async fn create(
    campus: &State<Campus>,
    _admin: Admin,
    data: Json<DataCreateUser>,
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
            is_admin: data.is_admin,
        },
    )
    .await?;

    Ok(Json(user.into()))
}
