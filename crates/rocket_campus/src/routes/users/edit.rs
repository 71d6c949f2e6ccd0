//! Edit a user
//! PATCH /users/<id>
use campus::derive::rocket::Admin;
use campus::models::UserProfile;
use campus::{Campus, Error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Edit Data
#[derive(Serialize, Deserialize)]
pub struct DataEditUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub is_admin: Option<bool>,
}

/// # Edit User
///
/// Update a user's details.
#[patch("/<id>", data = "<data>")]
pub async fn edit(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    data: Json<DataEditUser>,
) -> Result<Json<UserProfile>> {
    let data = data.into_inner();
    let mut user = campus.database.find_user(&id).await?;

    let len = |s: &str| s.chars().count();

    if let Some(first_name) = data.first_name {
        if !(2..=50).contains(&len(&first_name)) {
            return Err(Error::IncorrectData { with: "first_name" });
        }

        user.first_name = first_name;
    }

    if let Some(last_name) = data.last_name {
        if !(2..=50).contains(&len(&last_name)) {
            return Err(Error::IncorrectData { with: "last_name" });
        }

        user.last_name = last_name;
    }

    if let Some(mobile) = data.mobile {
        if !(9..=15).contains(&len(&mobile)) || !mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::IncorrectData { with: "mobile" });
        }

        user.mobile = mobile;
    }

    if let Some(is_admin) = data.is_admin {
        user.is_admin = is_admin;
    }

    campus.database.save_user(&user).await?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, session, user, _) = for_test_admin("users::edit::success").await;

        let client = bootstrap_rocket(
            campus,
            "/users",
            routes![crate::routes::users::edit::edit],
        )
        .await;

        let res = client
            .patch(format!("/users/{}", user.id))
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(
                json!({
                    "first_name": "Renamed",
                    "mobile": "777999888"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let profile =
            serde_json::from_str::<UserProfile>(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(profile.first_name, "Renamed");
        assert_eq!(profile.mobile, "777999888");
        // untouched fields stay put
        assert_eq!(profile.last_name, "User");
    }

    #[async_std::test]
    async fn fail_unknown_user() {
        let (campus, session, _, _) = for_test_admin("users::edit::fail_unknown_user").await;

        let client = bootstrap_rocket(
            campus,
            "/users",
            routes![crate::routes::users::edit::edit],
        )
        .await;

        let res = client
            .patch("/users/missing")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(json!({ "first_name": "Renamed" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NotFound);
    }

    #[async_std::test]
    async fn fail_invalid_field() {
        let (campus, session, user, _) = for_test_admin("users::edit::fail_invalid_field").await;

        let client = bootstrap_rocket(
            campus,
            "/users",
            routes![crate::routes::users::edit::edit],
        )
        .await;

        let res = client
            .patch(format!("/users/{}", user.id))
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(json!({ "first_name": "R" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
    }
}
