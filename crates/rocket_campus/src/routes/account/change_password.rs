//! Change the account password
//! PATCH /auth/change_password
use campus::models::User;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Change Data
#[derive(Serialize, Deserialize)]
pub struct DataChangePassword {
    /// New password
    pub password: String,
    /// Current password
    pub current_password: String,
}

/// # Change Password
///
/// Change the password of the current account.
#[patch("/change_password", data = "<data>")]
pub async fn change_password(
    campus: &State<Campus>,
    mut user: User,
    data: Json<DataChangePassword>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    user.verify_password(&data.current_password)?;

    user.update_password(campus, data.password)
        .await
        .map(|_| EmptyResponse)
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, session, _, _) = for_test_authenticated("change_password::success").await;

        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::change_password::change_password],
        )
        .await;

        let res = client
            .patch("/auth/change_password")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(
                json!({
                    "password": "new password",
                    "current_password": "password_insecure"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NoContent);

        // the new password is in effect
        let res = client
            .patch("/auth/change_password")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(
                json!({
                    "password": "another password",
                    "current_password": "new password"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NoContent);
    }

    #[async_std::test]
    async fn fail_wrong_current_password() {
        let (campus, session, _, _) =
            for_test_authenticated("change_password::fail_wrong_current_password").await;

        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::change_password::change_password],
        )
        .await;

        let res = client
            .patch("/auth/change_password")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(
                json!({
                    "password": "new password",
                    "current_password": "wrong password"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Unauthorized);
    }
}
