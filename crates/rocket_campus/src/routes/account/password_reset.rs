//! Confirm a password reset
//! PATCH /auth/reset_password
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Password Reset
#[derive(Serialize, Deserialize)]
pub struct DataPasswordReset {
    /// Reset token
    pub token: String,
    /// New password
    pub password: String,
}

/// # Password Reset
///
/// Redeem a reset token and change the password.
#[patch("/reset_password", data = "<data>")]
pub async fn password_reset(
    campus: &State<Campus>,
    data: Json<DataPasswordReset>,
) -> Result<EmptyResponse> {
    let data = data.into_inner();

    let mut user = campus
        .database
        .find_user_with_password_reset(&data.token)
        .await?;

    user.update_password(campus, data.password)
        .await
        .map(|_| EmptyResponse)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use iso8601_timestamp::Timestamp;

    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, _, mut user, _) = for_test_authenticated("password_reset::success").await;

        user.password_reset = Some(PasswordReset {
            token: "token".to_string(),
            expiry: Timestamp::from_unix_timestamp_ms(
                chrono::Utc::now()
                    .checked_add_signed(Duration::seconds(100))
                    .expect("failed to checked_add_signed")
                    .timestamp_millis(),
            ),
        });
        campus.database.save_user(&user).await.unwrap();

        let database = campus.database.clone();
        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::password_reset::password_reset],
        )
        .await;

        let res = client
            .patch("/auth/reset_password")
            .header(ContentType::JSON)
            .body(
                json!({
                    "token": "token",
                    "password": "new password"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NoContent);

        let user = database.find_user(&user.id).await.unwrap();
        assert!(user.verify_password("new password").is_ok());
        assert!(user.password_reset.is_none());
    }

    #[async_std::test]
    async fn fail_expired_token() {
        let (campus, _, mut user, _) = for_test_authenticated("password_reset::fail_expired_token").await;

        user.password_reset = Some(PasswordReset {
            token: "token".to_string(),
            expiry: Timestamp::UNIX_EPOCH,
        });
        campus.database.save_user(&user).await.unwrap();

        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::password_reset::password_reset],
        )
        .await;

        let res = client
            .patch("/auth/reset_password")
            .header(ContentType::JSON)
            .body(
                json!({
                    "token": "token",
                    "password": "new password"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Unauthorized);
    }
}
