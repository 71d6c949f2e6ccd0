//! Verify an email address
//! POST /auth/verify/<code>
use campus::models::EmailVerification;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Verify Email
///
/// Redeem a verification token sent by email.
#[post("/verify/<code>")]
pub async fn verify_email(campus: &State<Campus>, code: String) -> Result<EmptyResponse> {
    let mut user = campus
        .database
        .find_user_with_email_verification(&code)
        .await?;

    user.verification = EmailVerification::Verified;

    campus.database.save_user(&user).await.map(|_| EmptyResponse)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use iso8601_timestamp::Timestamp;

    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, _, mut user, _) = for_test_authenticated("verify_email::success").await;

        user.verification = EmailVerification::Pending {
            token: "token".to_string(),
            expiry: Timestamp::from_unix_timestamp_ms(
                chrono::Utc::now()
                    .checked_add_signed(Duration::seconds(100))
                    .expect("failed to checked_add_signed")
                    .timestamp_millis(),
            ),
        };
        campus.database.save_user(&user).await.unwrap();

        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::verify_email::verify_email],
        )
        .await;

        let res = client.post("/auth/verify/token").dispatch().await;

        assert_eq!(res.status(), Status::NoContent);
    }

    #[async_std::test]
    async fn fail_invalid_token() {
        let (campus, _) = for_test("verify_email::fail_invalid_token").await;

        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::verify_email::verify_email],
        )
        .await;

        let res = client.post("/auth/verify/token").dispatch().await;

        assert_eq!(res.status(), Status::Unauthorized);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"InvalidToken\"}".into())
        );
    }

    #[async_std::test]
    async fn fail_expired_token() {
        let (campus, _, mut user, _) = for_test_authenticated("verify_email::fail_expired_token").await;

        user.verification = EmailVerification::Pending {
            token: "token".to_string(),
            expiry: Timestamp::UNIX_EPOCH,
        };
        campus.database.save_user(&user).await.unwrap();

        let client = bootstrap_rocket(
            campus,
            "/auth",
            routes![crate::routes::account::verify_email::verify_email],
        )
        .await;

        let res = client.post("/auth/verify/token").dispatch().await;

        assert_eq!(res.status(), Status::Unauthorized);
    }
}
