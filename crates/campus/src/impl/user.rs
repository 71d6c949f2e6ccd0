use chrono::Duration;
use iso8601_timestamp::Timestamp;

use crate::{
    config::EmailVerificationConfig,
    models::{EmailVerification, PasswordReset, Session, User},
    util::{hash_password, normalise_email, verify_password},
    Campus, CampusEvent, Error, Result, Success,
};

/// Validated signup / admin-create input
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub password: String,
    pub is_admin: bool,
}

impl NewUser {
    fn validate(&self) -> Success {
        let len = |s: &str| s.chars().count();

        if !(3..=20).contains(&len(&self.username)) {
            return Err(Error::IncorrectData { with: "username" });
        }

        if !(5..=255).contains(&len(&self.email)) || !self.email.contains('@') {
            return Err(Error::IncorrectData { with: "email" });
        }

        if !(2..=50).contains(&len(&self.first_name)) {
            return Err(Error::IncorrectData { with: "first_name" });
        }

        if !(2..=50).contains(&len(&self.last_name)) {
            return Err(Error::IncorrectData { with: "last_name" });
        }

        if !(9..=15).contains(&len(&self.mobile))
            || !self.mobile.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::IncorrectData { with: "mobile" });
        }

        if !(5..=255).contains(&len(&self.password)) {
            return Err(Error::IncorrectData { with: "password" });
        }

        Ok(())
    }
}

impl User {
    /// Create a new user
    ///
    /// Starts email verification unless it is disabled in config, in which
    /// case the account is verified immediately.
    pub async fn create(campus: &Campus, data: NewUser) -> Result<User> {
        data.validate()?;

        if campus
            .database
            .find_user_by_username(&data.username)
            .await?
            .is_some()
        {
            return Err(Error::UsernameTaken);
        }

        let password = hash_password(data.password)?;
        let email_normalised = normalise_email(data.email.clone());

        let mut user = User {
            id: ulid::Ulid::new().to_string(),

            username: data.username,
            email: data.email,
            email_normalised,

            first_name: data.first_name,
            last_name: data.last_name,
            mobile: data.mobile,

            password,

            image: None,
            is_admin: data.is_admin,

            verification: EmailVerification::Verified,
            password_reset: None,

            subscriptions: vec![],
            bookmarks: vec![],
        };

        user.start_email_verification(campus).await?;

        info!("signup|{}", user.username);

        campus
            .publish_event(CampusEvent::CreateUser { user: user.clone() })
            .await;

        Ok(user)
    }

    /// Send a verification email and mark the account pending
    ///
    /// With email verification disabled the account is marked verified
    /// directly.
    pub async fn start_email_verification(&mut self, campus: &Campus) -> Success {
        if let EmailVerificationConfig::Enabled {
            smtp,
            templates,
            expiry,
        } = &campus.config.email_verification
        {
            let token = nanoid!(32);
            let url = format!("{}{}", templates.verify.url, token);

            smtp.send_email(self.email.clone(), &templates.verify, json!({ "url": url }))
                .ok();

            self.verification = EmailVerification::Pending {
                token,
                expiry: Timestamp::from_unix_timestamp_ms(
                    chrono::Utc::now()
                        .checked_add_signed(Duration::seconds(expiry.expire_verification))
                        .expect("failed to checked_add_signed")
                        .timestamp_millis(),
                ),
            };
        } else {
            self.verification = EmailVerification::Verified;
        }

        campus.database.save_user(self).await
    }

    /// Send a password reset email
    pub async fn start_password_reset(&mut self, campus: &Campus) -> Success {
        if let EmailVerificationConfig::Enabled {
            smtp,
            templates,
            expiry,
        } = &campus.config.email_verification
        {
            let token = nanoid!(32);
            let url = format!("{}{}", templates.reset.url, token);

            smtp.send_email(self.email.clone(), &templates.reset, json!({ "url": url }))
                .ok();

            self.password_reset = Some(PasswordReset {
                token,
                expiry: Timestamp::from_unix_timestamp_ms(
                    chrono::Utc::now()
                        .checked_add_signed(Duration::seconds(expiry.expire_password_reset))
                        .expect("failed to checked_add_signed")
                        .timestamp_millis(),
                ),
            });

            campus.database.save_user(self).await
        } else {
            Err(Error::OperationFailed)
        }
    }

    /// Check the given plaintext password against the stored hash
    pub fn verify_password(&self, plaintext: &str) -> Success {
        verify_password(plaintext, &self.password)
    }

    /// Replace the stored password hash
    pub async fn update_password(&mut self, campus: &Campus, plaintext: String) -> Success {
        if !(5..=255).contains(&plaintext.chars().count()) {
            return Err(Error::IncorrectData { with: "password" });
        }

        self.password = hash_password(plaintext)?;
        self.password_reset = None;

        info!("password_changed|{}", self.username);

        campus.database.save_user(self).await
    }

    /// Create a new session
    pub async fn create_session(&self, campus: &Campus, name: String) -> Result<Session> {
        let session = Session {
            id: ulid::Ulid::new().to_string(),
            token: nanoid!(64),

            user_id: self.id.clone(),
            name,
        };

        campus.database.save_session(&session).await?;

        campus
            .publish_event(CampusEvent::CreateSession {
                session: session.clone(),
            })
            .await;

        Ok(session)
    }
}
