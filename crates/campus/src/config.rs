use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::{Error, Result};

lazy_static! {
    static ref HANDLEBARS: handlebars::Handlebars<'static> = handlebars::Handlebars::new();
}

/// SMTP mail server configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct SMTPSettings {
    /// Sender address
    pub from: String,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// SMTP host
    pub host: String,

    /// SMTP port
    pub port: Option<i32>,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Whether to use TLS
    pub use_tls: Option<bool>,
}

impl SMTPSettings {
    /// Render a template and send it to the given mailbox
    pub fn send_email(
        &self,
        to: String,
        template: &Template,
        variables: handlebars::JsonValue,
    ) -> Result<()> {
        let message = lettre::Message::builder()
            .from(self.from.parse().map_err(|_| Error::EmailFailed)?)
            .to(to.parse().map_err(|_| Error::EmailFailed)?)
            .subject(template.title.clone());

        let message = if let Some(reply_to) = &self.reply_to {
            message.reply_to(reply_to.parse().map_err(|_| Error::EmailFailed)?)
        } else {
            message
        };

        let text = render_template(&template.text, &variables)?;
        let message = if let Some(html) = &template.html {
            message.multipart(lettre::message::MultiPart::alternative_plain_html(
                text,
                render_template(html, &variables)?,
            ))
        } else {
            message.body(text)
        }
        .map_err(|_| Error::EmailFailed)?;

        let mut relay = SmtpTransport::relay(&self.host)
            .map_err(|_| Error::EmailFailed)?
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ));

        if let Some(port) = self.port {
            relay = relay.port(port as u16);
        }

        if let Some(false) = self.use_tls {
            relay = relay.tls(lettre::transport::smtp::client::Tls::None);
        }

        if let Err(error) = relay.build().send(&message) {
            error!("Failed to send email to {}!\nlettre error: {}", to, error);
            return Err(Error::EmailFailed);
        }

        Ok(())
    }
}

fn render_template(text: &str, variables: &handlebars::JsonValue) -> Result<String> {
    HANDLEBARS
        .render_template(text, variables)
        .map_err(|_| Error::RenderFail)
}

/// Email template
#[derive(Serialize, Deserialize, Clone)]
pub struct Template {
    /// Title of the email
    pub title: String,
    /// Plain text version of this email
    pub text: String,
    /// HTML version of this email
    pub html: Option<String>,
    /// URL to redirect people to from the email
    ///
    /// Any given URL will be suffixed with a unique token,
    /// e.g. `https://example.com?t=` becomes `https://example.com?t=UNIQUE_CODE`
    pub url: String,
}

/// Email templates
#[derive(Serialize, Deserialize, Clone)]
pub struct Templates {
    /// Template for email verification
    pub verify: Template,
    /// Template for password reset
    pub reset: Template,
}

/// Email expiration config
#[derive(Serialize, Deserialize, Clone)]
pub struct EmailExpiryConfig {
    /// How long email verification codes should last for (in seconds)
    pub expire_verification: i64,
    /// How long password reset codes should last for (in seconds)
    pub expire_password_reset: i64,
}

impl Default for EmailExpiryConfig {
    fn default() -> EmailExpiryConfig {
        EmailExpiryConfig {
            expire_verification: 3600 * 24,
            expire_password_reset: 3600,
        }
    }
}

/// Email verification config
#[derive(Default, Serialize, Deserialize, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum EmailVerificationConfig {
    /// Don't require email verification
    #[default]
    Disabled,
    /// Use email verification
    Enabled {
        smtp: SMTPSettings,
        templates: Templates,
        expiry: EmailExpiryConfig,
    },
}

/// Campus configuration
#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Email verification
    pub email_verification: EmailVerificationConfig,
}
