//! Standalone Campus server
//!
//! Environment variables:
//! - `MONGO_URI`: MongoDB connection string
//! - `MONGO_DATABASE`: database name
//! - `FILES_DIR`: directory uploads are stored in
//! - `PUBLIC_URL`: base URL the server is reachable at
//! - `SMTP_HOST` / `SMTP_USERNAME` / `SMTP_PASSWORD` / `SMTP_FROM`:
//!   enable email verification when all are present
use std::env;

use campus::config::{
    EmailExpiryConfig, EmailVerificationConfig, SMTPSettings, Template, Templates,
};
use campus::{Campus, CampusEvent, Config, Database, FileStore, Migration};
use log::info;
use mongodb::Client;
use rocket::fs::FileServer;

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn config_from_env(public_url: &str) -> Config {
    let (Ok(host), Ok(username), Ok(password), Ok(from)) = (
        env::var("SMTP_HOST"),
        env::var("SMTP_USERNAME"),
        env::var("SMTP_PASSWORD"),
        env::var("SMTP_FROM"),
    ) else {
        return Config::default();
    };

    Config {
        email_verification: EmailVerificationConfig::Enabled {
            smtp: SMTPSettings {
                from,
                reply_to: env::var("SMTP_REPLY_TO").ok(),
                host,
                port: env::var("SMTP_PORT").ok().and_then(|port| port.parse().ok()),
                username,
                password,
                use_tls: None,
            },
            templates: Templates {
                verify: Template {
                    title: "Verify your Campus account".to_string(),
                    text: "Please verify your account here: {{url}}".to_string(),
                    html: None,
                    url: format!("{}/auth/verify/", public_url),
                },
                reset: Template {
                    title: "Reset your Campus password".to_string(),
                    text: "Reset your password here: {{url}}".to_string(),
                    html: None,
                    url: format!("{}/auth/reset/", public_url),
                },
            },
            expiry: EmailExpiryConfig::default(),
        },
    }
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mongo_uri = var_or("MONGO_URI", "mongodb://localhost:27017");
    let mongo_database = var_or("MONGO_DATABASE", "campus");
    let files_dir = var_or("FILES_DIR", "data/uploads");
    let public_url = var_or("PUBLIC_URL", "http://localhost:8000");

    let client = Client::with_uri_str(&mongo_uri)
        .await
        .expect("valid MongoDB connection string");

    let database = Database::MongoDb(campus::database::MongoDb(
        client.database(&mongo_database),
    ));

    database
        .run_migration(Migration::M2026_01_10EnsureUpToSpec)
        .await
        .expect("database migration to succeed");

    let (sender, receiver) = async_std::channel::unbounded();

    // log events as they happen
    rocket::tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            match &event {
                CampusEvent::CreateUser { user } => info!("event|create_user|{}", user.username),
                CampusEvent::CreateSession { session } => {
                    info!("event|create_session|{}", session.user_id)
                }
                CampusEvent::DeleteSession { session_id, .. } => {
                    info!("event|delete_session|{}", session_id)
                }
                CampusEvent::CreateCourse { course } => info!("event|create_course|{}", course.name),
                CampusEvent::DeleteCourse { course_id } => {
                    info!("event|delete_course|{}", course_id)
                }
            }
        }
    });

    let campus = Campus {
        config: config_from_env(&public_url),
        database,
        files: FileStore::new(files_dir.clone(), format!("{}/files", public_url)),
        event_channel: Some(sender),
    };

    std::fs::create_dir_all(&files_dir).expect("writable upload directory");

    let _rocket = rocket::build()
        .manage(campus)
        .mount("/auth", rocket_campus::routes::account::routes())
        .mount("/users", rocket_campus::routes::users::routes())
        .mount("/authors", rocket_campus::routes::authors::routes())
        .mount("/categories", rocket_campus::routes::categories::routes())
        .mount("/courses", rocket_campus::routes::courses::routes())
        .mount("/files", FileServer::from(files_dir))
        .launch()
        .await?;

    Ok(())
}
