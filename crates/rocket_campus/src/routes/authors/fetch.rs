//! Fetch an author
//! GET /authors/<id>
use campus::models::{Author, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Author
#[get("/<id>")]
pub async fn fetch(campus: &State<Campus>, _user: User, id: String) -> Result<Json<Author>> {
    Ok(Json(campus.database.find_author(&id).await?))
}
