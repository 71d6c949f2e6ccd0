//! Fetch a category
//! GET /categories/<id>
use campus::models::{Category, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Category
#[get("/<id>")]
pub async fn fetch(campus: &State<Campus>, _user: User, id: String) -> Result<Json<Category>> {
    Ok(Json(campus.database.find_category(&id).await?))
}
