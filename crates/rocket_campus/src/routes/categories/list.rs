//! List categories
//! GET /categories
use campus::models::{Category, Listing, Page, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # List Categories
#[get("/?<name>&<page>&<size>")]
pub async fn list(
    campus: &State<Campus>,
    _user: User,
    name: Option<String>,
    page: Option<u64>,
    size: Option<u64>,
) -> Result<Json<Listing<Category>>> {
    let page = Page::new(page, size);
    let name = name.unwrap_or_default();

    let data = campus.database.list_categories(&name, page).await?;

    let total_elements = if name.is_empty() {
        campus.database.count_categories().await?
    } else {
        data.len() as u64
    };

    Ok(Json(Listing::new(total_elements, page, data)))
}
