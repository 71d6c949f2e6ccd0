//! List authors
//! GET /authors
use campus::models::{Author, Listing, Page, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # List Authors
///
/// Page through authors, optionally filtered by name.
#[get("/?<name>&<page>&<size>")]
pub async fn list(
    campus: &State<Campus>,
    _user: User,
    name: Option<String>,
    page: Option<u64>,
    size: Option<u64>,
) -> Result<Json<Listing<Author>>> {
    let page = Page::new(page, size);
    let name = name.unwrap_or_default();

    let data = campus.database.list_authors(&name, page).await?;

    let total_elements = if name.is_empty() {
        campus.database.count_authors().await?
    } else {
        data.len() as u64
    };

    Ok(Json(Listing::new(total_elements, page, data)))
}
