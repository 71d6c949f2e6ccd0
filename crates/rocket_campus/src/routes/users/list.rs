//! List users
//! GET /users
use campus::models::{Listing, Page, User, UserProfile};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # List Users
///
/// Page through users, optionally filtered by first name. When a filter
/// is given the reported total covers the filtered page only.
#[get("/?<name>&<page>&<size>")]
pub async fn list(
    campus: &State<Campus>,
    _user: User,
    name: Option<String>,
    page: Option<u64>,
    size: Option<u64>,
) -> Result<Json<Listing<UserProfile>>> {
    let page = Page::new(page, size);
    let name = name.unwrap_or_default();

    let data = campus.database.list_users(&name, page).await?;

    let total_elements = if name.is_empty() {
        campus.database.count_users().await?
    } else {
        data.len() as u64
    };

    Ok(Json(Listing::new(
        total_elements,
        page,
        data.into_iter().map(UserProfile::from).collect(),
    )))
}
