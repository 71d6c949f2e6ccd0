//! List courses
//! GET /courses
use campus::models::{Course, Listing, Page, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # List Courses
///
/// Page through courses, optionally filtered by name. Enrollment codes
/// and addons are stripped unless the caller is an admin.
#[get("/?<name>&<page>&<size>")]
pub async fn list(
    campus: &State<Campus>,
    user: User,
    name: Option<String>,
    page: Option<u64>,
    size: Option<u64>,
) -> Result<Json<Listing<Course>>> {
    let page = Page::new(page, size);
    let name = name.unwrap_or_default();

    let mut data = campus.database.list_courses(&name, page).await?;

    if !user.is_admin {
        data = data.into_iter().map(Course::redacted).collect();
    }

    let total_elements = if name.is_empty() {
        campus.database.count_courses().await?
    } else {
        data.len() as u64
    };

    Ok(Json(Listing::new(total_elements, page, data)))
}
