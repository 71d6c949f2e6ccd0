//! Fetch the addons of a course
//! GET /courses/addons/<id>
use campus::models::{Addon, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Addons
///
/// Addons are supplementary material, available to any signed-in user.
#[get("/addons/<id>")]
pub async fn fetch_addons(
    campus: &State<Campus>,
    _user: User,
    id: String,
) -> Result<Json<Vec<Addon>>> {
    Ok(Json(campus.database.find_course(&id).await?.addons))
}
