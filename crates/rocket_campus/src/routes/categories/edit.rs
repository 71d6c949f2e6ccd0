//! Edit a category
//! PATCH /categories/<id>
use campus::derive::rocket::Admin;
use campus::models::Category;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

use super::create::store_icon;

/// # Edit Data
#[derive(FromForm)]
pub struct DataEditCategory<'f> {
    pub name: Option<String>,
    /// Replacement icon image
    pub icon: Option<TempFile<'f>>,
}

/// # Edit Category
///
/// Courses keep the snapshot taken at their creation; edits here only
/// affect the category record itself.
#[patch("/<id>", data = "<data>")]
pub async fn edit(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    data: Form<DataEditCategory<'_>>,
) -> Result<Json<Category>> {
    let mut data = data.into_inner();
    let mut category = campus.database.find_category(&id).await?;

    if let Some(name) = data.name {
        if !(3..=10).contains(&name.chars().count()) {
            return Err(Error::IncorrectData { with: "name" });
        }

        category.name = name;
    }

    if let Some(file) = &mut data.icon {
        category.icon = store_icon(campus, file).await?;
    }

    campus.database.save_category(&category).await?;

    Ok(Json(category))
}
