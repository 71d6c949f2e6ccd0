//! Create a category
//! POST /categories
use campus::derive::rocket::Admin;
use campus::files::AssetScope;
use campus::models::Category;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

/// # Category Data
#[derive(FromForm)]
pub struct DataCreateCategory<'f> {
    pub name: String,
    /// Icon image, required
    pub icon: Option<TempFile<'f>>,
}

fn validate_name(name: &str) -> Result<()> {
    if !(3..=10).contains(&name.chars().count()) {
        return Err(Error::IncorrectData { with: "name" });
    }

    Ok(())
}

/// Persist an uploaded icon and return its public URL
pub async fn store_icon(campus: &Campus, file: &mut TempFile<'_>) -> Result<String> {
    let extension = file
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|extension| extension.as_str().to_string());

    let upload = campus
        .files
        .reserve(AssetScope::Categories, extension.as_deref())?;

    file.copy_to(&upload.dest)
        .await
        .map_err(|_| Error::FileStoreFailed)?;

    Ok(upload.url)
}

/// # Create Category
#[post("/", data = "<data>")]
pub async fn create(
    campus: &State<Campus>,
    _admin: Admin,
    data: Form<DataCreateCategory<'_>>,
) -> Result<Json<Category>> {
    let mut data = data.into_inner();

    validate_name(&data.name)?;

    let icon = match &mut data.icon {
        Some(file) => store_icon(campus, file).await?,
        None => return Err(Error::IncorrectData { with: "icon" }),
    };

    let category = Category {
        id: ulid::Ulid::new().to_string(),
        name: data.name,
        icon,
    };

    campus.database.save_category(&category).await?;

    Ok(Json(category))
}
