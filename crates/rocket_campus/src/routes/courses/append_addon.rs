//! Upload an addon
//! PATCH /courses/addons/<id>
use campus::derive::rocket::Admin;
use campus::files::AssetScope;
use campus::models::{Addon, Course};
use campus::r#impl::NewEntry;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

/// # Addon Data
#[derive(FromForm)]
pub struct DataAppendAddon<'f> {
    pub title: String,
    #[field(default = String::new())]
    pub description: String,
    /// The addon image itself
    pub image: TempFile<'f>,
}

/// # Append Addon
///
/// Store the uploaded image inside the course's directory tree and
/// append an addon bundling it.
#[patch("/addons/<id>", data = "<data>")]
pub async fn append_addon(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    mut data: Form<DataAppendAddon<'_>>,
) -> Result<Json<Addon>> {
    let extension = data
        .image
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|extension| extension.as_str().to_string());

    let upload = campus
        .files
        .reserve(AssetScope::CourseAddons(&id), extension.as_deref())?;

    data.image
        .copy_to(&upload.dest)
        .await
        .map_err(|_| Error::FileStoreFailed)?;

    let addon = Course::append_addon(
        campus,
        &id,
        NewEntry {
            title: data.title.clone(),
            description: data.description.clone(),
        },
        upload.url,
    )
    .await?;

    Ok(Json(addon))
}
