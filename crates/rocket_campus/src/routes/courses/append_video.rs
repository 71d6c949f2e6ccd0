//! Upload a lesson video
//! PATCH /courses/video/<id>
use campus::derive::rocket::Admin;
use campus::files::AssetScope;
use campus::models::{Course, Lesson};
use campus::r#impl::NewEntry;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

/// # Video Data
#[derive(FromForm)]
pub struct DataAppendVideo<'f> {
    pub title: String,
    #[field(default = String::new())]
    pub description: String,
    /// The video file itself
    pub video: TempFile<'f>,
}

/// # Append Video
///
/// Store the uploaded video inside the course's directory tree and
/// append a lesson pointing at it.
#[patch("/video/<id>", data = "<data>")]
pub async fn append_video(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    mut data: Form<DataAppendVideo<'_>>,
) -> Result<Json<Lesson>> {
    let extension = data
        .video
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|extension| extension.as_str().to_string());

    let upload = campus
        .files
        .reserve(AssetScope::CourseVideos(&id), extension.as_deref())?;

    data.video
        .copy_to(&upload.dest)
        .await
        .map_err(|_| Error::FileStoreFailed)?;

    let lesson = Course::append_lesson(
        campus,
        &id,
        NewEntry {
            title: data.title.clone(),
            description: data.description.clone(),
        },
        upload.url,
    )
    .await?;

    Ok(Json(lesson))
}
