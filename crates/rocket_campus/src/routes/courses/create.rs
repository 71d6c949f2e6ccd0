//! Create a course
//! POST /courses
use campus::derive::rocket::Admin;
use campus::files::AssetScope;
use campus::models::Course;
use campus::r#impl::NewCourse;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

/// # Course Data
#[derive(FromForm)]
pub struct DataCreateCourse<'f> {
    pub name: String,
    pub description: String,
    /// Enrollment fee
    pub fee: u32,
    /// Author id to snapshot
    pub author: String,
    /// Category id to snapshot
    pub category: String,
    pub language: Option<String>,
    /// Optional cover image
    pub image: Option<TempFile<'f>>,
}

/// Persist an uploaded cover and return its public URL
pub async fn store_cover(campus: &Campus, file: &mut TempFile<'_>) -> Result<String> {
    let extension = file
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|extension| extension.as_str().to_string());

    let upload = campus
        .files
        .reserve(AssetScope::Courses, extension.as_deref())?;

    file.copy_to(&upload.dest)
        .await
        .map_err(|_| Error::FileStoreFailed)?;

    Ok(upload.url)
}

/// # Create Course
///
/// Creates the course with its fixed set of enrollment codes and the
/// author and category snapshots resolved at this moment.
#[post("/", data = "<data>")]
pub async fn create(
    campus: &State<Campus>,
    _admin: Admin,
    data: Form<DataCreateCourse<'_>>,
) -> Result<Json<Course>> {
    let mut data = data.into_inner();

    let image = match &mut data.image {
        Some(file) => store_cover(campus, file).await?,
        None => String::new(),
    };

    let course = Course::create(
        campus,
        NewCourse {
            name: data.name,
            description: data.description,
            fee: data.fee,
            author_id: data.author,
            category_id: data.category,
            language: data.language,
            image,
        },
    )
    .await?;

    Ok(Json(course))
}
