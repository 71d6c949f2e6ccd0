//! Edit a course
//! PATCH /courses/<id>
use campus::derive::rocket::Admin;
use campus::models::Course;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

use super::create::store_cover;

/// # Edit Data
#[derive(FromForm)]
pub struct DataEditCourse<'f> {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fee: Option<u32>,
    pub language: Option<String>,
    /// Replacement cover image
    pub image: Option<TempFile<'f>>,
}

/// # Edit Course
///
/// Update course details. The author and category snapshots and the
/// embedded collections are not editable here.
#[patch("/<id>", data = "<data>")]
pub async fn edit(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    data: Form<DataEditCourse<'_>>,
) -> Result<Json<Course>> {
    let mut data = data.into_inner();
    let mut course = campus.database.find_course(&id).await?;

    if let Some(name) = data.name {
        if name != course.name
            && campus
                .database
                .find_course_by_name(&name)
                .await?
                .is_some()
        {
            return Err(Error::CourseNameTaken);
        }

        course.name = name;
    }

    if let Some(description) = data.description {
        course.description = description;
    }

    if let Some(fee) = data.fee {
        course.fee = fee;
    }

    if let Some(language) = data.language {
        course.language = Some(language);
    }

    if let Some(file) = &mut data.image {
        course.image = store_cover(campus, file).await?;
    }

    course.validate()?;

    campus.database.save_course(&course).await?;

    Ok(Json(course))
}
