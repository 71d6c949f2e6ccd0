//! Edit an author
//! PATCH /authors/<id>
use campus::derive::rocket::Admin;
use campus::models::Author;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

use super::create::store_portrait;

/// # Edit Data
#[derive(FromForm)]
pub struct DataEditAuthor<'f> {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    /// Replacement portrait image
    pub image: Option<TempFile<'f>>,
}

/// # Edit Author
///
/// Courses keep the snapshot taken at their creation; edits here only
/// affect the author record itself.
#[patch("/<id>", data = "<data>")]
pub async fn edit(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    data: Form<DataEditAuthor<'_>>,
) -> Result<Json<Author>> {
    let mut data = data.into_inner();
    let mut author = campus.database.find_author(&id).await?;

    let len = |s: &str| s.chars().count();

    if let Some(name) = data.name {
        if !(3..=50).contains(&len(&name)) {
            return Err(Error::IncorrectData { with: "name" });
        }

        author.name = name;
    }

    if let Some(profession) = data.profession {
        if !(3..=50).contains(&len(&profession)) {
            return Err(Error::IncorrectData { with: "profession" });
        }

        author.profession = profession;
    }

    if let Some(email) = data.email {
        if !email.contains('@') {
            return Err(Error::IncorrectData { with: "email" });
        }

        author.email = Some(email);
    }

    if let Some(mobile) = data.mobile {
        author.mobile = Some(mobile);
    }

    if let Some(file) = &mut data.image {
        author.image = Some(store_portrait(campus, file).await?);
    }

    campus.database.save_author(&author).await?;

    Ok(Json(author))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[rocket::async_test]
    async fn leaves_course_snapshots_alone() {
        let (campus, session, _, _) =
            for_test_admin("authors::edit::leaves_course_snapshots_alone").await;
        let course = seed_course(&campus).await;

        let database = campus.database.clone();
        let client = bootstrap_rocket(
            campus,
            "/authors",
            routes![crate::routes::authors::edit::edit],
        )
        .await;

        let boundary = "X-CAMPUS-BOUNDARY";
        let body = multipart_body(boundary, &[("name", "Renamed Author")], None);

        let res = client
            .patch(format!("/authors/{}", course.author.id))
            .header(multipart_content_type(boundary))
            .header(session_header(&session))
            .body(body)
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let author = database.find_author(&course.author.id).await.unwrap();
        assert_eq!(author.name, "Renamed Author");

        // the snapshot embedded in the course is untouched
        let course = database.find_course(&course.id).await.unwrap();
        assert_eq!(course.author.name, "John Smith");
    }
}
