//! Create an author
//! POST /authors
use campus::derive::rocket::Admin;
use campus::files::AssetScope;
use campus::models::Author;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;

/// # Author Data
#[derive(FromForm)]
pub struct DataCreateAuthor<'f> {
    pub name: String,
    pub profession: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    /// Optional portrait image
    pub image: Option<TempFile<'f>>,
}

fn validate(name: &str, profession: &str, email: Option<&str>) -> Result<()> {
    let len = |s: &str| s.chars().count();

    if !(3..=50).contains(&len(name)) {
        return Err(Error::IncorrectData { with: "name" });
    }

    if !(3..=50).contains(&len(profession)) {
        return Err(Error::IncorrectData { with: "profession" });
    }

    if let Some(email) = email {
        if !email.contains('@') {
            return Err(Error::IncorrectData { with: "email" });
        }
    }

    Ok(())
}

/// Persist an uploaded portrait and return its public URL
pub async fn store_portrait(campus: &Campus, file: &mut TempFile<'_>) -> Result<String> {
    let extension = file
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|extension| extension.as_str().to_string());

    let upload = campus
        .files
        .reserve(AssetScope::Authors, extension.as_deref())?;

    file.copy_to(&upload.dest)
        .await
        .map_err(|_| Error::FileStoreFailed)?;

    Ok(upload.url)
}

/// # Create Author
#[post("/", data = "<data>")]
pub async fn create(
    campus: &State<Campus>,
    _admin: Admin,
    data: Form<DataCreateAuthor<'_>>,
) -> Result<Json<Author>> {
    let mut data = data.into_inner();

    validate(&data.name, &data.profession, data.email.as_deref())?;

    let image = match &mut data.image {
        Some(file) => Some(store_portrait(campus, file).await?),
        None => None,
    };

    let author = Author {
        id: ulid::Ulid::new().to_string(),
        name: data.name,
        profession: data.profession,
        email: data.email,
        mobile: data.mobile,
        image,
    };

    campus.database.save_author(&author).await?;

    Ok(Json(author))
}
