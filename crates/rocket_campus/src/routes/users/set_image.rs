//! Set or clear the profile image
//! PATCH /users/me/image
//! DELETE /users/me/image
use campus::files::AssetScope;
use campus::models::User;
use campus::{Campus, Error, Result};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Image Upload
#[derive(FromForm)]
pub struct UploadImage<'f> {
    /// The image file itself
    pub file: TempFile<'f>,
}

/// # Image Response
#[derive(Serialize, Deserialize)]
pub struct ResponseImage {
    /// Public URL of the stored image
    pub url: String,
}

/// # Set Image
///
/// Store a new profile image and record its URL on the user.
#[patch("/me/image", data = "<data>")]
pub async fn set_image(
    campus: &State<Campus>,
    user: User,
    mut data: Form<UploadImage<'_>>,
) -> Result<Json<ResponseImage>> {
    let extension = data
        .file
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|extension| extension.as_str().to_string());

    let upload = campus
        .files
        .reserve(AssetScope::Users, extension.as_deref())?;

    data.file
        .copy_to(&upload.dest)
        .await
        .map_err(|_| Error::FileStoreFailed)?;

    campus
        .database
        .set_user_image(&user.id, Some(upload.url.clone()))
        .await?;

    Ok(Json(ResponseImage { url: upload.url }))
}

/// # Clear Image
///
/// Remove the current profile image URL.
#[delete("/me/image")]
pub async fn clear_image(campus: &State<Campus>, user: User) -> Result<EmptyResponse> {
    campus
        .database
        .set_user_image(&user.id, None)
        .await
        .map(|_| EmptyResponse)
}
