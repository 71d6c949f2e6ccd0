//! Delete a category
//! DELETE /categories/<id>
use campus::derive::rocket::Admin;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Delete Category
///
/// Remove a category record. Existing courses keep their embedded
/// snapshot.
#[delete("/<id>")]
pub async fn delete(campus: &State<Campus>, _admin: Admin, id: String) -> Result<EmptyResponse> {
    campus.database.find_category(&id).await?;

    campus
        .database
        .delete_category(&id)
        .await
        .map(|_| EmptyResponse)
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, session, _, _) = for_test_admin("categories::delete::success").await;
        let (_, category) = seed_catalog(&campus).await;

        let database = campus.database.clone();
        let client = bootstrap_rocket(
            campus,
            "/categories",
            routes![crate::routes::categories::delete::delete],
        )
        .await;

        let res = client
            .delete(format!("/categories/{}", category.id))
            .header(session_header(&session))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NoContent);
        assert!(database.find_category(&category.id).await.is_err());
    }
}
