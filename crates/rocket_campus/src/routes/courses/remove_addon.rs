//! Remove an addon
//! DELETE /courses/addons/<id>/<addon_id>
use campus::derive::rocket::Admin;
use campus::models::Course;
use campus::{Campus, Result};
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Remove Addon
///
/// Pull an addon off a course; removing an absent addon is a no-op.
#[delete("/addons/<id>/<addon_id>")]
pub async fn remove_addon(
    campus: &State<Campus>,
    _admin: Admin,
    id: String,
    addon_id: String,
) -> Result<EmptyResponse> {
    campus.database.find_course(&id).await?;

    Course::remove_addon(campus, &id, &addon_id)
        .await
        .map(|_| EmptyResponse)
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, session, _, _) = for_test_admin("courses::remove_addon::success").await;
        let course = seed_course(&campus).await;

        let addon = Course::append_addon(
            &campus,
            &course.id,
            NewEntry {
                title: "Formula sheet".to_string(),
                description: String::new(),
            },
            "http://localhost:8000/files/sheet.png".to_string(),
        )
        .await
        .unwrap();

        let database = campus.database.clone();
        let client = bootstrap_rocket(
            campus,
            "/courses",
            routes![crate::routes::courses::remove_addon::remove_addon],
        )
        .await;

        let res = client
            .delete(format!("/courses/addons/{}/{}", course.id, addon.id))
            .header(session_header(&session))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NoContent);
        assert!(database.find_course(&course.id).await.unwrap().addons.is_empty());
    }
}
