//! Fetch a course
//! GET /courses/<id>
use campus::models::{Course, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Course
///
/// Enrollment codes and addons are stripped unless the caller is an
/// admin.
#[get("/<id>")]
pub async fn fetch(campus: &State<Campus>, user: User, id: String) -> Result<Json<Course>> {
    let course = campus.database.find_course(&id).await?;

    Ok(Json(if user.is_admin {
        course
    } else {
        course.redacted()
    }))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (campus, session, _, _) = for_test_authenticated("courses::fetch::success").await;
        let course = seed_course(&campus).await;

        let client = bootstrap_rocket(
            campus,
            "/courses",
            routes![crate::routes::courses::fetch::fetch],
        )
        .await;

        let res = client
            .get(format!("/courses/{}", course.id))
            .header(session_header(&session))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let fetched =
            serde_json::from_str::<Course>(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(fetched.name, "Physics 101");
        assert!(fetched.tokens.is_empty());
    }

    #[async_std::test]
    async fn fail_unknown_course() {
        let (campus, session, _, _) = for_test_authenticated("courses::fetch::fail_unknown_course").await;

        let client = bootstrap_rocket(
            campus,
            "/courses",
            routes![crate::routes::courses::fetch::fetch],
        )
        .await;

        let res = client
            .get("/courses/missing")
            .header(session_header(&session))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"UnknownCourse\"}".into())
        );
    }
}
