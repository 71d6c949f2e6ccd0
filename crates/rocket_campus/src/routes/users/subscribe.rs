//! Enroll in a course
//! POST /users/subscribe
use campus::models::User;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Enrollment Data
#[derive(Serialize, Deserialize)]
pub struct DataSubscribe {
    /// Course id
    pub course: String,
}

/// # Enrollment Response
#[derive(Serialize, Deserialize)]
pub struct ResponseSubscribe {
    /// False when the user was already enrolled
    pub applied: bool,
}

/// # Subscribe
///
/// Enroll the current user in a course. The course's subscriber counter
/// only moves when the enrollment was actually recorded.
#[post("/subscribe", data = "<data>")]
pub async fn subscribe(
    campus: &State<Campus>,
    user: User,
    data: Json<DataSubscribe>,
) -> Result<Json<ResponseSubscribe>> {
    let data = data.into_inner();

    campus.database.find_course(&data.course).await?;

    let applied = campus
        .database
        .add_subscription(&user.id, &data.course)
        .await?;

    if applied {
        campus
            .database
            .adjust_subscriber_count(&data.course, 1)
            .await?;
    }

    Ok(Json(ResponseSubscribe { applied }))
}

#[cfg(test)]
mod tests {
    use super::ResponseSubscribe;
    use crate::test::*;

    #[async_std::test]
    async fn counter_moves_once() {
        let (campus, session, _, _) = for_test_authenticated("users::subscribe::counter_moves_once").await;
        let course = seed_course(&campus).await;

        let database = campus.database.clone();
        let client = bootstrap_rocket(
            campus,
            "/users",
            routes![crate::routes::users::subscribe::subscribe],
        )
        .await;

        let res = client
            .post("/users/subscribe")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(json!({ "course": course.id }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);
        let body = serde_json::from_str::<ResponseSubscribe>(&res.into_string().await.unwrap())
            .unwrap();
        assert!(body.applied);

        // the second attempt is a no-op and must not double-count
        let res = client
            .post("/users/subscribe")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(json!({ "course": course.id }).to_string())
            .dispatch()
            .await;

        let body = serde_json::from_str::<ResponseSubscribe>(&res.into_string().await.unwrap())
            .unwrap();
        assert!(!body.applied);

        let course = database.find_course(&course.id).await.unwrap();
        assert_eq!(course.subscriptions, 1);
    }

    #[async_std::test]
    async fn fail_unknown_course() {
        let (campus, session, _, _) = for_test_authenticated("users::subscribe::fail_unknown_course").await;

        let client = bootstrap_rocket(
            campus,
            "/users",
            routes![crate::routes::users::subscribe::subscribe],
        )
        .await;

        let res = client
            .post("/users/subscribe")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(json!({ "course": "missing" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NotFound);
    }
}
