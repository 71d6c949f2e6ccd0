//! Record a watched lesson
//! POST /users/watch
use campus::models::User;
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Watch Data
#[derive(Serialize, Deserialize)]
pub struct DataWatch {
    /// Course id
    pub course: String,
    /// Lesson id
    pub lesson: String,
}

/// # Watch Response
#[derive(Serialize, Deserialize)]
pub struct ResponseWatch {
    /// False when the user is not enrolled or the lesson was already
    /// recorded
    pub applied: bool,
}

/// # Watch
///
/// Mark a lesson of an enrolled course as watched.
#[post("/watch", data = "<data>")]
pub async fn watch(
    campus: &State<Campus>,
    user: User,
    data: Json<DataWatch>,
) -> Result<Json<ResponseWatch>> {
    let data = data.into_inner();

    let applied = campus
        .database
        .add_watched_lesson(&user.id, &data.course, &data.lesson)
        .await?;

    Ok(Json(ResponseWatch { applied }))
}

#[cfg(test)]
mod tests {
    use super::ResponseWatch;
    use crate::test::*;

    #[async_std::test]
    async fn requires_enrollment() {
        let (campus, session, user, _) = for_test_authenticated("users::watch::requires_enrollment").await;
        let course = seed_course(&campus).await;

        let lesson = Course::append_lesson(
            &campus,
            &course.id,
            NewEntry {
                title: "Kinematics".to_string(),
                description: "Describing motion.".to_string(),
            },
            "http://localhost:8000/files/courses/x/videos/a.mp4".to_string(),
        )
        .await
        .unwrap();

        let database = campus.database.clone();
        let client = bootstrap_rocket(
            campus,
            "/users",
            routes![crate::routes::users::watch::watch],
        )
        .await;

        let body = json!({ "course": course.id, "lesson": lesson.id }).to_string();

        // not enrolled yet
        let res = client
            .post("/users/watch")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(body.clone())
            .dispatch()
            .await;

        let parsed =
            serde_json::from_str::<ResponseWatch>(&res.into_string().await.unwrap()).unwrap();
        assert!(!parsed.applied);

        database.add_subscription(&user.id, &course.id).await.unwrap();

        let res = client
            .post("/users/watch")
            .header(ContentType::JSON)
            .header(session_header(&session))
            .body(body)
            .dispatch()
            .await;

        let parsed =
            serde_json::from_str::<ResponseWatch>(&res.into_string().await.unwrap()).unwrap();
        assert!(parsed.applied);

        let user = database.find_user(&user.id).await.unwrap();
        assert_eq!(user.subscriptions[0].watched, vec![lesson.id]);
    }
}
