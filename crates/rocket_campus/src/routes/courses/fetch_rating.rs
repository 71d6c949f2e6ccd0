//! Fetch the rating summary of a course
//! GET /courses/rate/<id>
use campus::models::{Course, ReviewSummary, User};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Rating
///
/// Rated reviews only; unrated sentinel entries never appear.
#[get("/rate/<id>")]
pub async fn fetch_rating(
    campus: &State<Campus>,
    user: User,
    id: String,
) -> Result<Json<ReviewSummary>> {
    Ok(Json(Course::review_summary(campus, &id, &user.id).await?))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn averages_ratings() {
        let (campus, session, user, _) = for_test_authenticated("courses::fetch_rating::averages_ratings").await;
        let course = seed_course(&campus).await;

        let other = test_reviewer("other");

        Course::submit_review(&campus, &course.id, &user, 4, "Enjoyed it.".to_string())
            .await
            .unwrap();
        Course::submit_review(&campus, &course.id, &other, 5, "Loved it.".to_string())
            .await
            .unwrap();

        let client = bootstrap_rocket(
            campus,
            "/courses",
            routes![crate::routes::courses::fetch_rating::fetch_rating],
        )
        .await;

        let res = client
            .get(format!("/courses/rate/{}", course.id))
            .header(session_header(&session))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let summary =
            serde_json::from_str::<ReviewSummary>(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(summary.reviews_count, 2);
        assert!((summary.avg_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(summary.user_review.unwrap().id, user.id);
    }

    #[async_std::test]
    async fn empty_course_averages_zero() {
        let (campus, session, _, _) =
            for_test_authenticated("courses::fetch_rating::empty_course_averages_zero").await;
        let course = seed_course(&campus).await;

        let client = bootstrap_rocket(
            campus,
            "/courses",
            routes![crate::routes::courses::fetch_rating::fetch_rating],
        )
        .await;

        let res = client
            .get(format!("/courses/rate/{}", course.id))
            .header(session_header(&session))
            .dispatch()
            .await;

        let summary =
            serde_json::from_str::<ReviewSummary>(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(summary.reviews_count, 0);
        assert_eq!(summary.avg_rating, 0.0);
        assert!(summary.user_review.is_none());
    }
}
