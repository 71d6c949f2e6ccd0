//! Fetch the learning dashboard
//! GET /users/dashboard
use campus::models::{User, UserProfile};
use campus::{Campus, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Dashboard Course
#[derive(Serialize, Deserialize)]
pub struct DashboardCourse {
    /// Course id
    pub id: String,
    pub name: String,
    /// Cover image URL
    pub image: String,
    pub lesson_count: usize,
    pub watched_count: usize,
    /// Watch progress, 0 to 100
    pub progress: f64,
}

/// # Dashboard Response
#[derive(Serialize, Deserialize)]
pub struct ResponseDashboard {
    pub user: UserProfile,
    pub courses: Vec<DashboardCourse>,
}

/// # Dashboard
///
/// The current user's profile plus watch progress for every enrolled
/// course. Enrollments whose course has since been deleted are skipped.
#[get("/dashboard")]
pub async fn dashboard(campus: &State<Campus>, user: User) -> Result<Json<ResponseDashboard>> {
    let mut courses = Vec::new();

    for subscription in &user.subscriptions {
        let Ok(course) = campus.database.find_course(&subscription.course_id).await else {
            continue;
        };

        let lesson_count = course.lessons.len();
        let watched_count = subscription
            .watched
            .iter()
            .filter(|id| course.lessons.iter().any(|lesson| &lesson.id == *id))
            .count();

        let progress = if lesson_count == 0 {
            0.0
        } else {
            watched_count as f64 / lesson_count as f64 * 100.0
        };

        courses.push(DashboardCourse {
            id: course.id,
            name: course.name,
            image: course.image,
            lesson_count,
            watched_count,
            progress,
        });
    }

    Ok(Json(ResponseDashboard {
        user: user.into(),
        courses,
    }))
}
