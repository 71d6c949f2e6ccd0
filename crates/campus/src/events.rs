use crate::models::{Course, Session, User};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event_type")]
pub enum CampusEvent {
    CreateUser {
        user: User,
    },
    CreateSession {
        session: Session,
    },
    DeleteSession {
        user_id: String,
        session_id: String,
    },
    CreateCourse {
        course: Course,
    },
    DeleteCourse {
        course_id: String,
    },
}
