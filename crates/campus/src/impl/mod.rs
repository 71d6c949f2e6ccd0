mod course;
mod session;
mod user;

pub use course::{NewCourse, NewEntry, TOKEN_COUNT};
pub use user::NewUser;
