#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "type")]
pub enum Error {
    IncorrectData {
        with: &'static str,
    },
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,
    OperationFailed,

    RenderFail,
    MissingHeaders,
    EmailFailed,
    FileStoreFailed,

    InvalidSession,
    InvalidCredentials,
    InvalidToken,
    UnverifiedAccount,
    NotPrivileged,

    UnknownUser,
    UnknownAuthor,
    UnknownCategory,
    UnknownCourse,
    UnknownToken,

    UsernameTaken,
    CourseNameTaken,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
