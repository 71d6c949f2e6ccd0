use rocket::{
    http::{ContentType, Status},
    outcome::Outcome,
    request::{self, FromRequest},
    response::{self, Responder},
    Request, Response,
};

use crate::{
    models::{Session, User},
    Campus, Error,
};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self {
            Error::IncorrectData { .. } => Status::BadRequest,
            Error::MissingHeaders => Status::BadRequest,

            Error::InvalidSession => Status::Unauthorized,
            Error::InvalidCredentials => Status::Unauthorized,
            Error::InvalidToken => Status::Unauthorized,

            Error::UnverifiedAccount => Status::Forbidden,
            Error::NotPrivileged => Status::Forbidden,

            Error::UnknownUser => Status::NotFound,
            Error::UnknownAuthor => Status::NotFound,
            Error::UnknownCategory => Status::NotFound,
            Error::UnknownCourse => Status::NotFound,
            Error::UnknownToken => Status::NotFound,

            Error::UsernameTaken => Status::Conflict,
            Error::CourseNameTaken => Status::Conflict,

            Error::DatabaseError { .. } => Status::InternalServerError,
            Error::InternalError => Status::InternalServerError,
            Error::OperationFailed => Status::InternalServerError,
            Error::RenderFail => Status::InternalServerError,
            Error::EmailFailed => Status::InternalServerError,
            Error::FileStoreFailed => Status::InternalServerError,
        };

        // Serialize the error data structure into JSON.
        let string = json!(self).to_string();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), std::io::Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let header_session_token = request
            .headers()
            .get("x-session-token")
            .next()
            .map(|x| x.to_string());

        match (request.rocket().state::<Campus>(), header_session_token) {
            (Some(campus), Some(token)) => {
                if let Ok(Some(session)) = campus.database.find_session_by_token(&token).await {
                    Outcome::Success(session)
                } else {
                    Outcome::Error((Status::Unauthorized, Error::InvalidSession))
                }
            }
            (_, _) => Outcome::Error((Status::BadRequest, Error::MissingHeaders)),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for User {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match request.guard::<Session>().await {
            Outcome::Success(session) => {
                let campus = request.rocket().state::<Campus>().unwrap();

                if let Ok(user) = campus.database.find_user(&session.user_id).await {
                    Outcome::Success(user)
                } else {
                    Outcome::Error((Status::InternalServerError, Error::InternalError))
                }
            }
            Outcome::Forward(status) => Outcome::Forward(status),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }
}

/// Request guard for admin-only operations
pub struct Admin(pub User);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match request.guard::<User>().await {
            Outcome::Success(user) => {
                if user.is_admin {
                    Outcome::Success(Admin(user))
                } else {
                    Outcome::Error((Status::Forbidden, Error::NotPrivileged))
                }
            }
            Outcome::Forward(status) => Outcome::Forward(status),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }
}
