//! Errors surfaced by the data context and the todo item routes.
//!
//! Every variant maps to a bare status code; responses never carry a body.

use log::{error, info, warn};
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::Request;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No stored row has this id.
    #[error("todo item {0} not found")]
    NotFound(i32),

    /// The id in the request path disagrees with the id in the body.
    #[error("path id {path} does not match body id {body}")]
    IdMismatch { path: i32, body: i32 },

    #[error("store error: {0}")]
    Store(#[from] diesel::result::Error),

    #[error("failed to apply schema migrations: {0}")]
    Migration(String),
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Error::NotFound(_) => Status::NotFound,
            Error::IdMismatch { .. } => Status::BadRequest,
            Error::Store(_) | Error::Migration(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match &self {
            Error::NotFound(_) => info!("{} {}: {}", req.method(), req.uri(), self),
            Error::IdMismatch { .. } => warn!("{} {}: {}", req.method(), req.uri(), self),
            Error::Store(_) | Error::Migration(_) => {
                error!("{} {}: {}", req.method(), req.uri(), self)
            }
        }

        Response::build().status(self.status()).ok()
    }
}
