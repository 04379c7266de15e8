//! Centralized error mapping
//!
//! Every route returns `Result<_, ApiError>`. The responder picks the
//! status, logs the failure and writes a `{ "message": ... }` body. Details
//! of server-side failures never reach the client.

use devhub_domain::error::Error;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::constants::INTERNAL_ERROR_MESSAGE;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable message
    pub message: String,
}

impl ErrorBody {
    /// Create a body with `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Domain error on its way to an HTTP response
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// Status code for the wrapped error
    pub fn status(&self) -> Status {
        match &self.0 {
            Error::InvalidArgument { .. } => Status::BadRequest,
            Error::Authentication { .. } => Status::Unauthorized,
            Error::NotFound { .. } => Status::NotFound,
            _ => Status::InternalServerError,
        }
    }

    /// Message exposed to the client
    pub fn message(&self) -> String {
        match &self.0 {
            Error::InvalidArgument { message } | Error::Authentication { message, .. } => {
                message.clone()
            }
            Error::NotFound { resource } => format!("Not found: {resource}"),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if self.0.is_client_error() {
            warn!(
                method = %request.method(),
                uri = %request.uri(),
                status = status.code,
                error = %self.0,
                "Request rejected"
            );
        } else {
            error!(
                method = %request.method(),
                uri = %request.uri(),
                error = %self.0,
                "Request failed"
            );
        }

        (status, Json(ErrorBody::new(self.message()))).respond_to(request)
    }
}
