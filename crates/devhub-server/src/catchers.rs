//! JSON error catchers
//!
//! Rocket falls back to HTML error pages when a guard fails or no route
//! matches; these keep the `{ "message": ... }` shape on every failure.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};

use crate::constants::{INTERNAL_ERROR_MESSAGE, UNAUTHORIZED_MESSAGE};
use crate::error::ErrorBody;

#[catch(400)]
fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Bad request"))
}

#[catch(401)]
fn unauthorized() -> Json<ErrorBody> {
    Json(ErrorBody::new(UNAUTHORIZED_MESSAGE))
}

#[catch(404)]
fn not_found(request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody::new(format!("Not found: {}", request.uri().path())))
}

#[catch(422)]
fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody::new("Unprocessable request"))
}

#[catch(500)]
fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new(INTERNAL_ERROR_MESSAGE))
}

#[catch(default)]
fn fallback(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    let message = status.reason().unwrap_or("Request failed");
    (status, Json(ErrorBody::new(message)))
}

/// All catchers, registered at the root
pub fn json_catchers() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        not_found,
        unprocessable,
        internal_error,
        fallback
    ]
}
