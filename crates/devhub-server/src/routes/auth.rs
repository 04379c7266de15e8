//! Token introspection endpoint

use devhub_domain::error::Error;
use devhub_domain::ports::infrastructure::AuthClaims;
use rocket::get;
use rocket::serde::json::Json;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;

/// `GET /api/auth/me`
///
/// Returns the verified claims of the bearer token.
#[get("/auth/me")]
pub fn me(user: Result<AuthenticatedUser, Error>) -> Result<Json<AuthClaims>, ApiError> {
    let AuthenticatedUser(claims) = user?;
    Ok(Json(claims))
}
