//! Bearer token request guards
//!
//! Tokens are read from `Authorization: Bearer <token>` and verified with
//! the `TokenVerifier` held by the managed [`AppContext`].
//!
//! | Guard | Missing / invalid token |
//! |-------|-------------------------|
//! | [`OptionalUser`] | succeeds with `None` |
//! | [`AuthenticatedUser`] | fails with 401 |

use std::convert::Infallible;

use devhub_domain::error::Error;
use devhub_domain::ports::infrastructure::AuthClaims;
use devhub_infrastructure::AppContext;
use devhub_infrastructure::constants::BEARER_PREFIX;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::debug;

use crate::constants::{AUTHORIZATION_HEADER, UNAUTHORIZED_MESSAGE};

/// Extract the bearer token from the request headers
pub fn bearer_token<'r>(request: &'r Request<'_>) -> Option<&'r str> {
    request
        .headers()
        .get_one(AUTHORIZATION_HEADER)
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn verify(request: &Request<'_>) -> Result<AuthClaims, Error> {
    let token =
        bearer_token(request).ok_or_else(|| Error::authentication(UNAUTHORIZED_MESSAGE))?;
    let context = request
        .rocket()
        .state::<AppContext>()
        .ok_or_else(|| Error::internal("Application context is not managed"))?;
    context.token_verifier().verify(token)
}

/// Identity of the caller when a valid token is presented
///
/// Never fails; an absent or invalid token yields an anonymous caller.
#[derive(Debug, Clone, Default)]
pub struct OptionalUser(pub Option<AuthClaims>);

impl OptionalUser {
    /// Subject of the token, if any
    pub fn subject(&self) -> Option<&str> {
        self.0.as_ref().map(|claims| claims.sub.as_str())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalUser {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let claims = match verify(request) {
            Ok(claims) => Some(claims),
            Err(e) => {
                if bearer_token(request).is_some() {
                    debug!(error = %e, "Ignoring invalid bearer token on optional route");
                }
                None
            }
        };
        Outcome::Success(Self(claims))
    }
}

/// Caller with a verified token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthClaims);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match verify(request) {
            Ok(claims) => Outcome::Success(Self(claims)),
            Err(e @ Error::Authentication { .. }) => Outcome::Error((Status::Unauthorized, e)),
            Err(e) => Outcome::Error((Status::InternalServerError, e)),
        }
    }
}
