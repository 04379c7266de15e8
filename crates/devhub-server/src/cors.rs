//! CORS response fairing

use std::io::Cursor;

use devhub_infrastructure::config::CorsConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};

/// Attaches CORS headers according to [`CorsConfig`]
///
/// Preflight `OPTIONS` requests are answered with `204 No Content`.
pub struct Cors {
    config: CorsConfig,
}

impl Cors {
    /// Create the fairing for `config`
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let origin = request.headers().get_one("Origin");
        let Some(allowed) = self.config.allow_origin(origin) else {
            return;
        };

        response.set_header(Header::new("Access-Control-Allow-Origin", allowed));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Authorization, Content-Type",
        ));
        response.set_header(Header::new("Vary", "Origin"));

        if request.method() == Method::Options && response.status() == Status::NotFound {
            response.set_status(Status::NoContent);
            response.set_sized_body(0, Cursor::new(""));
        }
    }
}
