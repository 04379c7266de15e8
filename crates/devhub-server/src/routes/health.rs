//! Liveness endpoint

use devhub_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;

use crate::constants::HEALTH_STATUS_OK;

/// Health body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` while serving
    pub status: &'static str,
    /// Seconds since the application context was built
    pub uptime_seconds: u64,
    /// Active document store provider
    pub store: String,
}

/// `GET /api/health`
#[get("/health")]
pub fn health(context: &State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS_OK,
        uptime_seconds: context.uptime().as_secs(),
        store: context.store().provider_name().to_string(),
    })
}
