//! API routes

pub mod auth;
pub mod health;
pub mod search;

use rocket::{Route, routes};

/// Every API route, mounted under [`crate::constants::API_BASE`]
pub fn api_routes() -> Vec<Route> {
    routes![search::search, health::health, auth::me]
}
