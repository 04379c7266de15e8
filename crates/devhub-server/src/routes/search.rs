//! Aggregated search endpoint

use devhub_domain::value_objects::{SearchQuery, SearchResult};
use devhub_infrastructure::AppContext;
use devhub_infrastructure::utils::TimedOperation;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;
use tracing::info;

use crate::auth::OptionalUser;
use crate::error::ApiError;

/// Successful search body
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Always `true`
    pub success: bool,
    /// Ranked results, at most ten
    pub results: Vec<SearchResult>,
}

/// `GET /api/search?q=<text>`
///
/// A missing or blank `q` is rejected before the store is touched.
#[get("/search?<q>")]
pub async fn search(
    q: Option<String>,
    user: OptionalUser,
    context: &State<AppContext>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = SearchQuery::parse(q.as_deref())?;
    let timer = TimedOperation::start();

    let results = context.search().search(&query).await?;

    info!(
        query = query.text(),
        user = user.subject().unwrap_or("anonymous"),
        results = results.len(),
        elapsed_ms = timer.elapsed_ms(),
        "Search completed"
    );

    Ok(Json(SearchResponse {
        success: true,
        results,
    }))
}
