//! Request handlers for the favicon key API.

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::favicon::{self, CollisionReport, KeyIndex};
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Query string of `GET /api/favicon-path`.
#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    pub link: String,
}

/// Body of the batch endpoints.
#[derive(Debug, Deserialize, Serialize)]
pub struct LinksRequest {
    pub links: Vec<String>,
}

/// Response of `POST /api/favicon-collisions`.
#[derive(Debug, Serialize)]
pub struct CollisionsResponse {
    #[serde(flatten)]
    pub report: CollisionReport,
    /// Links that fall back to the default icon.
    pub fallbacks: Vec<String>,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

pub async fn get_favicon_path(Query(query): Query<LinkQuery>) -> impl IntoResponse {
    let derivation = favicon::derive(&query.link);
    metrics::record_derivation(&derivation.path);
    metrics::record_request("favicon-path", 200);
    (StatusCode::OK, Json(derivation))
}

pub async fn post_favicon_paths(
    State(state): State<AppState>,
    Json(request): Json<LinksRequest>,
) -> impl IntoResponse {
    if let Err(response) = check_batch_size(&state, &request, "favicon-paths") {
        return response;
    }

    let derivations: Vec<_> = request
        .links
        .iter()
        .map(|link| {
            let derivation = favicon::derive(link);
            metrics::record_derivation(&derivation.path);
            derivation
        })
        .collect();

    tracing::debug!(count = derivations.len(), "Derived favicon paths");
    metrics::record_request("favicon-paths", 200);
    (StatusCode::OK, Json(derivations)).into_response()
}

pub async fn post_favicon_collisions(
    State(state): State<AppState>,
    Json(request): Json<LinksRequest>,
) -> impl IntoResponse {
    if let Err(response) = check_batch_size(&state, &request, "favicon-collisions") {
        return response;
    }

    let index = KeyIndex::from_links(&request.links);
    let report = index.report();
    if !report.is_collision_free() {
        tracing::info!(
            hostnames = report.hostnames,
            keys = report.keys,
            collisions = report.collisions.len(),
            "Favicon key collisions found"
        );
    }

    metrics::record_request("favicon-collisions", 200);
    let body = CollisionsResponse {
        report,
        fallbacks: index.fallback_links().to_vec(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

fn check_batch_size(
    state: &AppState,
    request: &LinksRequest,
    route: &'static str,
) -> Result<(), axum::response::Response> {
    let max = state.limits.max_batch_links;
    if request.links.len() > max {
        tracing::warn!(count = request.links.len(), max, route, "Batch too large");
        metrics::record_request(route, StatusCode::PAYLOAD_TOO_LARGE.as_u16());
        let message = format!("Too many links: {} (max {})", request.links.len(), max);
        return Err((StatusCode::PAYLOAD_TOO_LARGE, message).into_response());
    }
    Ok(())
}
