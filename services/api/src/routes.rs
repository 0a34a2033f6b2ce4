use crate::infra::{deserialize_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use klub::club::members::{club_router, ClubRepository, ClubService};
use klub::club::report::{ActionCounts, ReportParticipant};
use klub::club::session::SessionResolver;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ActionCountsRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) datum: NaiveDate,
    #[serde(default)]
    pub(crate) ucesnici: Vec<ReportParticipant>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ActionCountsResponse {
    pub(crate) datum: NaiveDate,
    pub(crate) counts: ActionCounts,
}

pub(crate) fn with_club_routes<R, S>(
    service: Arc<ClubService<R>>,
    sessions: Arc<S>,
) -> axum::Router
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    club_router(service, sessions)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/izvestaj/akcija",
            axum::routing::post(action_counts_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless aggregation over posted participants, for clients that already
/// hold the enrollment data (e.g. a report preview before export).
pub(crate) async fn action_counts_endpoint(
    Json(payload): Json<ActionCountsRequest>,
) -> Json<ActionCountsResponse> {
    let ActionCountsRequest { datum, ucesnici } = payload;
    let counts = ActionCounts::from_participants(&ucesnici, datum);
    Json(ActionCountsResponse { datum, counts })
}
