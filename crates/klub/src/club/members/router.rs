use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::EnrollmentStatus;
use super::repository::ClubRepository;
use super::service::{ClubService, ClubServiceError};
use crate::club::roles::Capability;
use crate::club::session::{
    require_authenticated, require_capability, session_from_headers, AuthSession, GuardRedirect,
    SessionResolver,
};

/// Router builder exposing the member, enrollment, and report endpoints.
/// Every guarded handler resolves the bearer session first and evaluates the
/// route's capability before touching any data.
pub fn club_router<R, S>(service: Arc<ClubService<R>>, sessions: Arc<S>) -> Router
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    Router::new()
        .route("/api/me", get(me_handler::<R, S>))
        .route("/api/me/prijave", get(my_enrollments_handler::<R, S>))
        .route("/api/korisnici/:id", get(member_handler::<R, S>))
        .route(
            "/api/korisnici/:id/statistika",
            get(statistics_handler::<R, S>),
        )
        .route("/api/akcije/:id/prijave", get(enrollments_handler::<R, S>))
        .route(
            "/api/prijave/:id/status",
            patch(enrollment_status_handler::<R, S>),
        )
        .route(
            "/api/izvestaj/godisnji/:godina",
            get(annual_report_handler::<R, S>),
        )
        .with_state(ClubRouterState { service, sessions })
}

pub struct ClubRouterState<R, S> {
    service: Arc<ClubService<R>>,
    sessions: Arc<S>,
}

impl<R, S> Clone for ClubRouterState<R, S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<R, S> ClubRouterState<R, S>
where
    S: SessionResolver,
{
    fn session(&self, headers: &HeaderMap) -> AuthSession {
        session_from_headers(self.sessions.as_ref(), headers)
    }
}

fn service_error_response(error: ClubServiceError) -> Response {
    if error.is_not_found() {
        let payload = json!({ "error": "Zapis nije pronađen" });
        (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
    } else {
        let payload = json!({ "error": error.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
    }
}

pub(crate) async fn me_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_authenticated(&session) {
        return redirect.into_response();
    }
    let Some(member_id) = session.member_id else {
        return GuardRedirect::to_safe_view().into_response();
    };

    match state.service.profile(member_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn my_enrollments_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_authenticated(&session) {
        return redirect.into_response();
    }
    let Some(member_id) = session.member_id else {
        return GuardRedirect::to_safe_view().into_response();
    };

    match state.service.enrollments_for_member(member_id) {
        Ok(enrollments) => (StatusCode::OK, axum::Json(enrollments)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn member_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
    Path(member_id): Path<u64>,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_authenticated(&session) {
        return redirect.into_response();
    }

    match state.service.profile(member_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn statistics_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
    Path(member_id): Path<u64>,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_authenticated(&session) {
        return redirect.into_response();
    }

    match state.service.statistics(member_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn enrollments_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
    Path(action_id): Path<u64>,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_authenticated(&session) {
        return redirect.into_response();
    }

    match state.service.enrollments_for_action(action_id) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => service_error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    status: String,
}

pub(crate) async fn enrollment_status_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
    Path(enrollment_id): Path<u64>,
    axum::Json(payload): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_capability(&session, Capability::CreateAction) {
        return redirect.into_response();
    }

    let status = match EnrollmentStatus::parse(&payload.status) {
        Some(status) => status,
        None => {
            let payload = json!({ "error": "Nevažeći status" });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match state.service.set_enrollment_status(enrollment_id, status) {
        Ok(enrollment) => (StatusCode::OK, axum::Json(enrollment)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn annual_report_handler<R, S>(
    State(state): State<ClubRouterState<R, S>>,
    headers: HeaderMap,
    Path(godina): Path<i32>,
) -> Response
where
    R: ClubRepository + 'static,
    S: SessionResolver + 'static,
{
    let session = state.session(&headers);
    if let Err(redirect) = require_capability(&session, Capability::ExportAnnualReport) {
        return redirect.into_response();
    }

    match state.service.annual_report(godina) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}
