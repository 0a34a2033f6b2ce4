//! Authenticated session context and the capability guard.
//!
//! The session is an explicit value handed to whatever needs the caller's
//! role; there is no ambient singleton. Guard failures redirect to the safe
//! default view rather than surfacing partial content.

use super::roles::{can_access, Capability, Role};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

/// Landing view shown after any denied navigation.
pub const SAFE_VIEW: &str = "/home";

/// The caller's identity as resolved from a bearer token. An unauthenticated
/// caller carries no member id and no role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub member_id: Option<u64>,
    pub username: Option<String>,
    pub role: Option<Role>,
}

impl AuthSession {
    pub fn unauthenticated() -> Self {
        Self {
            member_id: None,
            username: None,
            role: None,
        }
    }

    pub fn for_member(member_id: u64, username: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            member_id: Some(member_id),
            username: Some(username.into()),
            role,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.member_id.is_some()
    }

    /// Capability check against this session's role. Unauthenticated and
    /// unknown-role sessions are denied everywhere.
    pub fn can(&self, capability: Capability) -> bool {
        can_access(capability, self.role)
    }
}

/// Redirect issued when a guard denies access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardRedirect {
    pub to: &'static str,
}

impl GuardRedirect {
    pub fn to_safe_view() -> Self {
        Self { to: SAFE_VIEW }
    }
}

impl IntoResponse for GuardRedirect {
    fn into_response(self) -> Response {
        (StatusCode::SEE_OTHER, [(header::LOCATION, self.to)]).into_response()
    }
}

/// Guard: the caller must be logged in at all.
pub fn require_authenticated(session: &AuthSession) -> Result<(), GuardRedirect> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(GuardRedirect::to_safe_view())
    }
}

/// Guard: the caller's role must be on the capability's allow-list.
pub fn require_capability(
    session: &AuthSession,
    capability: Capability,
) -> Result<(), GuardRedirect> {
    if session.can(capability) {
        Ok(())
    } else {
        Err(GuardRedirect::to_safe_view())
    }
}

/// Maps a bearer token to a session. The API service backs this with its
/// token store; tests use a fixed map.
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Option<AuthSession>;
}

/// Resolves the `Authorization: Bearer` header against a [`SessionResolver`].
/// A missing, malformed, or unknown token yields the unauthenticated session.
pub fn session_from_headers<S: SessionResolver>(resolver: &S, headers: &HeaderMap) -> AuthSession {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .and_then(|token| resolver.resolve(token))
        .unwrap_or_else(AuthSession::unauthenticated)
}
