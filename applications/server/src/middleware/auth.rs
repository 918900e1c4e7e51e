/// Admin session middleware
use crate::{error::ServerError, services::SessionService};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Cookie carrying the signed session token
pub const SESSION_COOKIE: &str = "shelf_session";

/// Email of the signed-in administrator, stored in request extensions
/// Can be used as an extractor in handlers behind [`require_admin_session`]
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
}

/// Middleware gating admin pages
///
/// No valid session redirects to the sign-in path, a session for any email
/// other than the allowed one redirects to `/`.
pub async fn require_admin_session(
    State(sessions): State<Arc<SessionService>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| bearer_token(request.headers()));

    let Some(token) = token else {
        return Redirect::to(sessions.sign_in_path()).into_response();
    };

    let email = match sessions.verify_session(&token) {
        Ok(email) => email,
        Err(e) => {
            tracing::warn!("Session verification failed: {}", e);
            return Redirect::to(sessions.sign_in_path()).into_response();
        }
    };

    if !sessions.is_allowed(&email) {
        tracing::warn!(email = %email, "Session email is not allowed on admin pages");
        return Redirect::to("/").into_response();
    }

    request.extensions_mut().insert(AdminSession { email });

    next.run(request).await
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .ok_or_else(|| ServerError::Auth("Not signed in".to_string()))
    }
}
