/// Session sign-in API routes
use crate::{
    middleware::SESSION_COOKIE,
    pages,
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub token: String,
}

/// GET /api/auth/signin
pub async fn sign_in_page() -> Html<String> {
    Html(pages::signin::render(None))
}

/// POST /api/auth/signin
/// Store a valid session token in the session cookie
pub async fn sign_in(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Response {
    let token = form.token.trim().to_string();

    match app_state.sessions.verify_session(&token) {
        Ok(email) => {
            tracing::info!(email = %email, "Signed in");
            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            (jar.add(cookie), Redirect::to("/secret")).into_response()
        }
        Err(e) => {
            tracing::warn!("Sign-in rejected: {}", e);
            (
                StatusCode::UNAUTHORIZED,
                Html(pages::signin::render(Some(
                    "That session token is invalid or has expired.",
                ))),
            )
                .into_response()
        }
    }
}

/// POST /api/auth/signout
pub async fn sign_out(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/"))
}
