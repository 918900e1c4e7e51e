/// HTTP routing
use crate::{api, middleware, pages, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/albums", get(api::albums::list_albums))
        .route("/albums/import", post(api::albums::import_album))
        .route(
            "/auth/signin",
            get(api::auth::sign_in_page).post(api::auth::sign_in),
        )
        .route("/auth/signout", post(api::auth::sign_out));

    // Admin pages (session required)
    let admin_routes = Router::new()
        .route("/secret", get(pages::secret::import_page))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.sessions),
            middleware::require_admin_session,
        ));

    Router::new()
        .route("/", get(pages::albums::index))
        .merge(admin_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
