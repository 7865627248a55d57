//! Routing module for the storefront

use crate::{session::session_layer, state::SharedState};
use axum::{extract::Request, middleware::Next, response::Response, Router};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: attach a session to every request
    let session = axum::middleware::from_fn_with_state(state.clone(), session_layer);

    // Routes
    Router::new()
        .merge(crate::pages::routes())
        .merge(crate::cart::routes())
        .fallback(crate::pages::not_found)
        .layer(session)
        .layer(axum::middleware::from_fn(log_failures))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Middleware: log requests that end in a client or server error
async fn log_failures(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let res = next.run(req).await;
    let status = res.status();
    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %uri, %status, "request failed");
    }
    res
}
