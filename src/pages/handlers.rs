//! Storefront page handlers
//!
//! Landing, melon listing, melon detail and the login placeholder. Every
//! page shows, and thereby consumes, the session's pending flash notices.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::Uri,
    response::Html,
    routing::get,
    Extension, Form, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::render;
use crate::{
    catalog::ItemId,
    errors::{Result, StoreError},
    session::CurrentSession,
    state::{AppState, SharedState},
};

/// Body returned by `POST /login` until logins exist
pub const LOGIN_NOT_IMPLEMENTED_MESSAGE: &str = "Oops! This needs to be implemented";

/// Creates routes for the browsing pages and login
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/melons", get(list_melons))
        .route("/melon/:id", get(show_melon))
        .route("/login", get(show_login).post(process_login))
}

/// Credentials posted by the login form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn take_flashes(state: &AppState, session: &CurrentSession) -> Vec<String> {
    session
        .id()
        .map(|id| state.sessions.take_flashes(&id))
        .unwrap_or_default()
}

/// Endpoint: GET /
async fn index(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
) -> Html<String> {
    Html(render::homepage(&take_flashes(&state, &session)))
}

/// Endpoint: GET /melons
/// Lists every melon in the catalog.
async fn list_melons(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
) -> Html<String> {
    let flashes = take_flashes(&state, &session);
    Html(render::all_melons(state.catalog.all(), &flashes))
}

/// Endpoint: GET /melon/:id
/// Shows everything about one melon, with a button to buy it.
async fn show_melon(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
    uri: Uri,
    id: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<Html<String>> {
    let Path(id) = id.map_err(|_| StoreError::PageNotFound(uri.path().to_string()))?;
    let melon = state.catalog.get(id).ok_or(StoreError::NotFound(id))?;

    let flashes = take_flashes(&state, &session);
    Ok(Html(render::melon_details(melon, &flashes)))
}

/// Endpoint: GET /login
async fn show_login(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
) -> Html<String> {
    Html(render::login_form(&take_flashes(&state, &session)))
}

/// Endpoint: POST /login
/// Accepts the form but does not log anyone in yet. A missing or malformed
/// form gets the same answer.
async fn process_login(form: std::result::Result<Form<LoginForm>, FormRejection>) -> StoreError {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    debug!(
        email_given = !form.email.is_empty(),
        password_given = !form.password.is_empty(),
        "login attempted"
    );

    StoreError::NotImplemented(LOGIN_NOT_IMPLEMENTED_MESSAGE)
}

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> StoreError {
    StoreError::PageNotFound(uri.path().to_string())
}
