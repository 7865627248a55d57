//! HTTP handlers for shopping cart operations
//!
//! This module implements the cart view, add-to-cart and the checkout
//! placeholder.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Extension, Router,
};
use tracing::info;

use super::helpers::aggregate_cart;
use crate::{
    catalog::ItemId,
    errors::{Result, StoreError},
    pages::render,
    session::CurrentSession,
    state::SharedState,
};

/// Notice shown after a melon is added
pub const ADDED_TO_CART_MESSAGE: &str = "Successfully added to cart.";

/// Notice shown when checkout is attempted
pub const CHECKOUT_UNAVAILABLE_MESSAGE: &str =
    "Sorry! Checkout will be implemented in a future version.";

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(shopping_cart))
        .route("/add_to_cart/:id", get(add_to_cart))
        .route("/checkout", get(checkout))
}

/// Endpoint: GET /cart
/// Shows every melon in the cart with its quantity, subtotal and the order total.
async fn shopping_cart(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
) -> Html<String> {
    let (cart, flashes) = match session.id() {
        Some(id) => (state.sessions.cart(&id), state.sessions.take_flashes(&id)),
        None => (Vec::new(), Vec::new()),
    };
    let summary = aggregate_cart(&cart, state.catalog.as_ref());

    Html(render::cart(&summary, &flashes))
}

/// Endpoint: GET /add_to_cart/:id
/// Appends the melon to the session cart and redirects to the cart view.
///
/// The id is not checked against the catalog here; the cart view reports
/// unknown ids when it aggregates.
async fn add_to_cart(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
    uri: Uri,
    id: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<Redirect> {
    let Path(id) = id.map_err(|_| StoreError::PageNotFound(uri.path().to_string()))?;

    let session_id = session.get_or_create(&state.sessions);
    state.sessions.with_session(&session_id, |session| {
        session.add_to_cart(id);
        session.flash(ADDED_TO_CART_MESSAGE);
    });

    Ok(Redirect::to("/cart"))
}

/// Endpoint: GET /checkout
/// Placeholder: leaves the cart untouched, explains checkout is unavailable
/// and sends the shopper back to the melon list.
async fn checkout(
    State(state): State<SharedState>,
    Extension(session): Extension<CurrentSession>,
) -> impl IntoResponse {
    let session_id = session.get_or_create(&state.sessions);
    info!(
        session = %session_id,
        items = state.sessions.cart(&session_id).len(),
        "checkout requested"
    );

    state
        .sessions
        .with_session(&session_id, |session| session.flash(CHECKOUT_UNAVAILABLE_MESSAGE));

    Redirect::to("/melons")
}
