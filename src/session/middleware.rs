//! Session middleware
//!
//! Resolves the session for every request from its cookie. Requests
//! without a valid cookie get an empty handle; a session is only stored, and
//! its cookie issued, once a handler writes to it. Handlers receive the
//! handle through `Extension<CurrentSession>`.

use std::sync::{Arc, OnceLock};

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::state::SharedState;

use super::{models::SessionId, store::SessionStore};

/// Name of the cookie holding the signed session token
pub const SESSION_COOKIE: &str = "ubermelon_session";

/// The session attached to one request, if it has one yet
#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
    id: Arc<OnceLock<SessionId>>,
}

impl CurrentSession {
    fn resolved(existing: Option<SessionId>) -> Self {
        let id = OnceLock::new();
        if let Some(existing) = existing {
            _ = id.set(existing);
        }
        Self { id: Arc::new(id) }
    }

    /// The session id, or `None` when the browser has no session yet.
    pub fn id(&self) -> Option<SessionId> {
        self.id.get().copied()
    }

    /// The session id, starting a new session in `store` if there is none.
    pub fn get_or_create(&self, store: &SessionStore) -> SessionId {
        *self.id.get_or_init(|| store.create())
    }
}

/// Attaches a [`CurrentSession`] to the request and issues a cookie for
/// sessions started while handling it.
pub async fn session_layer(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Response {
    let existing = session_token(req.headers())
        .and_then(|token| state.signer.verify(token))
        .filter(|id| state.sessions.contains(id));

    let current = CurrentSession::resolved(existing);
    req.extensions_mut().insert(current.clone());
    let mut response = next.run(req).await;

    let started = match (existing, current.id()) {
        (None, Some(id)) => id,
        _ => return response,
    };

    let cookie_val = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE,
        state.signer.sign(&started)
    );

    match HeaderValue::from_str(&cookie_val) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => warn!(session = %started, "failed to build session cookie: {e}"),
    }

    response
}

/// Finds the session token among the request's cookies.
fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token)
}
