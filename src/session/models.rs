//! Session Domain Models

use std::fmt;

use uuid::Uuid;

use crate::catalog::ItemId;

/// Opaque identifier of a browser session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses the textual form produced by [`SessionId`]'s `Display`.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::try_parse(raw).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Server-held state for one browsing session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Item ids in the order they were added, one entry per add
    pub cart: Vec<ItemId>,

    /// Notices waiting to be shown on the next rendered page
    pub flashes: Vec<String>,
}

impl Session {
    /// Creates an empty session: no cart entries, no notices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one unit of `id` to the cart.
    pub fn add_to_cart(&mut self, id: ItemId) {
        self.cart.push(id);
    }

    /// Queues a notice for the next rendered page.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.flashes.push(message.into());
    }

    /// Removes and returns every pending notice.
    pub fn take_flashes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.flashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_display_round_trips() {
        let id = SessionId::new();

        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
        assert_eq!(SessionId::parse("not-a-uuid"), None);
    }

    #[test]
    fn test_flashes_are_taken_once() {
        let mut session = Session::new();
        session.flash("Successfully added to cart.");

        assert_eq!(session.take_flashes(), vec!["Successfully added to cart."]);
        assert!(session.take_flashes().is_empty());
    }

    #[test]
    fn test_cart_keeps_duplicates_in_order() {
        let mut session = Session::new();
        session.add_to_cart(2);
        session.add_to_cart(1);
        session.add_to_cart(2);

        assert_eq!(session.cart, vec![2, 1, 2]);
    }
}
