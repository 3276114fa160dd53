//! User aggregate entity.
//!
//! A user is created the first time the bot sees them and is never deleted.
//!
//! # Ownership
//!
//! `active_events` is a derived index kept in sync by the Event aggregate
//! (see `Event::toggle_participant`). The event is the source of truth for
//! membership; the index only exists to fan out wishlist updates.

use crate::domain::foundation::{ChatId, EventId, UserId};
use serde::{Deserialize, Serialize};

/// User aggregate - a chat participant known to the bot.
///
/// # Invariants
///
/// - `active_events` contains no duplicates
/// - `wishlist` is never `Some("")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,

    /// Display name captured at first sight.
    name: String,

    /// Private chat reachable by the bot, bound once the user writes to the
    /// bot directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notification_channel: Option<ChatId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    wishlist: Option<String>,

    #[serde(default)]
    active_events: Vec<EventId>,
}

impl User {
    /// Create a user with no channel, wishlist or events.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            notification_channel: None,
            wishlist: None,
            active_events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notification_channel(&self) -> Option<ChatId> {
        self.notification_channel
    }

    /// Returns true if the bot can message this user privately.
    pub fn is_reachable(&self) -> bool {
        self.notification_channel.is_some()
    }

    pub fn wishlist(&self) -> Option<&str> {
        self.wishlist.as_deref()
    }

    pub fn active_events(&self) -> &[EventId] {
        &self.active_events
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind the private chat used for notifications.
    ///
    /// Returns true if the stored channel changed.
    pub fn bind_channel(&mut self, chat: ChatId) -> bool {
        if self.notification_channel == Some(chat) {
            return false;
        }
        self.notification_channel = Some(chat);
        true
    }

    /// Replace the wishlist. Blank text clears it.
    pub fn set_wishlist(&mut self, wishlist: Option<String>) {
        self.wishlist = wishlist
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
    }

    /// Record participation in an event. Returns false if already recorded.
    pub fn add_active_event(&mut self, event: EventId) -> bool {
        if self.active_events.contains(&event) {
            return false;
        }
        self.active_events.push(event);
        true
    }

    /// Forget participation in an event. Returns false if it was not recorded.
    pub fn remove_active_event(&mut self, event: EventId) -> bool {
        let before = self.active_events.len();
        self.active_events.retain(|id| *id != event);
        before != self.active_events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(UserId::new(13), "Ada Lovelace")
    }

    #[test]
    fn new_user_is_unreachable_without_wishlist() {
        let user = test_user();
        assert_eq!(user.id(), UserId::new(13));
        assert_eq!(user.name(), "Ada Lovelace");
        assert!(!user.is_reachable());
        assert_eq!(user.wishlist(), None);
        assert!(user.active_events().is_empty());
    }

    #[test]
    fn bind_channel_reports_changes_only() {
        let mut user = test_user();
        assert!(user.bind_channel(ChatId::new(13)));
        assert!(!user.bind_channel(ChatId::new(13)));
        assert!(user.bind_channel(ChatId::new(14)));
        assert_eq!(user.notification_channel(), Some(ChatId::new(14)));
        assert!(user.is_reachable());
    }

    #[test]
    fn blank_wishlist_clears_it() {
        let mut user = test_user();
        user.set_wishlist(Some("  books  ".to_string()));
        assert_eq!(user.wishlist(), Some("books"));

        user.set_wishlist(Some("   ".to_string()));
        assert_eq!(user.wishlist(), None);

        user.set_wishlist(Some("socks".to_string()));
        user.set_wishlist(None);
        assert_eq!(user.wishlist(), None);
    }

    #[test]
    fn active_events_behave_as_a_set() {
        let mut user = test_user();
        let event = EventId::new(42);

        assert!(user.add_active_event(event));
        assert!(!user.add_active_event(event));
        assert_eq!(user.active_events(), &[event]);

        assert!(user.remove_active_event(event));
        assert!(!user.remove_active_event(event));
        assert!(user.active_events().is_empty());
    }

    #[test]
    fn deserializes_document_without_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id":13,"name":"Ada"}"#).unwrap();
        assert_eq!(user.id(), UserId::new(13));
        assert!(user.active_events().is_empty());
        assert!(!user.is_reachable());
    }
}
