//! Event aggregate entity.
//!
//! One Secret Santa exchange per chat. The event owns its participant list
//! and the target assignments; guard logic that needs knowledge of other
//! aggregates (ownership by admins, participant reachability) lives in the
//! application handlers instead.
//!
//! # Ownership
//!
//! Participants reference users by ID only. Toggling a participant updates
//! the user's `active_events` index through an explicit call on the `User`
//! handed in; the event never holds on to it.

use crate::domain::foundation::{
    DomainError, ErrorCode, EventId, EventState, Timestamp, UserId,
};
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// A user registered into an event, with the target assigned at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    user: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<UserId>,
}

impl Participant {
    fn new(user: UserId) -> Self {
        Self { user, target: None }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    /// The person this participant prepares a present for.
    pub fn target(&self) -> Option<UserId> {
        self.target
    }
}

/// Event aggregate - a single gift exchange in a chat.
///
/// # Invariants
///
/// - `id` equals the owning chat id
/// - `participants` has unique user ids
/// - every `target` is unset while `Registering`
/// - once `Launched`, every `target` is set, targets form a derangement and
///   the participant list no longer changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,

    /// Creator of the event.
    owner: UserId,

    /// Chat title at creation time.
    name: String,

    #[serde(default)]
    state: EventState,

    #[serde(default)]
    participants: Vec<Participant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<String>,

    #[serde(default)]
    created_at: Timestamp,
}

impl Event {
    /// Create a new event in `Registering` state with no participants.
    pub fn new(id: EventId, name: impl Into<String>, owner: UserId) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            state: EventState::Registering,
            participants: Vec::new(),
            budget: None,
            created_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> EventState {
        self.state
    }

    pub fn is_launched(&self) -> bool {
        self.state == EventState::Launched
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participant user ids in registration order.
    pub fn participant_ids(&self) -> Vec<UserId> {
        self.participants.iter().map(Participant::user).collect()
    }

    pub fn has_participant(&self, user: UserId) -> bool {
        self.participants.iter().any(|p| p.user == user)
    }

    /// Returns the participant whose assigned target is `target`.
    pub fn santa_of(&self, target: UserId) -> Option<UserId> {
        self.participants
            .iter()
            .find(|p| p.target == Some(target))
            .map(Participant::user)
    }

    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given user created this event.
    pub fn is_owner(&self, user: UserId) -> bool {
        self.owner == user
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add `user` to the participants, or remove them if already present.
    ///
    /// Keeps the user's `active_events` index in step. Returns true if the
    /// user is now joined.
    ///
    /// # Errors
    ///
    /// - `ParticipantsFrozen` if the event is launched. Callers are expected
    ///   to check the state first and answer the user themselves.
    pub fn toggle_participant(&mut self, user: &mut User) -> Result<bool, DomainError> {
        if !self.state.accepts_participants() {
            return Err(DomainError::new(
                ErrorCode::ParticipantsFrozen,
                format!("Event {} is launched, participants are frozen", self.id),
            ));
        }

        let user_id = user.id();
        match self.participants.iter().position(|p| p.user == user_id) {
            Some(index) => {
                self.participants.remove(index);
                user.remove_active_event(self.id);
                Ok(false)
            }
            None => {
                self.participants.push(Participant::new(user_id));
                user.add_active_event(self.id);
                Ok(true)
            }
        }
    }

    /// Assign the gift target of participant `user`.
    ///
    /// # Errors
    ///
    /// - `ParticipantNotFound` if `user` is not a participant
    pub fn set_target(&mut self, user: UserId, target: UserId) -> Result<(), DomainError> {
        let event_id = self.id;
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.user == user)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ParticipantNotFound,
                    format!("Cannot find user {} in event {}", user, event_id),
                )
                .with_detail("user_id", user.to_string())
                .with_detail("event_id", event_id.to_string())
            })?;
        participant.target = Some(target);
        Ok(())
    }

    /// Unconditional state write; the launch handler owns the guards.
    pub fn set_state(&mut self, state: EventState) {
        self.state = state;
    }

    /// Replace the free-text budget in any state.
    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.budget = Some(budget.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_event() -> Event {
        Event::new(EventId::new(42), "Office party", UserId::new(13))
    }

    fn user(id: i64) -> User {
        User::new(UserId::new(id), format!("User {}", id))
    }

    #[test]
    fn new_event_is_registering_and_empty() {
        let event = test_event();
        assert_eq!(event.id(), EventId::new(42));
        assert_eq!(event.owner(), UserId::new(13));
        assert_eq!(event.name(), "Office party");
        assert_eq!(event.state(), EventState::Registering);
        assert!(event.participants().is_empty());
        assert_eq!(event.budget(), None);
        assert!(event.is_owner(UserId::new(13)));
        assert!(!event.is_owner(UserId::new(99)));
    }

    #[test]
    fn toggle_adds_then_removes_participant() {
        let mut event = test_event();
        let mut ada = user(13);

        assert!(event.toggle_participant(&mut ada).unwrap());
        assert_eq!(event.participant_ids(), vec![UserId::new(13)]);
        assert_eq!(ada.active_events(), &[EventId::new(42)]);
        assert!(event.participants()[0].target().is_none());

        assert!(!event.toggle_participant(&mut ada).unwrap());
        assert!(event.participants().is_empty());
        assert!(ada.active_events().is_empty());
    }

    #[test]
    fn toggling_twice_preserves_order_of_others() {
        let mut event = test_event();
        let mut users: Vec<User> = (1..=4).map(user).collect();
        for u in users.iter_mut() {
            event.toggle_participant(u).unwrap();
        }
        let before = event.participant_ids();

        event.toggle_participant(&mut users[1]).unwrap();
        assert_eq!(
            event.participant_ids(),
            vec![UserId::new(1), UserId::new(3), UserId::new(4)]
        );

        event.toggle_participant(&mut users[1]).unwrap();
        let after = event.participant_ids();
        let others = |ids: &[UserId]| -> Vec<UserId> {
            ids.iter().copied().filter(|id| *id != UserId::new(2)).collect()
        };
        assert_eq!(others(&before), others(&after));
        assert_eq!(after.len(), before.len());
    }

    #[test]
    fn toggle_fails_once_launched() {
        let mut event = test_event();
        let mut ada = user(13);
        event.set_state(EventState::Launched);

        let err = event.toggle_participant(&mut ada).unwrap_err();
        assert_eq!(err.code, ErrorCode::ParticipantsFrozen);
        assert!(event.participants().is_empty());
        assert!(ada.active_events().is_empty());
    }

    #[test]
    fn set_target_assigns_existing_participant() {
        let mut event = test_event();
        let (mut a, mut b) = (user(13), user(14));
        event.toggle_participant(&mut a).unwrap();
        event.toggle_participant(&mut b).unwrap();

        event.set_target(UserId::new(13), UserId::new(14)).unwrap();
        assert_eq!(event.participants()[0].target(), Some(UserId::new(14)));
        assert_eq!(event.santa_of(UserId::new(14)), Some(UserId::new(13)));
        assert_eq!(event.santa_of(UserId::new(13)), None);
    }

    #[test]
    fn set_target_rejects_unknown_participant() {
        let mut event = test_event();
        let err = event
            .set_target(UserId::new(99), UserId::new(13))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ParticipantNotFound);
        assert_eq!(err.details.get("user_id"), Some(&"99".to_string()));
    }

    #[test]
    fn budget_can_change_in_any_state() {
        let mut event = test_event();
        event.set_budget("20 EUR");
        assert_eq!(event.budget(), Some("20 EUR"));

        event.set_state(EventState::Launched);
        event.set_budget("25 EUR");
        assert_eq!(event.budget(), Some("25 EUR"));
    }

    #[test]
    fn document_shape_uses_plain_ids() {
        let mut event = test_event();
        let mut a = user(13);
        event.toggle_participant(&mut a).unwrap();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["owner"], 13);
        assert_eq!(json["state"], "registering");
        assert_eq!(json["participants"][0]["user"], 13);
        assert!(json["participants"][0].get("target").is_none());
    }
}
