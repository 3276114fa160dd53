//! EventState enum for the lifecycle of a Secret Santa event.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle state of an event.
///
/// `Launched` is terminal: a finished or canceled event is deleted rather
/// than moved to a further state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventState {
    /// Participants can join and leave.
    #[default]
    Registering,
    /// Targets are assigned; the participant list is frozen.
    Launched,
}

impl EventState {
    /// Returns true while participants may still join or leave.
    pub fn accepts_participants(&self) -> bool {
        matches!(self, EventState::Registering)
    }
}

impl StateMachine for EventState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EventState::*;
        matches!((self, target), (Registering, Launched))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            EventState::Registering => vec![EventState::Launched],
            EventState::Launched => vec![],
        }
    }
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventState::Registering => "Registering",
            EventState::Launched => "Launched",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_registering() {
        assert_eq!(EventState::default(), EventState::Registering);
    }

    #[test]
    fn registering_can_transition_to_launched() {
        assert!(EventState::Registering.can_transition_to(&EventState::Launched));
    }

    #[test]
    fn launched_is_terminal() {
        assert!(EventState::Launched.is_terminal());
        assert!(!EventState::Launched.can_transition_to(&EventState::Registering));
        assert!(!EventState::Registering.is_terminal());
    }

    #[test]
    fn only_registering_accepts_participants() {
        assert!(EventState::Registering.accepts_participants());
        assert!(!EventState::Launched.accepts_participants());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for state in [EventState::Registering, EventState::Launched] {
            for target in state.valid_transitions() {
                assert!(state.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&EventState::Registering).unwrap(),
            "\"registering\""
        );
        let state: EventState = serde_json::from_str("\"launched\"").unwrap();
        assert_eq!(state, EventState::Launched);
    }
}
