//! Host machine state history.
//!
//! Records which event moved the machine between states and when. History
//! is immutable: recording returns a new history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// `event` is the namespaced event type that triggered the change, for
/// example `"loginForm.SUBMIT"`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Event type that caused the change
    pub event: String,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state changes.
///
/// # Example
///
/// ```rust
/// use formslice::core::{StateHistory, StateTransition};
/// use formslice::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Page {
///         Editing,
///         Pending,
///     }
/// }
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Page::Editing,
///     to: Page::Pending,
///     event: "signup.SUBMIT".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Page::Editing, &Page::Pending]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the `to`
    /// state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Editing,
        Pending,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Editing => "Editing",
                Self::Pending => "Pending",
                Self::Done => "Done",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    fn step(from: TestState, to: TestState, event: &str) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            event: event.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let updated = history.record(step(TestState::Editing, TestState::Pending, "f.SUBMIT"));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(updated.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step(TestState::Editing, TestState::Pending, "f.SUBMIT"))
            .record(step(TestState::Pending, TestState::Done, "DONE"));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![&TestState::Editing, &TestState::Pending, &TestState::Done]
        );
    }

    #[test]
    fn last_returns_triggering_event() {
        let history = StateHistory::new()
            .record(step(TestState::Editing, TestState::Pending, "f.SUBMIT"))
            .record(step(TestState::Pending, TestState::Editing, "FAILED"));

        let last = history.last().unwrap();
        assert_eq!(last.event, "FAILED");
        assert_eq!(last.to, TestState::Editing);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: TestState::Editing,
                to: TestState::Pending,
                event: "f.SUBMIT".to_string(),
                timestamp: start,
            })
            .record(StateTransition {
                from: TestState::Pending,
                to: TestState::Done,
                event: "DONE".to_string(),
                timestamp: start + chrono::Duration::seconds(2),
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(step(TestState::Editing, TestState::Pending, "f.SUBMIT"));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.transitions().len(), 1);
        assert_eq!(back.transitions()[0].event, "f.SUBMIT");
    }
}
