//! Synchronous host machine.

use super::error::MachineError;
use super::event::{Dispatch, MachineEvent};
use super::node::StateNode;
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Result of processing one event.
#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome<S: State> {
    /// A rule with a target fired and the machine moved
    Transitioned { from: S, to: S },

    /// A rule without a target fired; only the context changed
    Stayed,

    /// The current state has no enabled rule for the event
    Ignored,
}

/// Host machine owning the shared context.
///
/// Events are processed one at a time and each runs to completion before
/// the next is accepted. Actions of the selected rule are folded over the
/// context in order; if any fails, the context and state stay as they were.
pub struct Machine<S: State, C, E> {
    states: Vec<(S, StateNode<S, C, E>)>,
    current: S,
    context: C,
    history: StateHistory<S>,
    sender: Sender<E>,
    inbox: Receiver<E>,
}

impl<S: State, C: Clone, E: MachineEvent> Machine<S, C, E> {
    /// Create a machine. Prefer [`MachineBuilder`](crate::builder::MachineBuilder),
    /// which validates the state graph first.
    pub fn new(initial: S, context: C, states: Vec<(S, StateNode<S, C, E>)>) -> Self {
        let (sender, inbox) = mpsc::channel();
        Self {
            states,
            current: initial,
            context,
            history: StateHistory::new(),
            sender,
            inbox,
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether the machine is in `state` (pure).
    pub fn matches(&self, state: &S) -> bool {
        self.current == *state
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn node(&self, state: &S) -> Option<&StateNode<S, C, E>> {
        self.states
            .iter()
            .find(|(candidate, _)| candidate == state)
            .map(|(_, node)| node)
    }

    /// Process one event synchronously.
    pub fn send(&mut self, event: E) -> Result<SendOutcome<S>, MachineError> {
        let event_type = event.event_type();
        let node = self
            .states
            .iter()
            .find(|(state, _)| *state == self.current)
            .map(|(_, node)| node)
            .ok_or_else(|| MachineError::UnknownState(self.current.name().to_string()))?;

        let Some(rule) = node.select(&event_type, &self.context) else {
            debug!(state = self.current.name(), event = %event_type, "event ignored");
            return Ok(SendOutcome::Ignored);
        };

        let context = rule
            .actions()
            .iter()
            .try_fold(self.context.clone(), |context, action| {
                trace!(action = action.name(), event = %event_type, "running action");
                action.execute(&context, &event)
            })?;
        let target = rule.target_state().cloned();
        self.context = context;

        let Some(to) = target else {
            trace!(state = self.current.name(), event = %event_type, "context updated");
            return Ok(SendOutcome::Stayed);
        };

        let from = std::mem::replace(&mut self.current, to.clone());
        debug!(from = from.name(), to = to.name(), event = %event_type, "transitioned");
        self.history = self.history.record(StateTransition {
            from: from.clone(),
            to: to.clone(),
            event: event_type,
            timestamp: Utc::now(),
        });
        Ok(SendOutcome::Transitioned { from, to })
    }

    /// Dispatch function that queues events for [`drain`](Self::drain).
    pub fn dispatcher(&self) -> Dispatch<E>
    where
        E: Send + 'static,
    {
        let sender = self.sender.clone();
        Arc::new(move |event: E| {
            if sender.send(event).is_err() {
                warn!("dispatch after machine was dropped");
            }
        })
    }

    /// Process every queued event in order.
    ///
    /// Stops at the first error; events queued after it stay queued.
    pub fn drain(&mut self) -> Result<Vec<SendOutcome<S>>, MachineError> {
        let mut outcomes = Vec::new();
        while let Ok(event) = self.inbox.try_recv() {
            outcomes.push(self.send(event)?);
        }
        Ok(outcomes)
    }
}
