//! Actions and transition rules.

use super::error::MachineError;
use crate::core::Guard;
use std::fmt;
use std::sync::Arc;

/// Type alias for action functions.
///
/// An action receives the current context and the triggering event and
/// returns the replacement context.
pub type ActionFn<C, E> = Arc<dyn Fn(&C, &E) -> Result<C, MachineError> + Send + Sync>;

/// A named, pure context update run when a transition rule fires.
pub struct Action<C, E> {
    name: String,
    run: ActionFn<C, E>,
}

impl<C, E> Action<C, E> {
    pub fn new<A>(name: impl Into<String>, action: A) -> Self
    where
        A: Fn(&C, &E) -> Result<C, MachineError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            run: Arc::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn execute(&self, context: &C, event: &E) -> Result<C, MachineError> {
        (self.run)(context, event)
    }
}

impl<C: Clone + 'static, E: 'static> Action<C, E> {
    /// Action that observes the context without changing it.
    pub fn inspect<A>(name: impl Into<String>, observe: A) -> Self
    where
        A: Fn(&C, &E) + Send + Sync + 'static,
    {
        Self::new(name, move |context: &C, event: &E| {
            observe(context, event);
            Ok(context.clone())
        })
    }
}

impl<C, E> Clone for Action<C, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<C, E> fmt::Debug for Action<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.name).finish()
    }
}

/// One candidate reaction to an event.
///
/// A rule may carry a guard, a target state and a list of actions. Without
/// a target the machine stays in its current state and only runs the
/// actions.
pub struct TransitionRule<S, C, E> {
    guard: Option<Guard<C>>,
    target: Option<S>,
    actions: Vec<Action<C, E>>,
}

impl<S, C, E> TransitionRule<S, C, E> {
    pub fn new() -> Self {
        Self {
            guard: None,
            target: None,
            actions: Vec::new(),
        }
    }

    /// Set the target state.
    pub fn target(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Add a guard.
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure.
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Append an action.
    pub fn action(mut self, action: Action<C, E>) -> Self {
        self.actions.push(action);
        self
    }

    /// Check whether this rule may fire in `context` (pure).
    pub fn is_enabled(&self, context: &C) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard.check(context))
    }

    pub fn target_state(&self) -> Option<&S> {
        self.target.as_ref()
    }

    pub fn actions(&self) -> &[Action<C, E>] {
        &self.actions
    }
}

impl<S, C, E> Default for TransitionRule<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, C, E> Clone for TransitionRule<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            target: self.target.clone(),
            actions: self.actions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        value: u32,
    }

    fn increment() -> Action<Counter, u32> {
        Action::new("increment", |c: &Counter, by: &u32| {
            Ok(Counter {
                value: c.value + by,
            })
        })
    }

    #[test]
    fn action_returns_replacement_context() {
        let ctx = Counter { value: 1 };
        let next = increment().execute(&ctx, &2).unwrap();

        assert_eq!(next, Counter { value: 3 });
        assert_eq!(ctx, Counter { value: 1 });
    }

    #[test]
    fn inspect_leaves_context_unchanged() {
        let action: Action<Counter, u32> = Action::inspect("log", |_c, _e| {});
        let ctx = Counter { value: 7 };

        assert_eq!(action.execute(&ctx, &0).unwrap(), ctx);
        assert_eq!(action.name(), "log");
    }

    #[test]
    fn rule_without_guard_is_enabled() {
        let rule: TransitionRule<&str, Counter, u32> = TransitionRule::new().action(increment());

        assert!(rule.is_enabled(&Counter { value: 0 }));
        assert!(rule.target_state().is_none());
        assert_eq!(rule.actions().len(), 1);
    }

    #[test]
    fn rule_respects_guard() {
        let rule: TransitionRule<&str, Counter, u32> = TransitionRule::new()
            .when(|c: &Counter| c.value < 3)
            .target("full");

        assert!(rule.is_enabled(&Counter { value: 2 }));
        assert!(!rule.is_enabled(&Counter { value: 3 }));
        assert_eq!(rule.target_state(), Some(&"full"));
    }
}
