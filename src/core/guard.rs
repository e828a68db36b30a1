//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over the host machine's context. A
//! transition rule whose guard fails is skipped and the next candidate rule
//! for the same event is tried.

use std::sync::Arc;

/// Pure predicate over a machine context.
///
/// # Example
///
/// ```rust
/// use formslice::core::Guard;
///
/// struct Counter {
///     clicks: u32,
/// }
///
/// let below_limit = Guard::new(|c: &Counter| c.clicks < 3);
///
/// assert!(below_limit.check(&Counter { clicks: 1 }));
/// assert!(!below_limit.check(&Counter { clicks: 3 }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows a transition in this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C: 'static> Guard<C> {
    /// Guard that passes exactly when this one fails.
    pub fn negate(&self) -> Self {
        let inner = Arc::clone(&self.predicate);
        Guard::new(move |context: &C| !inner(context))
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
