//! Derived booleans over one form slice.

use super::context::FormContext;
use super::key::FormKey;
use crate::core::{FieldName, Guard};
use std::marker::PhantomData;

/// Valid, dirty and pristine queries for one slice.
///
/// Selectors are recomputed on every call. A context without the slice is
/// neither valid nor dirty.
#[derive(Clone, Debug)]
pub struct FormSelectors<F: FieldName> {
    key: FormKey,
    _phantom: PhantomData<fn() -> F>,
}

impl<F: FieldName> FormSelectors<F> {
    pub(crate) fn new(key: FormKey) -> Self {
        Self {
            key,
            _phantom: PhantomData,
        }
    }

    /// True when the slice has no validation errors.
    pub fn is_valid<C: FormContext<F>>(&self, context: &C) -> bool {
        context
            .form(&self.key)
            .is_some_and(|form| form.errors().is_empty())
    }

    /// True when any field has been focused.
    pub fn is_dirty<C: FormContext<F>>(&self, context: &C) -> bool {
        context
            .form(&self.key)
            .is_some_and(|form| form.touched().any())
    }

    pub fn is_pristine<C: FormContext<F>>(&self, context: &C) -> bool {
        !self.is_dirty(context)
    }

    /// [`is_valid`](Self::is_valid) as a transition guard.
    pub fn valid_guard<C: FormContext<F> + 'static>(&self) -> Guard<C> {
        let selectors = self.clone();
        Guard::new(move |context: &C| selectors.is_valid(context))
    }

    /// [`is_dirty`](Self::is_dirty) as a transition guard.
    pub fn dirty_guard<C: FormContext<F> + 'static>(&self) -> Guard<C> {
        let selectors = self.clone();
        Guard::new(move |context: &C| selectors.is_dirty(context))
    }
}
