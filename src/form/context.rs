//! Shared machine context holding form slices.

use super::error::FormError;
use super::key::FormKey;
use super::slice::FormSlice;
use super::state::FormState;
use crate::core::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access to the form slices inside a host machine's context.
///
/// [`SharedContext`] implements this for slices only known at runtime. A
/// host with a fixed set of forms can implement it on its own context
/// struct, with one named field per slice.
///
/// # Example
///
/// ```rust
/// use formslice::form::{FormContext, FormError, FormKey, FormState};
///
/// #[derive(Clone)]
/// struct CheckoutContext {
///     address: FormState<String>,
///     attempts: u32,
/// }
///
/// impl FormContext<String> for CheckoutContext {
///     fn form(&self, key: &FormKey) -> Option<&FormState<String>> {
///         (key.as_str() == "address").then_some(&self.address)
///     }
///
///     fn replace_form(&mut self, key: &FormKey, state: FormState<String>) -> Result<(), FormError> {
///         if key.as_str() != "address" {
///             return Err(FormError::MissingSlice { key: key.to_string() });
///         }
///         self.address = state;
///         Ok(())
///     }
/// }
/// ```
pub trait FormContext<F: FieldName> {
    /// The slice stored under `key`, if any.
    fn form(&self, key: &FormKey) -> Option<&FormState<F>>;

    /// Replace the slice stored under `key`.
    ///
    /// Must fail with [`FormError::MissingSlice`] instead of creating a new
    /// entry.
    fn replace_form(&mut self, key: &FormKey, state: FormState<F>) -> Result<(), FormError>;
}

/// Context made only of form slices, keyed at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "F: Serialize", deserialize = "F: FieldName")
)]
pub struct SharedContext<F> {
    forms: BTreeMap<FormKey, FormState<F>>,
}

impl<F: FieldName> SharedContext<F> {
    pub fn new() -> Self {
        Self {
            forms: BTreeMap::new(),
        }
    }

    /// Add a slice's initial state under its key.
    pub fn insert_form(&mut self, key: FormKey, state: FormState<F>) -> Result<(), FormError> {
        if self.forms.contains_key(&key) {
            return Err(FormError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.forms.insert(key, state);
        Ok(())
    }

    /// Add `slice`'s initial state, returning the extended context.
    pub fn with_slice(mut self, slice: &FormSlice<F>) -> Result<Self, FormError> {
        self.insert_form(slice.key().clone(), slice.initial_context().clone())?;
        Ok(self)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FormKey> {
        self.forms.keys()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl<F: FieldName> Default for SharedContext<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldName> FormContext<F> for SharedContext<F> {
    fn form(&self, key: &FormKey) -> Option<&FormState<F>> {
        self.forms.get(key)
    }

    fn replace_form(&mut self, key: &FormKey, state: FormState<F>) -> Result<(), FormError> {
        let slot = self.forms.get_mut(key).ok_or_else(|| FormError::MissingSlice {
            key: key.to_string(),
        })?;
        *slot = state;
        Ok(())
    }
}
