//! The per-slice form state.

use super::config::FormConfig;
use crate::core::{BooleanMap, ErrorMap, FieldName, Values};
use serde::{Deserialize, Serialize};

/// State owned by one form slice inside the shared machine context.
///
/// A `FormState` is never edited in place. Each transition builds a complete
/// replacement value, and `errors` is always recomputed from the new values.
///
/// # Example
///
/// ```rust
/// use formslice::form::{FormConfig, FormState};
///
/// let config = FormConfig::<String>::builder()
///     .field("username", "")
///     .field("password", "")
///     .build()
///     .unwrap();
///
/// let state = FormState::initial(&config);
/// assert_eq!(state.submit_count(), 0);
/// assert!(state.touched().values().all(|t| !t));
/// assert!(state.errors().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "F: Serialize", deserialize = "F: FieldName")
)]
pub struct FormState<F> {
    values: Values<F>,
    errors: ErrorMap<F>,
    touched: BooleanMap<F>,
    submit_count: u32,
}

impl<F: FieldName> FormState<F> {
    /// Build the starting state for `config`.
    ///
    /// Used both when the host context is created and on reset.
    pub fn initial(config: &FormConfig<F>) -> Self {
        let values = config.initial_values().clone();
        Self {
            errors: config.validate(&values),
            touched: values.to_boolean_map(),
            values,
            submit_count: 0,
        }
    }

    pub fn values(&self) -> &Values<F> {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap<F> {
        &self.errors
    }

    pub fn touched(&self) -> &BooleanMap<F> {
        &self.touched
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn value(&self, field: &F) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn error(&self, field: &F) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_touched(&self, field: &F) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }

    /// Replacement state with `field` set to `value` and errors recomputed.
    pub(crate) fn with_value(&self, config: &FormConfig<F>, field: F, value: String) -> Self {
        let values = self.values.updated(field, value);
        Self {
            errors: config.validate(&values),
            values,
            touched: self.touched.clone(),
            submit_count: self.submit_count,
        }
    }

    /// Replacement state with `field` marked as touched.
    pub(crate) fn with_touched(&self, field: F) -> Self {
        Self {
            touched: self.touched.updated(field, true),
            ..self.clone()
        }
    }

    /// Replacement state with one more submit attempt counted.
    pub(crate) fn with_submit(&self) -> Self {
        Self {
            submit_count: self.submit_count.saturating_add(1),
            ..self.clone()
        }
    }
}
