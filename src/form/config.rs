//! Form configuration: initial values and the validator.

use crate::builder::BuildError;
use crate::core::{ErrorMap, FieldMap, FieldName, Values};
use crate::validation::{field_check, into_error_map, run_checks, FieldCheck, FieldError};
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Pure function from the current values to their validation messages.
///
/// An empty map means the values are valid.
pub type ValidateFn<F> = Arc<dyn Fn(&Values<F>) -> ErrorMap<F> + Send + Sync>;

/// Immutable description of a form: its fields with their initial values,
/// and an optional validator.
///
/// # Example
///
/// ```rust
/// use formslice::core::ErrorMap;
/// use formslice::form::FormConfig;
///
/// let config = FormConfig::<String>::builder()
///     .field("name", "")
///     .field("email", "")
///     .validate(|values| {
///         if values.get(&"name".to_string()).map_or(true, |v| v.is_empty()) {
///             return ErrorMap::new().with("name".to_string(), "You must pass a name".to_string());
///         }
///         ErrorMap::new()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.validate(config.initial_values()).len(), 1);
/// ```
#[derive(Clone)]
pub struct FormConfig<F: FieldName> {
    initial_values: Values<F>,
    validate: Option<ValidateFn<F>>,
}

impl<F: FieldName> FormConfig<F> {
    pub fn builder() -> FormConfigBuilder<F> {
        FormConfigBuilder::new()
    }

    /// Config without a validator: every set of values is valid.
    pub fn new(initial_values: Values<F>) -> Self {
        Self {
            initial_values,
            validate: None,
        }
    }

    pub fn initial_values(&self) -> &Values<F> {
        &self.initial_values
    }

    pub fn has_field(&self, field: &F) -> bool {
        self.initial_values.contains(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.initial_values.keys()
    }

    pub fn has_validator(&self) -> bool {
        self.validate.is_some()
    }

    /// Run the validator, or return no errors when there is none.
    pub fn validate(&self, values: &Values<F>) -> ErrorMap<F> {
        self.validate
            .as_ref()
            .map_or_else(ErrorMap::new, |validate| validate(values))
    }
}

impl<F: FieldName> fmt::Debug for FormConfig<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("initial_values", &self.initial_values)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Builder for [`FormConfig`].
pub struct FormConfigBuilder<F: FieldName> {
    fields: Vec<(F, String)>,
    validate: Option<ValidateFn<F>>,
    checks: Vec<FieldCheck<F>>,
}

impl<F: FieldName> FormConfigBuilder<F> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            validate: None,
            checks: Vec::new(),
        }
    }

    /// Declare a field with its initial value.
    pub fn field(mut self, name: impl Into<F>, initial: impl Into<String>) -> Self {
        self.fields.push((name.into(), initial.into()));
        self
    }

    /// Set the validator function.
    pub fn validate<V>(mut self, validate: V) -> Self
    where
        V: Fn(&Values<F>) -> ErrorMap<F> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validate));
        self
    }

    /// Add an accumulating check over all values.
    pub fn require<C>(mut self, check: C) -> Self
    where
        C: Fn(&Values<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a predicate check on a single field with an error message.
    pub fn require_field<P>(
        mut self,
        field: impl Into<F>,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.checks.push(field_check(field.into(), predicate, message));
        self
    }

    /// Build the config.
    ///
    /// Checks are folded after the explicit validator, so its messages take
    /// precedence for a field both of them report.
    pub fn build(self) -> Result<FormConfig<F>, BuildError> {
        let mut initial_values = FieldMap::new();
        for (name, value) in self.fields {
            if initial_values.contains(&name) {
                return Err(BuildError::DuplicateField {
                    field: name.to_string(),
                });
            }
            initial_values = initial_values.with(name, value);
        }

        let validate = if self.checks.is_empty() {
            self.validate
        } else {
            let explicit = self.validate;
            let checks = Arc::new(self.checks);
            let combined: ValidateFn<F> = Arc::new(move |values: &Values<F>| {
                let errors = explicit
                    .as_ref()
                    .map_or_else(ErrorMap::new, |validate| validate(values));
                into_error_map(errors, run_checks(&checks, values))
            });
            Some(combined)
        };

        Ok(FormConfig {
            initial_values,
            validate,
        })
    }
}

impl<F: FieldName> Default for FormConfigBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
