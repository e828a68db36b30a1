//! Field checks and their folding into error maps.

use crate::core::{ErrorMap, FieldName, Values};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single failed check, attributed to one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError<F: FieldName> {
    pub field: F,
    pub message: String,
}

/// Type alias for check functions over the full set of form values.
pub type FieldCheck<F> =
    Box<dyn Fn(&Values<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> + Send + Sync>;

/// Build a check that tests one field's value with `predicate`.
///
/// A field missing from `values` is checked as the empty string.
pub fn field_check<F, P>(field: F, predicate: P, message: impl Into<String>) -> FieldCheck<F>
where
    F: FieldName,
    P: Fn(&str) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(
        move |values: &Values<F>| -> Validation<(), NonEmptyVec<FieldError<F>>> {
            let value = values.get(&field).map(String::as_str).unwrap_or_default();
            if predicate(value) {
                Validation::success(())
            } else {
                Validation::fail(FieldError {
                    field: field.clone(),
                    message: message.clone(),
                })
            }
        },
    )
}

/// Run every check, accumulating ALL failures.
pub fn run_checks<F: FieldName>(
    checks: &[FieldCheck<F>],
    values: &Values<F>,
) -> Validation<(), NonEmptyVec<FieldError<F>>> {
    let results: Vec<Validation<(), NonEmptyVec<FieldError<F>>>> =
        checks.iter().map(|check| check(values)).collect();

    Validation::all_vec(results).map(|_| ())
}

/// Fold a check outcome into `errors`, keeping any message already present.
pub fn into_error_map<F: FieldName>(
    errors: ErrorMap<F>,
    outcome: Validation<(), NonEmptyVec<FieldError<F>>>,
) -> ErrorMap<F> {
    match outcome {
        Validation::Success(_) => errors,
        Validation::Failure(failures) => failures.iter().fold(errors, |map, failure| {
            if map.contains(&failure.field) {
                map
            } else {
                map.with(failure.field.clone(), failure.message.clone())
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldMap;

    fn values(name: &str, email: &str) -> Values<String> {
        FieldMap::new()
            .with("name".to_string(), name.to_string())
            .with("email".to_string(), email.to_string())
    }

    fn checks() -> Vec<FieldCheck<String>> {
        vec![
            field_check("name".to_string(), |v| !v.is_empty(), "name required"),
            field_check("email".to_string(), |v| !v.is_empty(), "email required"),
            field_check("email".to_string(), |v| v.contains('@'), "email invalid"),
        ]
    }

    #[test]
    fn run_checks_accumulates_all_failures() {
        let outcome = run_checks(&checks(), &values("", ""));

        match outcome {
            Validation::Failure(errors) => assert_eq!(errors.len(), 3),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn run_checks_succeeds_when_all_pass() {
        let outcome = run_checks(&checks(), &values("Ada", "ada@example.com"));
        assert!(outcome.is_success());
    }

    #[test]
    fn first_message_per_field_wins() {
        let errors = into_error_map(ErrorMap::new(), run_checks(&checks(), &values("Ada", "")));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&"email".to_string()).map(String::as_str),
            Some("email required")
        );
    }

    #[test]
    fn existing_messages_are_kept() {
        let seeded = ErrorMap::new().with("name".to_string(), "taken".to_string());
        let errors = into_error_map(seeded, run_checks(&checks(), &values("", "")));

        assert_eq!(errors.get(&"name".to_string()).map(String::as_str), Some("taken"));
        assert!(errors.contains(&"email".to_string()));
    }

    #[test]
    fn missing_field_is_checked_as_empty() {
        let check = field_check("phone".to_string(), |v| !v.is_empty(), "phone required");
        assert!(check(&values("Ada", "a@b.c")).is_failure());
    }
}
