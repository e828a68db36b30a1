//! Field-keyed maps for form values, error messages and touched flags.
//!
//! Every per-field structure in a form slice is a [`FieldMap`] keyed by the
//! form's field name type. The key set is taken once from the initial values
//! and never grows afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

/// Trait for form field names.
///
/// Implemented for every type that is orderable, printable and serializable,
/// so both `String` and enums declared with [`form_fields!`](crate::form_fields)
/// qualify.
pub trait FieldName:
    Clone + Ord + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

impl<T> FieldName for T where
    T: Clone
        + Ord
        + Debug
        + Display
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync
        + 'static
{
}

/// Ordered mapping from field name to a per-field value.
///
/// Updates return a new map, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use formslice::core::FieldMap;
///
/// let values: FieldMap<String, String> = [("name", ""), ("email", "")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
///
/// let touched = values.to_boolean_map();
/// assert_eq!(touched.len(), 2);
/// assert!(touched.values().all(|flag| !flag));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "F: Serialize, T: Serialize",
        deserialize = "F: Deserialize<'de> + Ord, T: Deserialize<'de>"
    )
)]
pub struct FieldMap<F, T> {
    entries: BTreeMap<F, T>,
}

/// Current value of every field.
pub type Values<F> = FieldMap<F, String>;

/// Validation message per field. Absent key means no error.
pub type ErrorMap<F> = FieldMap<F, String>;

/// Boolean flag per field. Every field is present.
pub type BooleanMap<F> = FieldMap<F, bool>;

impl<F: Ord, T> Default for FieldMap<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Ord, T> FieldMap<F, T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, field: &F) -> Option<&T> {
        self.entries.get(field)
    }

    pub fn contains(&self, field: &F) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &F> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &T)> {
        self.entries.iter()
    }

    /// Consume the map and return it with `field` set to `value`.
    pub fn with(mut self, field: F, value: T) -> Self {
        self.entries.insert(field, value);
        self
    }
}

impl<F: Ord + Clone, T: Clone> FieldMap<F, T> {
    /// Return a copy of this map with `field` set to `value`.
    ///
    /// This is a pure function - the original map is not modified.
    pub fn updated(&self, field: F, value: T) -> Self {
        self.clone().with(field, value)
    }

    /// Derive a map with the same key set and every flag set to `false`.
    ///
    /// Used to seed the touched map of a fresh form slice.
    pub fn to_boolean_map(&self) -> BooleanMap<F> {
        self.entries.keys().cloned().map(|field| (field, false)).collect()
    }
}

impl<F: Ord> FieldMap<F, bool> {
    /// Check whether any flag is set.
    pub fn any(&self) -> bool {
        self.entries.values().any(|flag| *flag)
    }
}

impl<F: Ord, T> FromIterator<(F, T)> for FieldMap<F, T> {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, F, T> IntoIterator for &'a FieldMap<F, T> {
    type Item = (&'a F, &'a T);
    type IntoIter = std::collections::btree_map::Iter<'a, F, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Values<String> {
        [("name", "Ada"), ("email", ""), ("age", "36")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn boolean_map_preserves_every_key_once() {
        let values = sample();
        let touched = values.to_boolean_map();

        assert_eq!(touched.len(), values.len());
        for key in values.keys() {
            assert_eq!(touched.get(key), Some(&false));
        }
    }

    #[test]
    fn boolean_map_of_empty_map_is_empty() {
        let values: Values<String> = FieldMap::new();
        assert!(values.to_boolean_map().is_empty());
    }

    #[test]
    fn updated_does_not_modify_original() {
        let values = sample();
        let changed = values.updated("name".to_string(), "Grace".to_string());

        assert_eq!(values.get(&"name".to_string()).map(String::as_str), Some("Ada"));
        assert_eq!(changed.get(&"name".to_string()).map(String::as_str), Some("Grace"));
        assert_eq!(changed.len(), values.len());
    }

    #[test]
    fn any_reports_set_flags() {
        let touched = sample().to_boolean_map();
        assert!(!touched.any());

        let touched = touched.with("email".to_string(), true);
        assert!(touched.any());
    }

    #[test]
    fn iteration_is_ordered_by_field_name() {
        let keys: Vec<_> = sample().keys().cloned().collect();
        assert_eq!(keys, vec!["age", "email", "name"]);
    }

    #[test]
    fn field_map_serializes_as_plain_object() {
        let errors: ErrorMap<String> =
            FieldMap::new().with("email".to_string(), "required".to_string());

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"email":"required"}"#);

        let back: ErrorMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
