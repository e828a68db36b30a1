//! Slice keys.

use super::error::FormError;
use super::events::FormEventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one form slice inside a shared machine context.
///
/// Keys prefix every event type the slice emits (`"<key>.CHANGE"`), so a key
/// must be non-empty and must not contain the `.` separator.
///
/// # Example
///
/// ```rust
/// use formslice::form::FormKey;
///
/// let key = FormKey::new("loginForm").unwrap();
/// assert_eq!(key.as_str(), "loginForm");
///
/// assert!(FormKey::new("").is_err());
/// assert!(FormKey::new("login.form").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormKey(String);

impl FormKey {
    pub fn new(key: impl Into<String>) -> Result<Self, FormError> {
        let key = key.into();
        if key.is_empty() {
            return Err(FormError::InvalidKey {
                key,
                reason: "key must not be empty",
            });
        }
        if key.contains('.') {
            return Err(FormError::InvalidKey {
                key,
                reason: "key must not contain '.'",
            });
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespaced event type for `kind`, e.g. `"loginForm.FOCUS"`.
    pub fn event_type(&self, kind: FormEventKind) -> String {
        format!("{}.{}", self.0, kind.as_str())
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FormKey {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FormKey> for String {
    fn from(key: FormKey) -> Self {
        key.0
    }
}
