//! Namespaced form events and their factory.
//!
//! Every event a slice emits carries the slice's key, and its event type is
//! `"<key>.<ACTION>"`. The key is the only thing that separates events from
//! different slices sharing one dispatch channel.

use super::error::FormError;
use super::key::FormKey;
use crate::core::FieldName;
use crate::machine::MachineEvent;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::warn;

/// The five things that can happen to a form slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormEventKind {
    Change,
    Blur,
    Focus,
    Submit,
    Reset,
}

impl FormEventKind {
    pub const ALL: [FormEventKind; 5] = [
        FormEventKind::Change,
        FormEventKind::Blur,
        FormEventKind::Focus,
        FormEventKind::Submit,
        FormEventKind::Reset,
    ];

    /// Action suffix used in event types.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => "CHANGE",
            Self::Blur => "BLUR",
            Self::Focus => "FOCUS",
            Self::Submit => "SUBMIT",
            Self::Reset => "RESET",
        }
    }

    pub fn parse(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == suffix)
    }
}

/// An event addressed to one form slice.
///
/// Submit carries no values: the submit action always reads them from the
/// slice's current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent<F> {
    Change { key: FormKey, name: F, value: String },
    Blur { key: FormKey, name: F, value: String },
    Focus { key: FormKey, name: F },
    Submit { key: FormKey },
    Reset { key: FormKey },
}

impl<F: FieldName> FormEvent<F> {
    pub fn key(&self) -> &FormKey {
        match self {
            Self::Change { key, .. }
            | Self::Blur { key, .. }
            | Self::Focus { key, .. }
            | Self::Submit { key }
            | Self::Reset { key } => key,
        }
    }

    pub fn kind(&self) -> FormEventKind {
        match self {
            Self::Change { .. } => FormEventKind::Change,
            Self::Blur { .. } => FormEventKind::Blur,
            Self::Focus { .. } => FormEventKind::Focus,
            Self::Submit { .. } => FormEventKind::Submit,
            Self::Reset { .. } => FormEventKind::Reset,
        }
    }

    /// Field the event refers to, if any.
    pub fn field(&self) -> Option<&F> {
        match self {
            Self::Change { name, .. } | Self::Blur { name, .. } | Self::Focus { name, .. } => {
                Some(name)
            }
            Self::Submit { .. } | Self::Reset { .. } => None,
        }
    }

    /// Wire-visible shape of the event: `{type, name?, value?}`.
    pub fn to_wire(&self) -> WireEvent<F> {
        let value = match self {
            Self::Change { value, .. } | Self::Blur { value, .. } => Some(value.clone()),
            _ => None,
        };
        WireEvent {
            event_type: self.event_type(),
            name: self.field().cloned(),
            value,
        }
    }

    /// Parse the wire shape back into a typed event.
    pub fn from_wire(wire: WireEvent<F>) -> Result<Self, FormError> {
        let (key, suffix) = wire
            .event_type
            .rsplit_once('.')
            .ok_or_else(|| FormError::MalformedEventType(wire.event_type.clone()))?;
        let kind = FormEventKind::parse(suffix)
            .ok_or_else(|| FormError::MalformedEventType(wire.event_type.clone()))?;
        let key = FormKey::new(key)?;

        let missing = |field: &'static str| FormError::MissingPayload {
            event_type: wire.event_type.clone(),
            field,
        };

        let event = match kind {
            FormEventKind::Change => Self::Change {
                key,
                name: wire.name.clone().ok_or_else(|| missing("name"))?,
                value: wire.value.clone().ok_or_else(|| missing("value"))?,
            },
            FormEventKind::Blur => Self::Blur {
                key,
                name: wire.name.clone().ok_or_else(|| missing("name"))?,
                value: wire.value.clone().ok_or_else(|| missing("value"))?,
            },
            FormEventKind::Focus => Self::Focus {
                key,
                name: wire.name.clone().ok_or_else(|| missing("name"))?,
            },
            FormEventKind::Submit => Self::Submit { key },
            FormEventKind::Reset => Self::Reset { key },
        };
        Ok(event)
    }
}

impl<F: FieldName> MachineEvent for FormEvent<F> {
    fn event_type(&self) -> String {
        self.key().event_type(self.kind())
    }
}

/// Serialized form of a [`FormEvent`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "F: Serialize", deserialize = "F: Deserialize<'de>"))]
pub struct WireEvent<F> {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<F>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl<F: FieldName> Serialize for FormEvent<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de, F: FieldName> Deserialize<'de> for FormEvent<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireEvent::deserialize(deserializer)?;
        FormEvent::from_wire(wire).map_err(serde::de::Error::custom)
    }
}

/// Access to the form event inside a host machine's event type.
///
/// Host machines that dispatch more than form events wrap [`FormEvent`] in
/// their own enum and implement this trait to hand it back out.
pub trait AsFormEvent<F> {
    fn as_form_event(&self) -> Option<&FormEvent<F>>;
}

impl<F> AsFormEvent<F> for FormEvent<F> {
    fn as_form_event(&self) -> Option<&FormEvent<F>> {
        Some(self)
    }
}

/// Constructors for one slice's events.
///
/// Constructing an event does not deliver it. Field names are checked
/// against the form's declared fields.
#[derive(Clone, Debug)]
pub struct FormEvents<F: FieldName> {
    key: FormKey,
    fields: Arc<BTreeSet<F>>,
}

impl<F: FieldName> FormEvents<F> {
    pub(crate) fn new(key: FormKey, fields: impl IntoIterator<Item = F>) -> Self {
        Self {
            key,
            fields: Arc::new(fields.into_iter().collect()),
        }
    }

    pub fn key(&self) -> &FormKey {
        &self.key
    }

    /// Namespaced event type for `kind`.
    pub fn event_type(&self, kind: FormEventKind) -> String {
        self.key.event_type(kind)
    }

    pub fn change(
        &self,
        name: impl Into<F>,
        value: impl Into<String>,
    ) -> Result<FormEvent<F>, FormError> {
        Ok(FormEvent::Change {
            key: self.key.clone(),
            name: self.known_field(name.into())?,
            value: value.into(),
        })
    }

    pub fn blur(
        &self,
        name: impl Into<F>,
        value: impl Into<String>,
    ) -> Result<FormEvent<F>, FormError> {
        Ok(FormEvent::Blur {
            key: self.key.clone(),
            name: self.known_field(name.into())?,
            value: value.into(),
        })
    }

    pub fn focus(&self, name: impl Into<F>) -> Result<FormEvent<F>, FormError> {
        Ok(FormEvent::Focus {
            key: self.key.clone(),
            name: self.known_field(name.into())?,
        })
    }

    pub fn submit(&self) -> FormEvent<F> {
        FormEvent::Submit {
            key: self.key.clone(),
        }
    }

    pub fn reset(&self) -> FormEvent<F> {
        FormEvent::Reset {
            key: self.key.clone(),
        }
    }

    pub(crate) fn known_field(&self, name: F) -> Result<F, FormError> {
        if self.fields.contains(&name) {
            Ok(name)
        } else {
            warn!(form = %self.key, field = %name, "rejected event for undeclared field");
            Err(FormError::UnknownField {
                key: self.key.to_string(),
                field: name.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> FormEvents<String> {
        FormEvents::new(
            FormKey::new("loginForm").unwrap(),
            ["username".to_string(), "password".to_string()],
        )
    }

    #[test]
    fn constructors_namespace_event_types() {
        let events = events();

        assert_eq!(
            events.change("username", "ada").unwrap().event_type(),
            "loginForm.CHANGE"
        );
        assert_eq!(
            events.blur("username", "ada").unwrap().event_type(),
            "loginForm.BLUR"
        );
        assert_eq!(
            events.focus("password").unwrap().event_type(),
            "loginForm.FOCUS"
        );
        assert_eq!(events.submit().event_type(), "loginForm.SUBMIT");
        assert_eq!(events.reset().event_type(), "loginForm.RESET");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = events().change("nickname", "x");

        assert_eq!(
            result,
            Err(FormError::UnknownField {
                key: "loginForm".to_string(),
                field: "nickname".to_string(),
            })
        );
    }

    #[test]
    fn wire_shape_matches_event_kind() {
        let events = events();

        let change = serde_json::to_value(events.change("username", "ada").unwrap()).unwrap();
        assert_eq!(
            change,
            serde_json::json!({"type": "loginForm.CHANGE", "name": "username", "value": "ada"})
        );

        let focus = serde_json::to_value(events.focus("password").unwrap()).unwrap();
        assert_eq!(
            focus,
            serde_json::json!({"type": "loginForm.FOCUS", "name": "password"})
        );

        let reset = serde_json::to_value(events.reset()).unwrap();
        assert_eq!(reset, serde_json::json!({"type": "loginForm.RESET"}));
    }

    #[test]
    fn wire_shape_parses_back() {
        let event: FormEvent<String> = serde_json::from_str(
            r#"{"type":"loginForm.BLUR","name":"password","value":"hunter2"}"#,
        )
        .unwrap();

        assert_eq!(event, events().blur("password", "hunter2").unwrap());
    }

    #[test]
    fn malformed_wire_events_are_rejected() {
        let no_separator: Result<FormEvent<String>, _> =
            serde_json::from_str(r#"{"type":"RESET"}"#);
        assert!(no_separator.is_err());

        let unknown_action: Result<FormEvent<String>, _> =
            serde_json::from_str(r#"{"type":"loginForm.EXPLODE"}"#);
        assert!(unknown_action.is_err());

        let wire = WireEvent::<String> {
            event_type: "loginForm.CHANGE".to_string(),
            name: Some("username".to_string()),
            value: None,
        };
        assert_eq!(
            FormEvent::from_wire(wire),
            Err(FormError::MissingPayload {
                event_type: "loginForm.CHANGE".to_string(),
                field: "value",
            })
        );
    }

    #[test]
    fn kind_round_trips_through_suffix() {
        for kind in FormEventKind::ALL {
            assert_eq!(FormEventKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FormEventKind::parse("change"), None);
    }
}
