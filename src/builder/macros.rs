//! Macros for declaring host states and form fields.

/// Generate State trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use formslice::state_enum;
///
/// state_enum! {
///     pub enum CheckoutState {
///         GettingDetails,
///         Pending,
///         Done,
///     }
///     final: [Done]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Declare a closed set of form field names.
///
/// Each variant is paired with the label used on the wire and in
/// `Display`. The generated enum satisfies
/// [`FieldName`](crate::core::FieldName), so it can key a
/// [`FormConfig`](crate::form::FormConfig) in place of `String`.
///
/// # Example
///
/// ```
/// use formslice::form::FormConfig;
/// use formslice::form_fields;
///
/// form_fields! {
///     pub enum LoginField {
///         Username => "username",
///         Password => "password",
///     }
/// }
///
/// let config = FormConfig::<LoginField>::builder()
///     .field(LoginField::Username, "")
///     .field(LoginField::Password, "")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.fields().count(), LoginField::ALL.len());
/// assert_eq!(LoginField::Password.to_string(), "password");
/// ```
#[macro_export]
macro_rules! form_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every field, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FieldMap, State};

    state_enum! {
        enum TestState {
            Editing,
            Pending,
            Complete,
        }
        final: [Complete]
    }

    form_fields! {
        enum TestField {
            Name => "name",
            Email => "email",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Editing;
        assert_eq!(state.name(), "Editing");
        assert!(!state.is_final());
        assert!(TestState::Complete.is_final());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert!(PublicState::B.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert_eq!(MinimalState::Two.name(), "Two");
    }

    #[test]
    fn form_fields_use_labels() {
        assert_eq!(TestField::ALL, &[TestField::Name, TestField::Email]);
        assert_eq!(TestField::Email.as_str(), "email");
        assert_eq!(TestField::Name.to_string(), "name");
        assert_eq!(
            serde_json::to_string(&TestField::Email).unwrap(),
            "\"email\""
        );
    }

    #[test]
    fn form_fields_key_field_maps() {
        let map: FieldMap<TestField, String> = FieldMap::new()
            .with(TestField::Name, "Ada".to_string())
            .with(TestField::Email, String::new());

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "");
    }
}
