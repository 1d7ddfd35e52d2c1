use serde::{Deserialize, Serialize};
use std::fmt;

use super::contact_info::{Addresses, Company, Emails, PhoneNumbers};
use super::name::{FirstName, LastName, MiddleName, Nicknames, Prefix, Suffix};
use super::profile::{Birthday, Groups};

/// An attribute record that can be attached to a contact.
///
/// The set of kinds is closed: every implementor has a variant in
/// [`ComponentKind`] and in [`AnyComponent`], which is how the registry
/// stores records of different types side by side.
pub trait Component: Sized + Into<AnyComponent> {
    const KIND: ComponentKind;

    fn from_any(any: &AnyComponent) -> Option<&Self>;

    fn from_any_owned(any: AnyComponent) -> Option<Self>;
}

macro_rules! components {
    ($($kind:ident),+ $(,)?) => {
        /// Discriminant of an attribute record type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ComponentKind {
            $($kind),+
        }

        impl ComponentKind {
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$kind),+];

            pub fn display_name(&self) -> &'static str {
                match self {
                    $(ComponentKind::$kind => stringify!($kind)),+
                }
            }
        }

        /// Type-erased attribute record.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "kind", content = "value")]
        pub enum AnyComponent {
            $($kind($kind)),+
        }

        impl AnyComponent {
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(AnyComponent::$kind(_) => ComponentKind::$kind),+
                }
            }
        }

        impl fmt::Display for AnyComponent {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(AnyComponent::$kind(c) => fmt::Display::fmt(c, f)),+
                }
            }
        }

        $(
            impl From<$kind> for AnyComponent {
                fn from(c: $kind) -> Self {
                    AnyComponent::$kind(c)
                }
            }

            impl Component for $kind {
                const KIND: ComponentKind = ComponentKind::$kind;

                fn from_any(any: &AnyComponent) -> Option<&Self> {
                    match any {
                        AnyComponent::$kind(c) => Some(c),
                        _ => None,
                    }
                }

                fn from_any_owned(any: AnyComponent) -> Option<Self> {
                    match any {
                        AnyComponent::$kind(c) => Some(c),
                        _ => None,
                    }
                }
            }
        )+
    };
}

components!(
    FirstName,
    LastName,
    MiddleName,
    Prefix,
    Suffix,
    Nicknames,
    PhoneNumbers,
    Emails,
    Addresses,
    Company,
    Birthday,
    Groups,
);

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
