use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! name_part {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            pub value: String,
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self { value: value.into() }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

name_part!(
    /// Given name. The only name part that every named contact carries.
    FirstName
);
name_part!(LastName);
name_part!(MiddleName);
name_part!(
    /// Honorific placed before the name (e.g., "Dr.").
    Prefix
);
name_part!(Suffix);
name_part!(Nickname);

/// All nicknames a contact goes by, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nicknames {
    pub values: Vec<Nickname>,
}

impl Nicknames {
    pub fn from_strings<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: names.into_iter().map(Nickname::new).collect(),
        }
    }
}

impl fmt::Display for Nicknames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.values.iter().map(|n| n.value.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}
