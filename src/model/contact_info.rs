use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CgResult;
use crate::validation;

/// What a phone number is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneTag {
    Mobile,
    Work,
    Home,
}

impl PhoneTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneTag::Mobile => "mobile",
            PhoneTag::Work => "work",
            PhoneTag::Home => "home",
        }
    }
}

impl fmt::Display for PhoneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ten-digit phone number with an optional country code.
///
/// `{}` renders `+1 (555) 123-4567`; `{:#}` also appends the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: u64,
    pub country_code: Option<u32>,
    pub tag: Option<PhoneTag>,
}

impl PhoneNumber {
    pub fn new(number: u64, country_code: Option<u32>, tag: Option<PhoneTag>) -> CgResult<Self> {
        let (country_code, number) = validation::phone_digits(number, country_code)?;
        Ok(Self {
            number,
            country_code,
            tag,
        })
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = format!("{:010}", self.number);
        if let Some(cc) = self.country_code {
            write!(f, "+{} ", cc)?;
        }
        write!(f, "({}) {}-{}", &n[..3], &n[3..6], &n[6..])?;
        if f.alternate() {
            if let Some(tag) = self.tag {
                write!(f, " ({})", tag)?;
            }
        }
        Ok(())
    }
}

/// An email address with an optional free-form tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email {
    pub value: String,
    pub tag: Option<String>,
}

impl Email {
    pub fn new(value: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            value: value.into(),
            tag,
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        write_tag(f, self.tag.as_deref())
    }
}

/// A structured physical address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub zipcode: String,
    pub unit: Option<String>,
    pub tag: Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)?;
        if let Some(unit) = &self.unit {
            write!(f, " Un. {}", unit)?;
        }
        write!(
            f,
            ", {}, {} {} {}",
            self.city, self.state, self.country, self.zipcode
        )?;
        write_tag(f, self.tag.as_deref())
    }
}

/// Employer, optionally with its address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: Option<Address>,
}

impl Company {
    pub fn new(name: impl Into<String>, address: Option<Address>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn write_tag(f: &mut fmt::Formatter<'_>, tag: Option<&str>) -> fmt::Result {
    match tag {
        Some(tag) if f.alternate() => write!(f, " ({})", tag),
        _ => Ok(()),
    }
}

macro_rules! tagged_list {
    ($(#[$doc:meta])* $name:ident, $item:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub values: Vec<$item>,
        }

        impl $name {
            pub fn new(values: Vec<$item>) -> Self {
                Self { values }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let items: Vec<String> = self.values.iter().map(|v| format!("{:#}", v)).collect();
                f.write_str(&items.join(", "))
            }
        }
    };
}

tagged_list!(
    /// Every phone number of a contact. Displays each with its tag.
    PhoneNumbers,
    PhoneNumber
);
tagged_list!(Emails, Email);
tagged_list!(Addresses, Address);
