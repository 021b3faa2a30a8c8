//! Locale codes for translation lookup.

use core::fmt;
use core::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Validated locale code (`en`, `en_US`, `pt-BR`, `sr_Latn_RS`).
///
/// Translation APIs take the locale explicitly on every call; there is no
/// ambient "current locale" in the domain layer, so this type shows up a lot
/// as a plain value argument and as the key of translation sets.
///
/// Comparison is exact: `en_US` and `en-US` are distinct keys. Callers that
/// want canonical separators normalize before constructing the value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

impl Locale {
    /// Validate `code` and wrap it.
    ///
    /// Accepted shapes: a leading alphabetic language subtag of 2 to 8
    /// characters, optionally followed by further alphanumeric subtags of at
    /// most 8 characters, separated by `-` or `_`.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> DomainResult<()> {
        if code.is_empty() {
            return Err(DomainError::invalid_locale("empty locale code"));
        }
        for (idx, part) in code.split(['-', '_']).enumerate() {
            let valid = if idx == 0 {
                (2..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
            } else {
                (1..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphanumeric())
            };
            if !valid {
                return Err(DomainError::invalid_locale(format!("malformed code `{code}`")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
