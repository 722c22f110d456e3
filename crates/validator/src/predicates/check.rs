//! Closed enumeration of the built-in checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::builtin;
use crate::value::FieldValue;

/// Identifier of a built-in check.
///
/// The string form (see [`Check::as_str`]) is what rule sets reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Time,
    DateTime,
    FirstName,
    LastName,
    Email,
    Phone,
    Country2,
    Number,
    IsBool,
    Login,
    Password,
    CryptoWallet,
}

impl Check {
    /// Every built-in check, in declaration order.
    pub const ALL: [Check; 12] = [
        Check::Time,
        Check::DateTime,
        Check::FirstName,
        Check::LastName,
        Check::Email,
        Check::Phone,
        Check::Country2,
        Check::Number,
        Check::IsBool,
        Check::Login,
        Check::Password,
        Check::CryptoWallet,
    ];

    /// Older identifiers still accepted by [`FromStr`].
    pub const ALIASES: [(&str, Check); 1] = [("crypto_w", Check::CryptoWallet)];

    /// Identifier used in rule sets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Check::Time => "time",
            Check::DateTime => "date_time",
            Check::FirstName => "first_name",
            Check::LastName => "last_name",
            Check::Email => "email",
            Check::Phone => "phone",
            Check::Country2 => "country2",
            Check::Number => "number",
            Check::IsBool => "is_bool",
            Check::Login => "login",
            Check::Password => "password",
            Check::CryptoWallet => "crypto_wallet",
        }
    }

    /// Function implementing this check.
    #[must_use]
    pub const fn function(self) -> fn(&FieldValue) -> bool {
        match self {
            Check::Time => builtin::time,
            Check::DateTime => builtin::date_time,
            Check::FirstName => builtin::first_name,
            Check::LastName => builtin::last_name,
            Check::Email => builtin::email,
            Check::Phone => builtin::phone,
            Check::Country2 => builtin::country2,
            Check::Number => builtin::number,
            Check::IsBool => builtin::is_bool,
            Check::Login => builtin::login,
            Check::Password => builtin::password,
            Check::CryptoWallet => builtin::crypto_wallet,
        }
    }

    /// Runs the check against a value.
    #[must_use]
    pub fn test(self, value: &FieldValue) -> bool {
        (self.function())(value)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no built-in check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown check '{0}'")]
pub struct UnknownCheck(pub String);

impl FromStr for Check {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Check::ALL
            .into_iter()
            .find(|check| check.as_str() == s)
            .or_else(|| {
                Check::ALIASES
                    .into_iter()
                    .find_map(|(alias, check)| (alias == s).then_some(check))
            })
            .ok_or_else(|| UnknownCheck(s.to_owned()))
    }
}
