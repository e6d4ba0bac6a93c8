//! Users
//!
//! The people placing orders, the bearer credentials that authenticate
//! them, and the pairing of the two.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Someone who places orders.
///
/// The email address is lower-cased exactly once, at construction. Every
/// path into a `User` runs through [`User::new`], including
/// deserialization, so a serializer never sees mixed case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawUser")]
pub struct User {
    name: String,
    email: String,
}

impl User {
    /// Creates a user, normalizing the email address to lower case.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into().to_lowercase(),
        }
    }

    /// The user's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's email address, always lower case.
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Deserialize)]
struct RawUser {
    name: String,
    email: String,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        Self::new(raw.name, raw.email)
    }
}

/// An opaque bearer credential.
///
/// The expiry is advisory only; enforcement belongs to the session layer.
/// The bearer value is redacted from `Debug` output and zeroized on drop.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthToken {
    value: String,
    expiry: Timestamp,
}

impl AuthToken {
    /// Creates a token from its bearer value and expiry.
    pub fn new(value: impl Into<String>, expiry: Timestamp) -> Self {
        Self {
            value: value.into(),
            expiry,
        }
    }

    /// The bearer value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the token stops being valid.
    pub const fn expiry(&self) -> Timestamp {
        self.expiry
    }

    /// Whether the token has expired as of `at`.
    ///
    /// A token is expired from its expiry instant onward. Advisory only.
    pub fn is_expired(&self, at: Timestamp) -> bool {
        at >= self.expiry
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &"**redacted**")
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl Drop for AuthToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// A credential paired with the user it authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSession {
    /// The credential.
    pub token: AuthToken,

    /// The user the credential authenticates.
    pub user: User,
}
