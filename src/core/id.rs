//! Content identifier type for type-safe CMS ID handling.
//!
//! Identifiers are opaque strings assigned by the content store, but they
//! have a fixed lexical shape: a short lowercase prefix (`blt` by default)
//! followed by 16 lowercase hex characters. Whether a string *looks like*
//! an identifier is independent of whether it is registered anywhere.

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Default identifier prefix used by the content store.
pub const DEFAULT_ID_PREFIX: &str = "blt";

/// Length of the identifier prefix in ASCII letters.
pub const ID_PREFIX_LEN: usize = 3;

/// Length of the hex tail following the prefix.
pub const ID_HEX_LEN: usize = 16;

/// Opaque CMS content identifier.
///
/// Cheap to clone (shared string). Construction does not validate the
/// lexical shape - configuration validation does, so that a malformed
/// entry is reported as a diagnostic instead of a panic deep in a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(Arc<str>);

impl ContentId {
    /// Wrap a raw identifier string.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(Arc::from(raw.as_ref()))
    }

    /// Get the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether `value` has the lexical shape of an identifier:
    /// the given prefix followed by exactly 16 lowercase hex characters.
    ///
    /// Purely syntactic - says nothing about registration.
    pub fn matches_shape(value: &str, prefix: &str) -> bool {
        let Some(hex) = value.strip_prefix(prefix) else {
            return false;
        };
        hex.len() == ID_HEX_LEN
            && hex
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Check whether this identifier itself matches the expected shape.
    pub fn has_shape(&self, prefix: &str) -> bool {
        Self::matches_shape(&self.0, prefix)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl PartialEq<str> for ContentId {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for ContentId {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for ContentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}
