//! Untrusted parameter sets
//!
//! A [`Params`] value is the raw field-name → value mapping a caller supplies,
//! e.g. from a decoded form or API body. Keys are unique and values are plain
//! strings; consumers pick out the keys they recognize and ignore the rest.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field names recognized across the storages layer
pub mod field {
    /// Display name of the storage
    pub const NAME: &str = "name";
    /// Provider type string
    pub const PROVIDER_TYPE: &str = "provider_type";
    /// Host URL of the remote instance
    pub const HOST: &str = "host";
    /// Owner reference; never assignable from params
    pub const CREATOR: &str = "creator";
    /// Persisted identity; never assignable from params
    pub const ID: &str = "id";
}

/// Ordered field-name → raw value mapping
///
/// Insertion order is preserved so assignment and error reporting stay
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: IndexMap<String, String>,
}

impl Params {
    /// Create an empty parameter set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// With an additional key/value pair
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw value for a key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a key is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of supplied keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys were supplied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
