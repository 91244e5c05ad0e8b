//! Field-keyed validation errors
//!
//! Contracts report rule violations per field; [`ValidationErrors`] collects
//! them as an ordered field → violations mapping. A record fails validation
//! exactly when its collection is non-empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single rule violation
///
/// `Display` yields the human-readable message, phrased to read after the
/// field name ("name can't be blank").
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum Violation {
    /// Required value absent or empty
    #[error("can't be blank")]
    Blank,

    /// Value not in the allowed list
    #[error("is not included in the list")]
    NotIncluded,

    /// Value does not parse as an http(s) URL
    #[error("is not a valid URL")]
    InvalidUrl,

    /// Rule requires a persisted record
    #[error("has not been persisted yet")]
    NotPersisted,

    /// Contract-specific message
    #[error("{0}")]
    Custom(String),
}

/// Ordered mapping from field name to rule violations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: IndexMap<String, Vec<Violation>>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against a field
    pub fn add(&mut self, field: impl Into<String>, violation: Violation) {
        self.fields.entry(field.into()).or_default().push(violation);
    }

    /// Whether no violations were recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of violations across all fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Violations recorded against one field
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[Violation] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Human-readable messages for one field
    #[must_use]
    pub fn messages_for(&self, field: &str) -> Vec<String> {
        self.for_field(field)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Iterate over fields and their violations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Merge another collection into this one
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, violations) in other.fields {
            self.fields.entry(field).or_default().extend(violations);
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, violations) in &self.fields {
            for violation in violations {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field} {violation}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
