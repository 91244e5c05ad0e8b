//! Default display names per provider type
//!
//! Replaces the hidden global lookup of the original system with an explicit
//! registry injected into the service: fresh records named by nobody get the
//! default registered for their provider type.

use indexmap::IndexMap;
use storages_model::PROVIDER_TYPE_NEXTCLOUD;

/// Registry mapping provider type → default display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultNameRegistry {
    names: IndexMap<String, String>,
}

impl DefaultNameRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in provider defaults
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(PROVIDER_TYPE_NEXTCLOUD, "My Nextcloud");
        registry
    }

    /// Register a default name for a provider type
    pub fn register(&mut self, provider_type: impl Into<String>, name: impl Into<String>) {
        self.names.insert(provider_type.into(), name.into());
    }

    /// Default name for a provider type, if registered
    #[inline]
    #[must_use]
    pub fn lookup(&self, provider_type: &str) -> Option<&str> {
        self.names.get(provider_type).map(String::as_str)
    }

    /// Number of registered provider types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no defaults are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
