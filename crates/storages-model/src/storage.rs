//! The storage entity
//!
//! A mutable aggregate describing one external storage integration (e.g. a
//! Nextcloud instance). Instances are either fresh in-memory records without
//! an identity, or records a persistence layer has loaded. This crate never
//! saves them; services mutate fields and hand the record back to the caller.

use crate::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provider type string for Nextcloud instances
pub const PROVIDER_TYPE_NEXTCLOUD: &str = "nextcloud";

/// Provider types the contracts accept
///
/// `provider_type` is stored verbatim on the entity; whitelist enforcement
/// happens in the validation contracts, not at assignment time.
pub const KNOWN_PROVIDER_TYPES: &[&str] = &[PROVIDER_TYPE_NEXTCLOUD];

/// Unique storage identifier
///
/// Present only once a record has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StorageId(pub Uuid);

impl StorageId {
    /// Generate new storage ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StorageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StorageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One external storage integration record
///
/// # Invariants
/// Once a record has an identity, `creator` is immutable by convention: the
/// attribute-assignment layer only defaults it on fresh records and never
/// accepts it from caller parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    id: Option<StorageId>,
    name: Option<String>,
    provider_type: Option<String>,
    host: Option<String>,
    creator: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Storage {
    /// Create a fresh, unpersisted record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the record has no persisted identity yet
    #[inline]
    #[must_use]
    pub fn is_new_record(&self) -> bool {
        self.id.is_none()
    }

    /// Persisted identity, if any
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<StorageId> {
        self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Provider type, stored verbatim
    #[inline]
    #[must_use]
    pub fn provider_type(&self) -> Option<&str> {
        self.provider_type.as_deref()
    }

    /// Host URL
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// User the record is owned by
    #[inline]
    #[must_use]
    pub fn creator(&self) -> Option<UserId> {
        self.creator
    }

    /// Creation timestamp, if persisted
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last-update timestamp, if persisted
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Set the display name
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Set the provider type (no coercion, no whitelist check)
    #[inline]
    pub fn set_provider_type(&mut self, provider_type: impl Into<String>) {
        self.provider_type = Some(provider_type.into());
    }

    /// Set the host URL
    #[inline]
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    /// Set the owner
    #[inline]
    pub fn set_creator(&mut self, creator: UserId) {
        self.creator = Some(creator);
    }

    /// Refresh the update stamp
    #[inline]
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// With a persisted identity (loaded records, test fixtures)
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: StorageId) -> Self {
        self.id = Some(id);
        self
    }

    /// With a display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With a provider type
    #[inline]
    #[must_use]
    pub fn with_provider_type(mut self, provider_type: impl Into<String>) -> Self {
        self.provider_type = Some(provider_type.into());
        self
    }

    /// With a host URL
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// With an owner
    #[inline]
    #[must_use]
    pub fn with_creator(mut self, creator: UserId) -> Self {
        self.creator = Some(creator);
        self
    }
}
