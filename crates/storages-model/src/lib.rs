//! Storages Model - domain types for storage integrations
//!
//! Defines the fundamental types shared across the storages layer:
//! - Acting users and their identifiers
//! - The storage entity (a mutable, not-yet-persisted aggregate)
//! - Untrusted parameter sets supplied by callers
//! - Field-keyed validation error collections
//!
//! Persistence is out of scope: entities here are plain in-memory records
//! that a separate layer loads and saves.

#![warn(unreachable_pub)]

// Core modules
pub mod errors;
pub mod params;
pub mod storage;
pub mod user;

// Re-exports for convenience
pub use errors::{ValidationErrors, Violation};
pub use params::{field, Params};
pub use storage::{Storage, StorageId, KNOWN_PROVIDER_TYPES, PROVIDER_TYPE_NEXTCLOUD};
pub use user::{User, UserId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
