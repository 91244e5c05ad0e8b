//! Storages Service - attribute assignment with pluggable validation
//!
//! The service layer around the storage entity:
//! - Applies untrusted caller parameters with defaulting and normalization
//! - Delegates validation to an injected, per-call contract
//! - Reports a uniform success/failure outcome
//!
//! Persistence stays with the caller: the service hands back a mutated but
//! unsaved record on success and on failure alike.
//!
//! # Example
//!
//! ```rust
//! use storages_model::{params::field, Params, Storage, User, PROVIDER_TYPE_NEXTCLOUD};
//! use storages_service::{CreateContract, SetAttributesService};
//!
//! let service = SetAttributesService::new(CreateContract::new);
//! let admin = User::new("admin");
//! let mut storage = Storage::new();
//! let params = Params::new().with(field::PROVIDER_TYPE, PROVIDER_TYPE_NEXTCLOUD);
//!
//! let result = service.call(&admin, &mut storage, &params);
//! assert!(result.is_success());
//! assert_eq!(storage.name(), Some("My Nextcloud"));
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod contract;
pub mod contracts;
pub mod defaults;
pub mod set_attributes;

// Re-exports for convenience
pub use contract::{Contract, ContractFactory, ContractOptions};
pub use contracts::{CreateContract, UpdateContract};
pub use defaults::DefaultNameRegistry;
pub use set_attributes::{ServiceResult, SetAttributesService};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
