//! Concrete contracts for storage records
//!
//! The shipped rule sets: shared base rules plus create/update variants.
//! These are ordinary [`Contract`] implementations; callers remain free to
//! plug in their own.

use crate::contract::{Contract, ContractOptions};
use storages_model::{
    params::field, Storage, User, ValidationErrors, Violation, KNOWN_PROVIDER_TYPES,
};
use url::Url;

/// Rules shared by every storage contract
///
/// - `name` must be present and non-blank
/// - `provider_type` must be present and within [`KNOWN_PROVIDER_TYPES`]
/// - `host`, when set, must parse as an absolute http(s) URL
fn base_rules(storage: &Storage, errors: &mut ValidationErrors) {
    match storage.name() {
        Some(name) if !name.trim().is_empty() => {}
        _ => errors.add(field::NAME, Violation::Blank),
    }

    match storage.provider_type() {
        None => errors.add(field::PROVIDER_TYPE, Violation::Blank),
        Some(provider_type) if !KNOWN_PROVIDER_TYPES.contains(&provider_type) => {
            errors.add(field::PROVIDER_TYPE, Violation::NotIncluded);
        }
        Some(_) => {}
    }

    if let Some(host) = storage.host() {
        if !is_http_url(host) {
            errors.add(field::HOST, Violation::InvalidUrl);
        }
    }
}

fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Rule set for records about to be created
///
/// Base rules plus an owner requirement: a fresh record must carry a creator
/// before it may be persisted. `CreateContract::new` doubles as a
/// [`crate::contract::ContractFactory`] through the closure blanket impl.
#[derive(Debug, Default)]
pub struct CreateContract {
    errors: ValidationErrors,
}

impl CreateContract {
    /// Create the contract; no options are currently interpreted
    #[inline]
    #[must_use]
    pub fn new(_options: &ContractOptions) -> Self {
        Self::default()
    }
}

impl Contract for CreateContract {
    fn validate(&mut self, _actor: &User, storage: &Storage) -> bool {
        let mut errors = ValidationErrors::new();
        base_rules(storage, &mut errors);

        if storage.creator().is_none() {
            errors.add(field::CREATOR, Violation::Blank);
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn take_errors(&mut self) -> ValidationErrors {
        std::mem::take(&mut self.errors)
    }
}

/// Rule set for records being updated
///
/// Base rules plus a persistence guard: update rules only apply to records
/// that already have an identity.
#[derive(Debug, Default)]
pub struct UpdateContract {
    errors: ValidationErrors,
}

impl UpdateContract {
    /// Create the contract; no options are currently interpreted
    #[inline]
    #[must_use]
    pub fn new(_options: &ContractOptions) -> Self {
        Self::default()
    }
}

impl Contract for UpdateContract {
    fn validate(&mut self, _actor: &User, storage: &Storage) -> bool {
        let mut errors = ValidationErrors::new();
        base_rules(storage, &mut errors);

        if storage.is_new_record() {
            errors.add(field::ID, Violation::NotPersisted);
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn take_errors(&mut self) -> ValidationErrors {
        std::mem::take(&mut self.errors)
    }
}
