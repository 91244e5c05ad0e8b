//! Attribute-assignment service
//!
//! The single entry point of this crate: take an untrusted parameter set,
//! apply creation defaults and field normalization to a storage record, then
//! let an injected contract judge the result. The record is mutated in place
//! and never persisted here; saving is the caller's job, on success or not.

use crate::contract::{Contract, ContractFactory, ContractOptions};
use crate::defaults::DefaultNameRegistry;
use storages_model::{params::field, Params, Storage, User, ValidationErrors};

/// Outcome of one service call
///
/// The mutated record stays with the caller through the `&mut` borrow, so a
/// failure carries only the contract's violations. Mutations applied before a
/// failed validation are deliberately kept; discarding the record is the
/// caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ServiceResult {
    /// Contract accepted the mutated record
    Success,
    /// Contract rejected the record; carries its violation collection
    Failure(ValidationErrors),
}

impl ServiceResult {
    /// Whether the contract accepted the record
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether the contract rejected the record
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Violations on failure
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Success => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Consume the result, yielding the violations on failure
    #[must_use]
    pub fn into_errors(self) -> Option<ValidationErrors> {
        match self {
            Self::Success => None,
            Self::Failure(errors) => Some(errors),
        }
    }
}

/// Applies parameters to a storage record and validates through a contract
///
/// # Workflow
/// 1. Default `creator` and `name` on fresh records (never on loaded ones)
/// 2. Assign recognized parameters, normalizing host URLs
/// 3. Build a contract from the factory and run it
/// 4. Report `Success` or the contract's violations
///
/// Stateless across calls; each call operates only on the record it is given.
#[derive(Debug, Clone)]
pub struct SetAttributesService<F> {
    factory: F,
    defaults: DefaultNameRegistry,
    options: ContractOptions,
}

impl<F: ContractFactory> SetAttributesService<F> {
    /// Create a service around a contract factory
    ///
    /// Uses the standard default-name registry and empty contract options.
    #[inline]
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            defaults: DefaultNameRegistry::standard(),
            options: ContractOptions::new(),
        }
    }

    /// With a custom default-name registry
    #[inline]
    #[must_use]
    pub fn with_defaults(mut self, defaults: DefaultNameRegistry) -> Self {
        self.defaults = defaults;
        self
    }

    /// With options passed through to contract construction
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: ContractOptions) -> Self {
        self.options = options;
        self
    }

    /// Assign `params` onto `storage` and validate the result
    ///
    /// Mutates the record in place. Unknown parameter keys are ignored; no
    /// type validation happens at this layer. The service itself never errors
    /// for well-formed input; every domain-rule violation surfaces through
    /// the returned [`ServiceResult::Failure`].
    pub fn call(&self, actor: &User, storage: &mut Storage, params: &Params) -> ServiceResult {
        tracing::debug!(
            new_record = storage.is_new_record(),
            param_count = params.len(),
            "assigning storage attributes"
        );

        if storage.is_new_record() {
            self.apply_creation_defaults(actor, storage, params);
        }
        assign_params(storage, params);

        let mut contract = self.factory.build(&self.options);
        if contract.validate(actor, storage) {
            ServiceResult::Success
        } else {
            let errors = contract.take_errors();
            tracing::debug!(violations = errors.len(), "storage attributes rejected");
            ServiceResult::Failure(errors)
        }
    }

    /// Defaults applied only to records without an identity
    ///
    /// Loaded records keep their creator and name; explicit params may still
    /// override the name during assignment.
    fn apply_creation_defaults(&self, actor: &User, storage: &mut Storage, params: &Params) {
        storage.set_creator(actor.id);

        if params.contains(field::NAME) || storage.name().is_some() {
            return;
        }

        let provider_type = params
            .get(field::PROVIDER_TYPE)
            .or_else(|| storage.provider_type());
        let default_name = provider_type
            .and_then(|provider_type| self.defaults.lookup(provider_type))
            .map(str::to_owned);

        if let Some(name) = default_name {
            storage.set_name(name);
        }
    }
}

/// Apply recognized keys onto the record
///
/// `name` and `provider_type` are assigned verbatim; `host` has every
/// trailing slash stripped first. Unrecognized keys are skipped.
fn assign_params(storage: &mut Storage, params: &Params) {
    if let Some(name) = params.get(field::NAME) {
        storage.set_name(name);
    }
    if let Some(provider_type) = params.get(field::PROVIDER_TYPE) {
        storage.set_provider_type(provider_type);
    }
    if let Some(host) = params.get(field::HOST) {
        storage.set_host(host.trim_end_matches('/'));
    }
}
