//! Contract trait and factory seam
//!
//! Provides the [`Contract`] trait for pluggable validation rule sets.
//! A contract is instantiated per service call through a [`ContractFactory`]
//! and judges the mutated entity; the service never hard-codes rules itself.

use indexmap::IndexMap;
use storages_model::{Storage, User, ValidationErrors};

/// Opaque options handed through to contract construction
///
/// Contracts interpret keys they recognize and ignore the rest, mirroring how
/// parameter sets are handled elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractOptions {
    values: IndexMap<String, String>,
}

impl ContractOptions {
    /// Create an empty option set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an additional key/value pair
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Value for a key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether no options were supplied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pluggable validation rule set
///
/// Exactly two capabilities: a validity verdict and, after a failed verdict,
/// the field-keyed violations that caused it. Any rule engine implementing
/// these plugs into the attribute-assignment service.
pub trait Contract {
    /// Judge the entity on behalf of the acting user
    ///
    /// Returns `true` when every rule passes. On `false`, [`Contract::errors`]
    /// holds at least one violation.
    fn validate(&mut self, actor: &User, storage: &Storage) -> bool;

    /// Violations recorded by the last [`Contract::validate`] run
    fn errors(&self) -> &ValidationErrors;

    /// Move the recorded violations out of the contract
    ///
    /// The failure arm of a service result carries the contract's own
    /// collection, not a copy.
    fn take_errors(&mut self) -> ValidationErrors;
}

/// Produces a contract instance per service call
pub trait ContractFactory {
    /// Concrete contract type produced
    type Contract: Contract;

    /// Build a contract scoped to the given options
    fn build(&self, options: &ContractOptions) -> Self::Contract;
}

/// Any `Fn(&ContractOptions) -> C` closure is a factory, so callers and tests
/// can inject rule sets without a dedicated type.
impl<C, F> ContractFactory for F
where
    C: Contract,
    F: Fn(&ContractOptions) -> C,
{
    type Contract = C;

    fn build(&self, options: &ContractOptions) -> C {
        self(options)
    }
}
