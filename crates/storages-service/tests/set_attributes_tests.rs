//! Service-level tests for attribute assignment
//!
//! Exercises the full surface with a scripted contract double, covering
//! defaulting on fresh records, preservation on loaded records, parameter
//! assignment, host normalization, and failure propagation.

use pretty_assertions::assert_eq;
use storages_model::{
    params::field, Params, Storage, StorageId, User, UserId, ValidationErrors, Violation,
    PROVIDER_TYPE_NEXTCLOUD,
};
use storages_service::{Contract, ContractFactory, ContractOptions, ServiceResult, SetAttributesService};

/// Contract double with a scripted verdict and canned errors.
#[derive(Debug, Clone)]
struct ScriptedContract {
    valid: bool,
    errors: ValidationErrors,
}

impl ScriptedContract {
    fn accepting() -> Self {
        Self {
            valid: true,
            errors: ValidationErrors::new(),
        }
    }

    fn rejecting(errors: ValidationErrors) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}

impl Contract for ScriptedContract {
    fn validate(&mut self, _actor: &User, _storage: &Storage) -> bool {
        self.valid
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn take_errors(&mut self) -> ValidationErrors {
        std::mem::take(&mut self.errors)
    }
}

fn accepting_service() -> SetAttributesService<impl ContractFactory<Contract = ScriptedContract>> {
    SetAttributesService::new(|_options: &ContractOptions| ScriptedContract::accepting())
}

fn nextcloud_params() -> Params {
    Params::new().with(field::PROVIDER_TYPE, PROVIDER_TYPE_NEXTCLOUD)
}

#[test]
fn returns_success_for_valid_contract() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new();

    let result = service.call(&admin, &mut storage, &nextcloud_params());
    assert!(result.is_success());
    assert!(!result.is_failure());
}

#[test]
fn new_record_gets_creator_from_acting_user() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new();

    let _ = service.call(&admin, &mut storage, &nextcloud_params());
    assert_eq!(storage.creator(), Some(admin.id));
}

#[test]
fn new_record_gets_provider_type_from_params() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new();

    let _ = service.call(&admin, &mut storage, &nextcloud_params());
    assert_eq!(storage.provider_type(), Some(PROVIDER_TYPE_NEXTCLOUD));
}

#[test]
fn new_record_gets_default_name_for_provider() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new();

    let _ = service.call(&admin, &mut storage, &nextcloud_params());
    assert_eq!(storage.name(), Some("My Nextcloud"));
}

#[test]
fn explicit_name_wins_over_default() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new();
    let params = nextcloud_params().with(field::NAME, "Our Cloud");

    let _ = service.call(&admin, &mut storage, &params);
    assert_eq!(storage.name(), Some("Our Cloud"));
}

#[test]
fn host_trailing_slashes_are_removed() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new();
    let params = nextcloud_params().with(field::HOST, "https://some.host.com//");

    let _ = service.call(&admin, &mut storage, &params);
    assert_eq!(storage.host(), Some("https://some.host.com"));
}

#[test]
fn existing_record_keeps_its_name() {
    let service = accepting_service();
    let admin = User::new("admin");
    let mut storage = Storage::new()
        .with_id(StorageId::new())
        .with_name("My Storage")
        .with_creator(UserId::new());

    let _ = service.call(&admin, &mut storage, &nextcloud_params());
    assert_eq!(storage.name(), Some("My Storage"));
}

#[test]
fn existing_record_keeps_its_creator() {
    let service = accepting_service();
    let admin = User::new("admin");
    let original_creator = UserId::new();
    let mut storage = Storage::new()
        .with_id(StorageId::new())
        .with_name("My Storage")
        .with_creator(original_creator);

    let _ = service.call(&admin, &mut storage, &nextcloud_params());
    assert_eq!(storage.creator(), Some(original_creator));
    assert_ne!(storage.creator(), Some(admin.id));
}

#[test]
fn params_are_assigned_regardless_of_contract_verdict() {
    let mut errors = ValidationErrors::new();
    errors.add(field::PROVIDER_TYPE, Violation::NotIncluded);
    let service = SetAttributesService::new(move |_options: &ContractOptions| {
        ScriptedContract::rejecting(errors.clone())
    });

    let admin = User::new("admin");
    let mut storage = Storage::new();
    let params = Params::new()
        .with(field::NAME, "Foobar")
        .with(field::PROVIDER_TYPE, "foo provider");

    let _ = service.call(&admin, &mut storage, &params);
    assert_eq!(storage.name(), Some("Foobar"));
    assert_eq!(storage.provider_type(), Some("foo provider"));
}

#[test]
fn invalid_contract_yields_failure_with_its_errors() {
    let mut errors = ValidationErrors::new();
    errors.add(field::NAME, Violation::Blank);
    errors.add(field::HOST, Violation::InvalidUrl);
    let expected = errors.clone();

    let service = SetAttributesService::new(move |_options: &ContractOptions| {
        ScriptedContract::rejecting(errors.clone())
    });

    let admin = User::new("admin");
    let mut storage = Storage::new();
    let result = service.call(&admin, &mut storage, &nextcloud_params());

    assert!(!result.is_success());
    assert_eq!(result, ServiceResult::Failure(expected.clone()));
    assert_eq!(result.into_errors(), Some(expected));
}
