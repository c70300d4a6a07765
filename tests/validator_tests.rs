use chembot::config::DEFAULT_ID_TYPES;
use chembot::kernel::event::SlotName;
use chembot::kernel::intent::validator::{RequestValidator, ERROR_SEARCH_CRITERIA_EMPTY};
use chembot::kernel::properties::{PropertyAliasResolver, ResolvedProperty};
use chembot::kernel::request::CompoundRequest;

fn request(id_type: Option<&str>, property: Option<&str>, search: Option<&str>) -> CompoundRequest {
    CompoundRequest {
        identifier_type: id_type.map(String::from),
        property_phrase: property.map(String::from),
        search_criteria: search.map(String::from),
        attachment: None,
        failed_previously: false,
    }
}

#[test]
fn test_valid_request() {
    let aliases = PropertyAliasResolver::new();
    let validator = RequestValidator::new(&aliases, DEFAULT_ID_TYPES.to_vec());

    let req = request(Some("name"), Some("mw"), Some("glucose"));
    assert!(validator.validate(&req).is_ok());
    assert_eq!(validator.resolve(&req).unwrap(), ResolvedProperty::Single("MolecularWeight"));

    for id_type in DEFAULT_ID_TYPES {
        assert!(validator.validate(&request(Some(*id_type), Some("card"), Some("5793"))).is_ok());
    }
}

#[test]
fn test_each_field_reported_alone() {
    let aliases = PropertyAliasResolver::new();
    let validator = RequestValidator::new(&aliases, DEFAULT_ID_TYPES.to_vec());

    let err = validator.validate(&request(Some("wrong"), Some("mw"), Some("glucose"))).unwrap_err();
    assert_eq!(err.slot, SlotName::IdType);
    assert_eq!(
        err.message,
        "We currently do not support wrong as a valid Identifier Type. Can you try again?"
    );

    let err = validator.validate(&request(Some("name"), Some("wrong"), Some("glucose"))).unwrap_err();
    assert_eq!(err.slot, SlotName::PropertyToSearch);
    assert_eq!(
        err.message,
        "We currently do not support wrong as a valid Chemical Property to search. Can you try again?"
    );

    let err = validator.validate(&request(Some("name"), Some("mw"), Some(""))).unwrap_err();
    assert_eq!(err.slot, SlotName::CompoundToSearch);
    assert_eq!(err.message, ERROR_SEARCH_CRITERIA_EMPTY);
    assert_eq!(err.to_string(), ERROR_SEARCH_CRITERIA_EMPTY);
}

#[test]
fn test_missing_fields() {
    let aliases = PropertyAliasResolver::new();
    let validator = RequestValidator::new(&aliases, DEFAULT_ID_TYPES.to_vec());

    let err = validator.validate(&request(None, Some("mw"), Some("glucose"))).unwrap_err();
    assert_eq!(err.slot, SlotName::IdType);

    let err = validator.validate(&request(Some("name"), None, Some("glucose"))).unwrap_err();
    assert_eq!(err.slot, SlotName::PropertyToSearch);

    let err = validator.validate(&request(Some("name"), Some("mw"), None)).unwrap_err();
    assert_eq!(err.slot, SlotName::CompoundToSearch);
}

#[test]
fn test_first_failure_wins() {
    let aliases = PropertyAliasResolver::new();
    let validator = RequestValidator::new(&aliases, DEFAULT_ID_TYPES.to_vec());

    let all_bad = request(Some("wrong"), Some("nonsense"), None);
    assert_eq!(validator.validate(&all_bad).unwrap_err().slot, SlotName::IdType);

    let property_and_search_bad = request(Some("cid"), Some("nonsense"), None);
    assert_eq!(
        validator.validate(&property_and_search_bad).unwrap_err().slot,
        SlotName::PropertyToSearch
    );
}

#[test]
fn test_identifier_types_are_exact() {
    let aliases = PropertyAliasResolver::new();
    let validator = RequestValidator::new(&aliases, vec!["cid", "name"]);

    assert!(validator.validate(&request(Some("smiles"), Some("mw"), Some("CCO"))).is_err());
    assert!(validator.validate(&request(Some("Name"), Some("mw"), Some("glucose"))).is_err());
    assert!(validator.validate(&request(Some("cid"), Some("mw"), Some("702"))).is_ok());
}
