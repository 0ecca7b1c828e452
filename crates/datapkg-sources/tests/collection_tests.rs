use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

use datapkg_descriptor::Descriptor;
use datapkg_sources::{
    add_source, get_sources, remove_source, set_sources, RemoveError, SourceError, SourceRecord,
};

fn record(fields: &[(&str, Value)]) -> SourceRecord {
    let map: IndexMap<String, Value> = fields
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect();
    SourceRecord::from_map(map)
}

#[test]
fn add_then_get_yields_exactly_the_name() {
    let mut descriptor = Descriptor::new();
    add_source(&mut descriptor, "World Bank", None, None).unwrap();

    let sources = get_sources(&descriptor);
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].name(), Some("World Bank"));
    assert_eq!(
        descriptor.get("sources"),
        Some(&json!([{"name": "World Bank"}]))
    );
}

#[test]
fn add_carries_web_and_email_only_when_given() {
    let mut descriptor = Descriptor::new();
    add_source(
        &mut descriptor,
        "World Bank",
        Some("https://data.worldbank.org"),
        Some("data@worldbank.org"),
    )
    .unwrap();
    add_source(&mut descriptor, "Eurostat", Some(""), None).unwrap();

    assert_eq!(
        descriptor.get("sources"),
        Some(&json!([
            {"name": "World Bank",
             "web": "https://data.worldbank.org",
             "email": "data@worldbank.org"},
            {"name": "Eurostat"},
        ]))
    );
}

#[test]
fn set_sources_is_idempotent_on_a_valid_list() {
    let mut descriptor = Descriptor::new();
    let records = vec![
        record(&[("name", json!("A")), ("web", json!("http://a.example.com"))]),
        record(&[("name", json!("B"))]),
    ];

    set_sources(&mut descriptor, &records).unwrap();
    let first = descriptor.get("sources").cloned();

    let round_trip = get_sources(&descriptor);
    set_sources(&mut descriptor, &round_trip).unwrap();
    assert_eq!(descriptor.get("sources").cloned(), first);
}

#[test]
fn malformed_web_is_rejected_and_state_kept() {
    let mut descriptor = Descriptor::new();
    add_source(&mut descriptor, "Acme", Some("http://acme.example.com"), None).unwrap();
    let before = descriptor.clone();

    let bad = record(&[("name", json!("Bad")), ("web", json!("not a url"))]);
    let err = set_sources(&mut descriptor, &[bad]).unwrap_err();
    assert_eq!(err, SourceError::InvalidUrl("not a url".to_string()));
    assert_eq!(err.to_string(), "not a url: not a url");
    assert_eq!(descriptor, before);
}

#[test]
fn malformed_email_is_rejected_and_state_kept() {
    let mut descriptor = Descriptor::new();
    let bad = record(&[("name", json!("Bad")), ("email", json!("plainstring"))]);

    let err = set_sources(&mut descriptor, &[bad]).unwrap_err();
    assert_eq!(err, SourceError::InvalidEmail("plainstring".to_string()));
    assert_eq!(err.to_string(), "not an email address: plainstring");
    assert!(!descriptor.contains("sources"));
}

#[test]
fn duplicate_names_are_rejected_keeping_prior_state() {
    let mut descriptor = Descriptor::new();
    add_source(&mut descriptor, "Acme", None, None).unwrap();

    let err = add_source(&mut descriptor, "Acme", None, None).unwrap_err();
    assert_eq!(err, SourceError::DuplicateNames);
    assert_eq!(err.to_string(), "source names are not unique");

    let sources = get_sources(&descriptor);
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].name(), Some("Acme"));
}

#[test]
fn duplicate_check_runs_after_per_record_validation() {
    // A malformed record surfaces its own error even when a duplicate
    // name is also present.
    let mut descriptor = Descriptor::new();
    let records = vec![
        record(&[("name", json!("Acme"))]),
        record(&[("name", json!("Acme")), ("web", json!("nope"))]),
    ];
    let err = set_sources(&mut descriptor, &records).unwrap_err();
    assert_eq!(err, SourceError::InvalidUrl("nope".to_string()));
}

#[test]
fn remove_of_absent_name_is_a_lookup_miss() {
    let mut descriptor = Descriptor::new();
    add_source(&mut descriptor, "Acme", None, None).unwrap();
    let before = descriptor.clone();

    let err = remove_source(&mut descriptor, "Ghost").unwrap_err();
    assert_eq!(err, RemoveError::NotFound("Ghost".to_string()));
    assert_eq!(err.to_string(), "source with name 'Ghost' does not exist");
    assert_eq!(descriptor, before);
}

#[test]
fn remove_drops_exactly_the_named_record() {
    let mut descriptor = Descriptor::new();
    set_sources(
        &mut descriptor,
        &[SourceRecord::new("A"), SourceRecord::new("B")],
    )
    .unwrap();

    remove_source(&mut descriptor, "A").unwrap();
    assert_eq!(descriptor.get("sources"), Some(&json!([{"name": "B"}])));
}

#[test]
fn remove_compares_names_exactly() {
    let mut descriptor = Descriptor::new();
    add_source(&mut descriptor, "Acme", None, None).unwrap();

    // No case folding or trimming.
    assert!(remove_source(&mut descriptor, "acme").is_err());
    assert!(remove_source(&mut descriptor, " Acme").is_err());
    remove_source(&mut descriptor, "Acme").unwrap();
}

#[test]
fn extra_key_is_rejected_naming_the_offender() {
    let mut descriptor = Descriptor::new();
    let bad = record(&[("name", json!("A")), ("phone", json!("555"))]);

    let err = set_sources(&mut descriptor, &[bad]).unwrap_err();
    assert_eq!(
        err,
        SourceError::UnexpectedKeys {
            keys: vec!["phone".to_string()]
        }
    );
    assert!(err.to_string().contains("phone"));
    assert!(!descriptor.contains("sources"));
}

#[test]
fn record_without_name_is_rejected() {
    let mut descriptor = Descriptor::new();
    let bad = record(&[("web", json!("http://a.example.com"))]);

    let err = set_sources(&mut descriptor, &[bad]).unwrap_err();
    assert_eq!(err, SourceError::MissingName);
    assert_eq!(err.to_string(), "source is missing a name");
}

#[test]
fn replacement_preserves_input_order() {
    let mut descriptor = Descriptor::new();
    let records: Vec<SourceRecord> = ["C", "A", "B"].into_iter().map(SourceRecord::new).collect();
    set_sources(&mut descriptor, &records).unwrap();

    let names: Vec<String> = get_sources(&descriptor)
        .iter()
        .filter_map(|s| s.name().map(ToOwned::to_owned))
        .collect();
    assert_eq!(names, ["C", "A", "B"]);
}

#[test]
fn out_of_band_collection_is_returned_unvalidated() {
    let mut descriptor = Descriptor::new();
    descriptor.set("sources", json!([{"name": "Acme", "phone": "555"}]));

    // get does not validate...
    let sources = get_sources(&descriptor);
    assert_eq!(sources.len(), 1);

    // ...but the gate does once the collection flows back through it.
    let err = remove_source(&mut descriptor, "Ghost").unwrap_err();
    assert_eq!(err, RemoveError::NotFound("Ghost".to_string()));
}

fn valid_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,15}[A-Za-z0-9]"
}

proptest! {
    #[test]
    fn prop_add_then_remove_restores_the_collection(
        names in proptest::collection::hash_set(valid_name(), 2..6)
    ) {
        let mut names: Vec<String> = names.into_iter().collect();
        let extra = names.pop().unwrap();

        let mut descriptor = Descriptor::new();
        for name in &names {
            add_source(&mut descriptor, name, None, None).unwrap();
        }
        let before = descriptor.get("sources").cloned();

        add_source(&mut descriptor, &extra, None, None).unwrap();
        remove_source(&mut descriptor, &extra).unwrap();
        prop_assert_eq!(descriptor.get("sources").cloned(), before);
    }

    #[test]
    fn prop_duplicate_add_always_fails(name in valid_name()) {
        let mut descriptor = Descriptor::new();
        add_source(&mut descriptor, &name, None, None).unwrap();

        let err = add_source(&mut descriptor, &name, None, None).unwrap_err();
        prop_assert_eq!(err, SourceError::DuplicateNames);
        prop_assert_eq!(get_sources(&descriptor).len(), 1);
    }

    #[test]
    fn prop_set_sources_is_idempotent(
        names in proptest::collection::hash_set(valid_name(), 0..6)
    ) {
        let records: Vec<SourceRecord> =
            names.iter().map(|name| SourceRecord::new(name.as_str())).collect();

        let mut descriptor = Descriptor::new();
        set_sources(&mut descriptor, &records).unwrap();
        let first = descriptor.get("sources").cloned();

        let current = get_sources(&descriptor);
        set_sources(&mut descriptor, &current).unwrap();
        prop_assert_eq!(descriptor.get("sources").cloned(), first);
    }
}
