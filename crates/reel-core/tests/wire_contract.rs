//! Wire-shape tests: field names the frontend depends on, and JsonSchema
//! validation of the response types.

use std::collections::HashMap;

use reel_core::entities::*;
use reel_core::enums::*;
use reel_core::merge::{ScopeMatch, merge_rules};
use reel_core::responses::*;
use reel_core::snapshot::assemble_snapshot;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn liptrap() -> Zone {
    Zone {
        code: "Cape Liptrap Coastal Park".into(),
        area: Some("Gippsland".into()),
    }
}

fn liptrap_rules() -> Vec<EffectiveRule> {
    let spot = vec![SpotQuota {
        fishing_spot: "Cape Liptrap Coastal Park".into(),
        species: "Black Bream".into(),
        daily_limit: Some("2".into()),
        min_size_cm: Some("28".into()),
        max_size_cm: Some("No Limit".into()),
    }];
    let general = ScopeMatch {
        tier: MatchTier::GeneralExact,
        rows: vec![GeneralQuota {
            area_desc: "Gippsland".into(),
            species: "Snapper".into(),
            daily_limit: Some("10".into()),
            min_size_cm: Some("30".into()),
            max_size_cm: Some("60".into()),
        }],
    };
    merge_rules(&liptrap(), spot, Some(general))
}

#[test]
fn effective_rule_exposes_contract_field_names() {
    let rules = liptrap_rules();
    let json = serde_json::to_value(&rules[0]).unwrap();
    for key in [
        "species",
        "zone_code",
        "area",
        "daily_limit",
        "size_min_cm",
        "size_max_cm",
        "source",
        "_match",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
    assert_eq!(json["source"], "spot");
    assert_eq!(json["_match"], "spot");
    assert_eq!(json["size_max_cm"], "No Limit");
}

#[test]
fn classified_species_is_flat() {
    let statuses: HashMap<String, SpeciesStatus> = [(
        "Snapper".to_string(),
        SpeciesStatus {
            species: "Snapper".into(),
            endangered_status: Some("Least Concern".into()),
            extinction_risk: Some("Low".into()),
            image: None,
            sources: Some("VFA".into()),
        },
    )]
    .into_iter()
    .collect();

    let snap = assemble_snapshot(&liptrap(), liptrap_rules(), &statuses);
    let json = serde_json::to_value(&snap).unwrap();
    let snapper = &json["groups"]["general"][1];

    assert_eq!(snapper["species"], "Snapper");
    assert_eq!(snapper["_match"], "general:exact");
    assert_eq!(snapper["distribution"], "Gippsland");
    assert_eq!(snapper["endangered_status"], "Least Concern");
    assert!(snapper["image"].is_null());
    assert_eq!(json["meta"]["counts"]["general"], 2);
}

#[test]
fn zone_snapshot_validates_against_schema() {
    let snap = assemble_snapshot(&liptrap(), liptrap_rules(), &HashMap::new());
    let schema = serde_json::to_value(schema_for!(ZoneSnapshot)).unwrap();
    let instance = serde_json::to_value(&snap).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let recovered: ZoneSnapshot = serde_json::from_value(instance).unwrap();
    assert_eq!(recovered, snap);
}

#[test]
fn rules_response_validates_against_schema() {
    let response = RulesResponse {
        etag: "W/\"rules-v1-Cape Liptrap Coastal Park--\"".into(),
        not_modified: false,
        rules: liptrap_rules(),
    };
    let schema = serde_json::to_value(schema_for!(RulesResponse)).unwrap();
    let instance = serde_json::to_value(&response).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema errors: {errors:?}");
}

#[test]
fn snapshot_serialization_is_stable() {
    let first = serde_json::to_string(&assemble_snapshot(
        &liptrap(),
        liptrap_rules(),
        &HashMap::new(),
    ))
    .unwrap();
    let second = serde_json::to_string(&assemble_snapshot(
        &liptrap(),
        liptrap_rules(),
        &HashMap::new(),
    ))
    .unwrap();
    assert_eq!(first, second);
}
