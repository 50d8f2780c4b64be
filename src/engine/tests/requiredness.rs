use super::common::*;
use crate::engine::requiredness::{resolve, RequirednessSource, RequirednessVerdict};
use crate::rules::{EmploymentStatus, EntityType, FieldRule, FieldType};

#[test]
fn always_clause_requires_in_any_context() {
    let rule = FieldRule::new("email", FieldType::String).required();
    let ctx = strict_ctx(EntityType::Tenant, &[]);

    assert_eq!(
        resolve(&rule, &ctx),
        RequirednessVerdict::Required(RequirednessSource::Declared)
    );
}

#[test]
fn no_clauses_means_not_required() {
    let rule = FieldRule::new("nickname", FieldType::String);
    let ctx = strict_ctx(EntityType::Tenant, &[]);

    assert_eq!(resolve(&rule, &ctx), RequirednessVerdict::NotRequired);
}

#[test]
fn if_equals_fires_only_on_matching_sibling() {
    let rule = FieldRule::new("current_rent", FieldType::Number)
        .required_if_equals("housing_situation", "renting");

    let renting = strict_ctx(EntityType::Tenant, &[("housing_situation", "renting")]);
    match resolve(&rule, &renting) {
        RequirednessVerdict::Required(RequirednessSource::Dependent { field, value }) => {
            assert_eq!(field, "housing_situation");
            assert_eq!(value, "renting");
        }
        other => panic!("expected dependent requirement, got {other:?}"),
    }

    let owner = strict_ctx(EntityType::Tenant, &[("housing_situation", "owner_occupier")]);
    assert_eq!(resolve(&rule, &owner), RequirednessVerdict::NotRequired);
}

#[test]
fn if_equals_treats_absent_sibling_as_not_equal() {
    let rule = FieldRule::new("current_rent", FieldType::Number)
        .required_if_equals("housing_situation", "renting");
    let ctx = strict_ctx(EntityType::Tenant, &[]);

    assert_eq!(resolve(&rule, &ctx), RequirednessVerdict::NotRequired);
}

#[test]
fn entity_type_clause_matches_declared_entity() {
    let rule = FieldRule::new("relationship_to_tenant", FieldType::String)
        .required_for([EntityType::CoSigner, EntityType::Guarantor]);

    let guarantor = strict_ctx(EntityType::Guarantor, &[]);
    assert_eq!(
        resolve(&rule, &guarantor),
        RequirednessVerdict::Required(RequirednessSource::Declared)
    );

    let tenant = strict_ctx(EntityType::Tenant, &[]);
    assert_eq!(resolve(&rule, &tenant), RequirednessVerdict::NotRequired);
}

#[test]
fn employment_clause_needs_both_status_and_entity_match() {
    let rule = FieldRule::new("employer_name", FieldType::String).required_when(
        crate::rules::Requiredness::IfEmploymentStatus {
            statuses: [EmploymentStatus::Employed].into_iter().collect(),
            entity_types: [EntityType::Tenant, EntityType::CoSigner]
                .into_iter()
                .collect(),
        },
    );

    let employed_tenant =
        strict_ctx(EntityType::Tenant, &[("employment_status", "employed")]);
    assert_eq!(
        resolve(&rule, &employed_tenant),
        RequirednessVerdict::Required(RequirednessSource::Declared)
    );

    let employed_guarantor =
        strict_ctx(EntityType::Guarantor, &[("employment_status", "employed")]);
    assert_eq!(
        resolve(&rule, &employed_guarantor),
        RequirednessVerdict::NotRequired
    );

    let student_tenant = strict_ctx(EntityType::Tenant, &[("employment_status", "student")]);
    assert_eq!(resolve(&rule, &student_tenant), RequirednessVerdict::NotRequired);

    let no_status = strict_ctx(EntityType::Tenant, &[]);
    assert_eq!(resolve(&rule, &no_status), RequirednessVerdict::NotRequired);
}

#[test]
fn clauses_combine_with_or_semantics() {
    let rule = FieldRule::new("income_proof", FieldType::String)
        .required_for([EntityType::Guarantor])
        .required_if_equals("employment_status", "self_employed");

    let guarantor = strict_ctx(EntityType::Guarantor, &[]);
    assert!(matches!(
        resolve(&rule, &guarantor),
        RequirednessVerdict::Required(_)
    ));

    let self_employed_tenant = strict_ctx(
        EntityType::Tenant,
        &[("employment_status", "self_employed")],
    );
    assert!(matches!(
        resolve(&rule, &self_employed_tenant),
        RequirednessVerdict::Required(_)
    ));

    let employed_tenant = strict_ctx(EntityType::Tenant, &[("employment_status", "employed")]);
    assert_eq!(resolve(&rule, &employed_tenant), RequirednessVerdict::NotRequired);
}

#[test]
fn declared_clause_wins_over_dependent_regardless_of_order() {
    let rule = FieldRule::new("deposit", FieldType::Number)
        .required_if_equals("mode", "managed")
        .required();

    let ctx = strict_ctx(EntityType::Tenant, &[("mode", "managed")]);
    assert_eq!(
        resolve(&rule, &ctx),
        RequirednessVerdict::Required(RequirednessSource::Declared)
    );
}
