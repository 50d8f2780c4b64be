use crate::engine::employment::{branch_requirements, requiredness_for};
use crate::rules::{EmploymentStatus, EntityType, Requiredness};

#[test]
fn guarantor_sets_are_strict_subsets_of_tenant_sets() {
    for status in [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Student,
    ] {
        let tenant = branch_requirements(status, EntityType::Tenant);
        let guarantor = branch_requirements(status, EntityType::Guarantor);

        assert!(
            guarantor.is_subset(&tenant) && guarantor != tenant,
            "{status:?}: guarantor fields should be a strict subset of tenant fields"
        );
        assert_eq!(
            guarantor.into_iter().collect::<Vec<_>>(),
            vec!["net_monthly_income"]
        );
    }
}

#[test]
fn co_signers_share_the_full_detail_set() {
    for status in [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Student,
    ] {
        assert_eq!(
            branch_requirements(status, EntityType::CoSigner),
            branch_requirements(status, EntityType::Tenant)
        );
    }
}

#[test]
fn employed_tenant_owes_employer_detail() {
    let fields = branch_requirements(EmploymentStatus::Employed, EntityType::Tenant);
    assert!(fields.contains("employer_name"));
    assert!(fields.contains("job_title"));
    assert!(fields.contains("employment_since"));
    assert!(fields.contains("net_monthly_income"));
}

#[test]
fn student_guarantor_owes_only_income() {
    let fields = branch_requirements(EmploymentStatus::Student, EntityType::Guarantor);
    assert!(!fields.contains("university_name"));
    assert!(fields.contains("net_monthly_income"));
    assert_eq!(fields.len(), 1);
}

#[test]
fn retired_and_other_require_income_for_every_entity() {
    for status in [EmploymentStatus::Retired, EmploymentStatus::Other] {
        for entity in [EntityType::Tenant, EntityType::CoSigner, EntityType::Guarantor] {
            let fields = branch_requirements(status, entity);
            assert!(
                fields.contains("net_monthly_income"),
                "{status:?}/{entity:?} should require net_monthly_income"
            );
            assert_eq!(fields.len(), 1);
        }
    }
}

#[test]
fn unemployed_requires_nothing() {
    for entity in [EntityType::Tenant, EntityType::CoSigner, EntityType::Guarantor] {
        assert!(branch_requirements(EmploymentStatus::Unemployed, entity).is_empty());
    }
}

#[test]
fn derived_clauses_mirror_the_table() {
    let clauses = requiredness_for("university_name");
    assert_eq!(clauses.len(), 1);
    match &clauses[0] {
        Requiredness::IfEmploymentStatus {
            statuses,
            entity_types,
        } => {
            assert!(statuses.contains(&EmploymentStatus::Student));
            assert!(entity_types.contains(&EntityType::Tenant));
            assert!(!entity_types.contains(&EntityType::Guarantor));
        }
        other => panic!("expected employment clause, got {other:?}"),
    }

    // net_monthly_income appears in every income-bearing row.
    let income_clauses = requiredness_for("net_monthly_income");
    assert!(income_clauses.len() >= 6);

    assert!(requiredness_for("unknown_field").is_empty());
}
