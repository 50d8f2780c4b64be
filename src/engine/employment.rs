//! Employment-status requirement branching.
//!
//! The densest conditional logic in the wizards lives here as one explicit
//! table: (status, audience) → required fields. Adding a status or entity
//! type is a row edit, not new control flow. The same rows also derive the
//! `IfEmploymentStatus` clauses the employment wizard step attaches to its
//! rules, so the resolver and the step definition cannot drift apart.

use std::collections::BTreeSet;

use crate::rules::domain::Requiredness;
use crate::rules::{EmploymentStatus, EntityType};

#[derive(Debug, Clone, Copy)]
struct BranchRow {
    status: EmploymentStatus,
    audience: &'static [EntityType],
    fields: &'static [&'static str],
}

const FULL_DETAIL: &[EntityType] = &[EntityType::Tenant, EntityType::CoSigner];
const GUARANTOR: &[EntityType] = &[EntityType::Guarantor];
const EVERYONE: &[EntityType] = &[
    EntityType::Tenant,
    EntityType::CoSigner,
    EntityType::Guarantor,
];

/// Guarantors only ever owe a net-monthly-income figure; the employer,
/// business, and university detail rows apply to tenants and co-signers.
const BRANCH_TABLE: &[BranchRow] = &[
    BranchRow {
        status: EmploymentStatus::Employed,
        audience: FULL_DETAIL,
        fields: &[
            "employer_name",
            "job_title",
            "employment_since",
            "net_monthly_income",
        ],
    },
    BranchRow {
        status: EmploymentStatus::Employed,
        audience: GUARANTOR,
        fields: &["net_monthly_income"],
    },
    BranchRow {
        status: EmploymentStatus::SelfEmployed,
        audience: FULL_DETAIL,
        fields: &[
            "company_name",
            "company_registration_number",
            "self_employed_since",
            "net_monthly_income",
        ],
    },
    BranchRow {
        status: EmploymentStatus::SelfEmployed,
        audience: GUARANTOR,
        fields: &["net_monthly_income"],
    },
    BranchRow {
        status: EmploymentStatus::Student,
        audience: FULL_DETAIL,
        fields: &["university_name", "study_program", "net_monthly_income"],
    },
    BranchRow {
        status: EmploymentStatus::Student,
        audience: GUARANTOR,
        fields: &["net_monthly_income"],
    },
    BranchRow {
        status: EmploymentStatus::Retired,
        audience: EVERYONE,
        fields: &["net_monthly_income"],
    },
    BranchRow {
        status: EmploymentStatus::Unemployed,
        audience: EVERYONE,
        fields: &[],
    },
    BranchRow {
        status: EmploymentStatus::Other,
        audience: EVERYONE,
        fields: &["net_monthly_income"],
    },
];

/// Fields `status` makes required for `entity_type`.
pub fn branch_requirements(
    status: EmploymentStatus,
    entity_type: EntityType,
) -> BTreeSet<&'static str> {
    BRANCH_TABLE
        .iter()
        .filter(|row| row.status == status && row.audience.contains(&entity_type))
        .flat_map(|row| row.fields.iter().copied())
        .collect()
}

/// Every field any branch can require; the employment step declares a rule
/// for each of these.
pub(crate) fn branched_fields() -> BTreeSet<&'static str> {
    BRANCH_TABLE
        .iter()
        .flat_map(|row| row.fields.iter().copied())
        .collect()
}

/// Requiredness clauses for one field, derived from the table rows naming it.
pub(crate) fn requiredness_for(field: &str) -> Vec<Requiredness> {
    BRANCH_TABLE
        .iter()
        .filter(|row| row.fields.contains(&field))
        .map(|row| Requiredness::IfEmploymentStatus {
            statuses: BTreeSet::from([row.status]),
            entity_types: row.audience.iter().copied().collect(),
        })
        .collect()
}
