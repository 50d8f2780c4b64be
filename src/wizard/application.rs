//! Step rule sets for the tenant-application wizard.
//!
//! Pure data on top of the rule model: adding or reshaping a field is an
//! edit here, never new control flow in the engine. The same definitions are
//! exported to the client form layer through [`crate::schema`], which is what
//! keeps the two sides' verdicts identical.

use crate::engine::employment;
use crate::error::RuleSetError;
use crate::rules::{EmploymentStatus, EntityType, FieldRule, FieldType, RuleSet};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const DIAL_CODE_PATTERN: &str = r"^\+?\d{1,4}$";
const HOUSE_NUMBER_PATTERN: &str = r"^\d+\s?[A-Za-z]?$";
const COUNTRY_PATTERN: &str = r"^[A-Za-z]{2}$";
const LOCALE_PATTERN: &str = r"^[a-z]{2}(?:-[A-Z]{2})?$";

pub fn personal_details() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "application.personal_details",
        vec![
            FieldRule::new("first_name", FieldType::String)
                .required()
                .max_length(100),
            FieldRule::new("last_name", FieldType::String)
                .required()
                .max_length(100),
            FieldRule::new("date_of_birth", FieldType::Date).required(),
            FieldRule::new("email", FieldType::String)
                .required()
                .max_length(254)
                .matching(EMAIL_PATTERN)?,
            FieldRule::new("dial_code", FieldType::String).matching(DIAL_CODE_PATTERN)?,
            FieldRule::new("phone_number", FieldType::String)
                .required()
                .max_length(32)
                .phone_number(),
            FieldRule::new("relationship_to_tenant", FieldType::String)
                .max_length(100)
                .required_for([EntityType::CoSigner, EntityType::Guarantor]),
        ],
    )
}

pub fn residence() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "application.residence",
        vec![
            FieldRule::new("country", FieldType::String)
                .required()
                .matching(COUNTRY_PATTERN)?,
            FieldRule::new("street", FieldType::String)
                .required()
                .max_length(200),
            FieldRule::new("house_number", FieldType::String)
                .required()
                .matching(HOUSE_NUMBER_PATTERN)?,
            FieldRule::new("postal_code", FieldType::String)
                .required()
                .max_length(16)
                .postal_code(),
            FieldRule::new("city", FieldType::String)
                .required()
                .max_length(100),
            FieldRule::new("housing_situation", FieldType::Enum).one_of([
                "renting",
                "owner_occupier",
                "living_with_family",
                "other",
            ]),
            FieldRule::new("current_rent", FieldType::Number)
                .min(0.0)
                .required_if_equals("housing_situation", "renting"),
        ],
    )
}

pub fn employment_step() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "application.employment",
        vec![
            FieldRule::new("employment_status", FieldType::Enum)
                .one_of(EmploymentStatus::ALL.map(EmploymentStatus::label))
                .required(),
            branched(FieldRule::new("net_monthly_income", FieldType::Number).min(0.0)),
            branched(FieldRule::new("employer_name", FieldType::String).max_length(150)),
            branched(FieldRule::new("job_title", FieldType::String).max_length(100)),
            branched(FieldRule::new("employment_since", FieldType::Date)),
            branched(FieldRule::new("company_name", FieldType::String).max_length(150)),
            branched(
                FieldRule::new("company_registration_number", FieldType::String)
                    .matching(r"^[0-9A-Za-z-]{4,20}$")?,
            ),
            branched(FieldRule::new("self_employed_since", FieldType::Date)),
            branched(FieldRule::new("university_name", FieldType::String).max_length(150)),
            branched(FieldRule::new("study_program", FieldType::String).max_length(150)),
        ],
    )
}

/// All wizard steps in page order.
pub fn steps() -> Result<Vec<RuleSet>, RuleSetError> {
    Ok(vec![personal_details()?, residence()?, employment_step()?])
}

/// Context-wide metadata fields, applied after the steps in every mode.
/// Nothing here is required: a draft save carries whatever metadata the
/// client managed to record.
pub fn overlay() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "application.overlay",
        vec![
            FieldRule::new("current_step", FieldType::Enum).one_of([
                "personal_details",
                "residence",
                "employment",
            ]),
            FieldRule::new("locale", FieldType::String).matching(LOCALE_PATTERN)?,
        ],
    )
}

/// Attach the requiredness clauses the employment branch table derives for
/// this field.
fn branched(rule: FieldRule) -> FieldRule {
    employment::requiredness_for(rule.field())
        .into_iter()
        .fold(rule, FieldRule::required_when)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_constructs() {
        let steps = steps().expect("application steps are well-formed");
        assert_eq!(steps.len(), 3);
        overlay().expect("overlay is well-formed");
    }

    #[test]
    fn employment_step_declares_every_branched_field() {
        let step = employment_step().expect("well-formed");
        for field in employment::branched_fields() {
            assert!(
                step.get(field).is_some(),
                "employment step is missing branched field {field}"
            );
        }
    }

    #[test]
    fn branched_fields_carry_derived_clauses() {
        let step = employment_step().expect("well-formed");
        let income = step.get("net_monthly_income").expect("declared");
        assert!(
            !income.requiredness().is_empty(),
            "net_monthly_income should carry employment-derived clauses"
        );
    }
}
