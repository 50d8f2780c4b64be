use std::collections::BTreeMap;

use crate::rules::{EntityType, FieldRule, FieldType, RuleSet, SaveMode, ValidationContext};

pub(super) fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

pub(super) fn strict_ctx(entity: EntityType, pairs: &[(&str, &str)]) -> ValidationContext {
    ValidationContext::for_submission(entity, SaveMode::Strict, values(pairs))
}

pub(super) fn draft_ctx(entity: EntityType, pairs: &[(&str, &str)]) -> ValidationContext {
    ValidationContext::for_submission(entity, SaveMode::Draft, values(pairs))
}

/// A small contact step exercising every base type.
pub(super) fn contact_step() -> RuleSet {
    RuleSet::new(
        "test.contact",
        vec![
            FieldRule::new("email", FieldType::String)
                .required()
                .max_length(60)
                .matching(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
                .expect("valid pattern"),
            FieldRule::new("age", FieldType::Number).min(18.0).max(120.0),
            FieldRule::new("newsletter", FieldType::Boolean),
            FieldRule::new("move_in", FieldType::Date),
            FieldRule::new("pet_policy", FieldType::Enum).one_of(["allowed", "forbidden"]),
        ],
    )
    .expect("contact step is well-formed")
}

/// A residence step with a sibling-dependent rent requirement.
pub(super) fn residence_step() -> RuleSet {
    RuleSet::new(
        "test.residence",
        vec![
            FieldRule::new("housing_situation", FieldType::Enum)
                .one_of(["renting", "owner_occupier"]),
            FieldRule::new("current_rent", FieldType::Number)
                .min(0.0)
                .required_if_equals("housing_situation", "renting"),
            FieldRule::new("postal_code", FieldType::String)
                .required()
                .max_length(10)
                .postal_code(),
        ],
    )
    .expect("residence step is well-formed")
}
