//! Step rule sets for the property-listing wizard.

use crate::error::RuleSetError;
use crate::rules::{FieldRule, FieldType, RuleSet};

const HOUSE_NUMBER_PATTERN: &str = r"^\d+\s?[A-Za-z]?$";
const COUNTRY_PATTERN: &str = r"^[A-Za-z]{2}$";
const REFERENCE_PATTERN: &str = r"^[A-Z0-9-]{1,24}$";

pub fn listing_details() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "property.listing_details",
        vec![
            FieldRule::new("title", FieldType::String)
                .required()
                .max_length(200),
            FieldRule::new("description", FieldType::String).max_length(5000),
            FieldRule::new("rent", FieldType::Number).required().min(0.0),
            FieldRule::new("service_costs", FieldType::Number).min(0.0),
            FieldRule::new("deposit", FieldType::Number).min(0.0),
            FieldRule::new("surface_area", FieldType::Number).min(1.0),
            FieldRule::new("rooms", FieldType::Number).min(1.0).max(50.0),
            FieldRule::new("property_type", FieldType::Enum)
                .one_of(["apartment", "house", "studio", "room"])
                .required(),
            FieldRule::new("interior", FieldType::Enum).one_of([
                "furnished",
                "upholstered",
                "bare",
            ]),
            FieldRule::new("available_from", FieldType::Date).required(),
        ],
    )
}

pub fn address() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "property.address",
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
        ],
    )
}

pub fn publication() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "property.publication",
        vec![
            FieldRule::new("minimum_rental_months", FieldType::Number)
                .min(1.0)
                .max(120.0),
            FieldRule::new("maximum_rental_months", FieldType::Number)
                .min(1.0)
                .max(120.0),
            FieldRule::new("income_requirement_multiplier", FieldType::Number)
                .min(0.0)
                .max(10.0),
            FieldRule::new("contact_phone", FieldType::String).phone_number(),
        ],
    )
}

pub fn steps() -> Result<Vec<RuleSet>, RuleSetError> {
    Ok(vec![listing_details()?, address()?, publication()?])
}

pub fn overlay() -> Result<RuleSet, RuleSetError> {
    RuleSet::new(
        "property.overlay",
        vec![
            FieldRule::new("current_step", FieldType::Enum).one_of([
                "listing_details",
                "address",
                "publication",
            ]),
            FieldRule::new("reference", FieldType::String).matching(REFERENCE_PATTERN)?,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_constructs() {
        let steps = steps().expect("property steps are well-formed");
        assert_eq!(steps.len(), 3);
        overlay().expect("overlay is well-formed");
    }
}
