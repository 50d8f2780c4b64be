//! Field-by-field evaluation of a composed rule set.
//!
//! User input never raises: every failure becomes a [`ValidationResult`]
//! entry. Per field the policy is first-failure: a type mismatch suppresses
//! the later checks, while genuinely independent violations (a value both too
//! long and wrongly formatted) may co-report.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::requiredness::{self, RequirednessSource, RequirednessVerdict};
use crate::locale::{phone, postal, DEFAULT_REGION};
use crate::rules::domain::{ErrorKind, FieldRule, FieldType, ValuePattern};
use crate::rules::{RuleSet, ValidationContext};

/// One per-field failure, kind plus a rendered human-readable message.
/// Message templates come from the rule (or the built-in defaults); their
/// translation happens outside this engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Verdict for one submission. An empty error map means valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    field_errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn field_errors(&self) -> &BTreeMap<String, Vec<FieldError>> {
        &self.field_errors
    }

    pub fn errors_for(&self, field: &str) -> &[FieldError] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.values().map(Vec::len).sum()
    }

    fn push(&mut self, field: &str, error: FieldError) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(error);
    }
}

/// Evaluate every rule in `rules` against the submission snapshot in `ctx`.
pub fn evaluate(rules: &RuleSet, ctx: &ValidationContext) -> ValidationResult {
    let mut result = ValidationResult::default();

    for rule in rules.rules() {
        match ctx.value(rule.field()) {
            None => check_missing(rule, ctx, &mut result),
            Some(raw) => check_present(rule, raw, ctx, &mut result),
        }
    }

    tracing::debug!(
        rule_set = rules.name(),
        entity_type = ctx.entity_type().label(),
        mode = ctx.mode().label(),
        errors = result.error_count(),
        "evaluated submission"
    );

    result
}

fn check_missing(rule: &FieldRule, ctx: &ValidationContext, result: &mut ValidationResult) {
    // An empty value on a non-required field is always valid.
    let RequirednessVerdict::Required(source) = requiredness::resolve(rule, ctx) else {
        return;
    };

    let error = match source {
        RequirednessSource::Declared => field_error(
            rule,
            ErrorKind::Required,
            format!("{} is required", rule.field()),
        ),
        RequirednessSource::Dependent { field, value } => field_error(
            rule,
            ErrorKind::DependentRequirementUnmet,
            format!("{} is required when {field} is {value}", rule.field()),
        ),
    };
    result.push(rule.field(), error);
}

fn check_present(
    rule: &FieldRule,
    raw: &str,
    ctx: &ValidationContext,
    result: &mut ValidationResult,
) {
    let parsed_number = match check_type(rule, raw) {
        Ok(parsed) => parsed,
        Err(error) => {
            // A value of the wrong type makes the remaining checks noise.
            result.push(rule.field(), error);
            return;
        }
    };

    if let Some(error) = check_range(rule, raw, parsed_number) {
        result.push(rule.field(), error);
    }
    if rule.field_type() != FieldType::Enum {
        if let Some(error) = check_membership(rule, raw) {
            result.push(rule.field(), error);
        }
    }
    if let Some(error) = check_pattern(rule, raw, ctx) {
        result.push(rule.field(), error);
    }
}

/// Coerce `raw` to the rule's base type. Returns the parsed number for
/// numeric fields so range checks need not reparse.
fn check_type(rule: &FieldRule, raw: &str) -> Result<Option<f64>, FieldError> {
    match rule.field_type() {
        FieldType::String => Ok(None),
        FieldType::Number => match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(field_error(
                rule,
                ErrorKind::TypeMismatch,
                format!("{} must be a number", rule.field()),
            )),
        },
        FieldType::Boolean => {
            let lowered = raw.to_ascii_lowercase();
            if matches!(lowered.as_str(), "true" | "false" | "1" | "0") {
                Ok(None)
            } else {
                Err(field_error(
                    rule,
                    ErrorKind::TypeMismatch,
                    format!("{} must be a boolean", rule.field()),
                ))
            }
        }
        FieldType::Date => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(_) => Ok(None),
            Err(_) => Err(field_error(
                rule,
                ErrorKind::TypeMismatch,
                format!("{} must be a date in YYYY-MM-DD format", rule.field()),
            )),
        },
        FieldType::Enum => match &rule.constraints().one_of {
            Some(values) if !values.iter().any(|v| v == raw) => Err(field_error(
                rule,
                ErrorKind::EnumMismatch,
                format!("{} must be one of: {}", rule.field(), values.join(", ")),
            )),
            _ => Ok(None),
        },
    }
}

/// Numeric bounds for numbers, character-length bounds otherwise. At most
/// one range error per field: the first violated bound explains the failure.
fn check_range(rule: &FieldRule, raw: &str, parsed: Option<f64>) -> Option<FieldError> {
    let constraints = rule.constraints();

    if let Some(value) = parsed {
        if let Some(min) = constraints.min {
            if value < min {
                return Some(field_error(
                    rule,
                    ErrorKind::OutOfRange,
                    format!("{} must be at least {min}", rule.field()),
                ));
            }
        }
        if let Some(max) = constraints.max {
            if value > max {
                return Some(field_error(
                    rule,
                    ErrorKind::OutOfRange,
                    format!("{} must be at most {max}", rule.field()),
                ));
            }
        }
        return None;
    }

    let length = raw.chars().count();
    if let Some(exact) = constraints.exact_length {
        if length != exact {
            return Some(field_error(
                rule,
                ErrorKind::OutOfRange,
                format!("{} must be exactly {exact} characters", rule.field()),
            ));
        }
    }
    if let Some(max) = constraints.max_length {
        if length > max {
            return Some(field_error(
                rule,
                ErrorKind::OutOfRange,
                format!("{} must be at most {max} characters", rule.field()),
            ));
        }
    }
    None
}

fn check_membership(rule: &FieldRule, raw: &str) -> Option<FieldError> {
    let values = rule.constraints().one_of.as_ref()?;
    if values.iter().any(|v| v == raw) {
        return None;
    }
    Some(field_error(
        rule,
        ErrorKind::EnumMismatch,
        format!("{} must be one of: {}", rule.field(), values.join(", ")),
    ))
}

fn check_pattern(rule: &FieldRule, raw: &str, ctx: &ValidationContext) -> Option<FieldError> {
    let pattern = rule.constraints().pattern.as_ref()?;
    let ok = match pattern {
        ValuePattern::Custom(compiled) => compiled.is_match(raw),
        ValuePattern::PostalCode => postal::matches(ctx.country_code().unwrap_or(""), raw),
        ValuePattern::PhoneNumber => {
            let region =
                phone::resolve_region(ctx.dial_code(), ctx.country_code().unwrap_or(DEFAULT_REGION));
            let candidate = if raw.starts_with('+') || ctx.dial_code().is_none() {
                raw.to_string()
            } else {
                format!("{} {raw}", ctx.dial_code().unwrap_or_default())
            };
            phone::is_valid(&candidate, &region)
        }
    };
    if ok {
        return None;
    }

    let message = match pattern {
        ValuePattern::PostalCode => match ctx.country_code() {
            Some(country) => format!(
                "{} is not a valid postal code for {country}",
                rule.field()
            ),
            None => format!("{} is not a valid postal code", rule.field()),
        },
        ValuePattern::PhoneNumber => format!("{} is not a valid phone number", rule.field()),
        ValuePattern::Custom(_) => format!("{} has an invalid format", rule.field()),
    };
    Some(field_error(rule, ErrorKind::PatternMismatch, message))
}

/// Build an error, preferring the rule's own message template when one is
/// declared for the kind. Templates may reference the field via `{field}`.
fn field_error(rule: &FieldRule, kind: ErrorKind, default_message: String) -> FieldError {
    let message = match rule.message_for(kind) {
        Some(template) => template.replace("{field}", rule.field()),
        None => default_message,
    };
    FieldError { kind, message }
}
