//! Conditional-requiredness resolution.
//!
//! A rule may carry several requiredness clauses; any satisfied clause makes
//! the field required. The verdict keeps track of which kind of clause fired
//! so the evaluator can report a sibling-dependent requirement with its own
//! error kind.

use crate::rules::domain::{FieldRule, Requiredness};
use crate::rules::ValidationContext;

/// Outcome of resolving a rule's requiredness against one context.
#[derive(Debug, Clone, PartialEq)]
pub enum RequirednessVerdict {
    NotRequired,
    Required(RequirednessSource),
}

/// Which clause made the field required.
#[derive(Debug, Clone, PartialEq)]
pub enum RequirednessSource {
    /// `Always`, `IfEntityType`, or `IfEmploymentStatus`: requiredness follows
    /// from the declared context, not from another answer.
    Declared,
    /// `IfEquals`: requiredness follows from a sibling field's value.
    Dependent { field: String, value: String },
}

/// OR-evaluate every clause on `rule`. A satisfied context-declared clause
/// wins over a satisfied sibling-dependent one regardless of declaration
/// order, keeping the reported error kind deterministic.
pub fn resolve(rule: &FieldRule, ctx: &ValidationContext) -> RequirednessVerdict {
    let mut dependent: Option<RequirednessSource> = None;

    for clause in rule.requiredness() {
        match clause {
            Requiredness::Always => return RequirednessVerdict::Required(RequirednessSource::Declared),
            Requiredness::Never => {}
            Requiredness::IfEquals { field, value } => {
                // An absent sibling is simply not-equal, never an error.
                if ctx.value(field) == Some(value.as_str()) && dependent.is_none() {
                    dependent = Some(RequirednessSource::Dependent {
                        field: field.clone(),
                        value: value.clone(),
                    });
                }
            }
            Requiredness::IfEntityType { entity_types } => {
                if entity_types.contains(&ctx.entity_type()) {
                    return RequirednessVerdict::Required(RequirednessSource::Declared);
                }
            }
            Requiredness::IfEmploymentStatus {
                statuses,
                entity_types,
            } => {
                let status_matches = ctx
                    .employment_status()
                    .map(|status| statuses.contains(&status))
                    .unwrap_or(false);
                let entity_matches =
                    entity_types.is_empty() || entity_types.contains(&ctx.entity_type());
                if status_matches && entity_matches {
                    return RequirednessVerdict::Required(RequirednessSource::Declared);
                }
            }
        }
    }

    match dependent {
        Some(source) => RequirednessVerdict::Required(source),
        None => RequirednessVerdict::NotRequired,
    }
}
