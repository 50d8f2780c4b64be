//! Construction-time failures for rule definitions.
//!
//! User input never surfaces here: malformed submissions become
//! `ValidationResult` entries. These variants exist to reject broken rule
//! definitions before any submission can reach them.

/// Raised while building a [`FieldRule`](crate::rules::FieldRule) or
/// [`RuleSet`](crate::rules::RuleSet).
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    #[error("rule set `{rule_set}` declares field `{field}` more than once")]
    DuplicateField { rule_set: String, field: String },
    #[error(
        "field `{field}` in rule set `{rule_set}` depends on `{target}`, which the set does not define"
    )]
    UnknownDependentField {
        rule_set: String,
        field: String,
        target: String,
    },
    #[error("field `{field}` declares an invalid pattern `{pattern}`")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
