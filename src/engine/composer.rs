//! Step rule-set composition.
//!
//! One submission's lifecycle is Received → Composed → Evaluated →
//! {Valid, Invalid}: composition selects and merges the relevant step rule
//! sets for the declared save mode, producing the single effective rule set
//! the evaluator walks. Output is a pure function of its inputs.

use crate::rules::{RuleSet, SaveMode};

/// Merge step rule sets into one effective set for `mode`.
///
/// Strict mode folds the steps left-to-right with [`RuleSet::merge`], so the
/// right-most step wins per-field overrides. Draft mode keeps the same field
/// union but reduces every rule to its base type with nothing required: a
/// draft save preserves partial work and must never fail because the wizard
/// is incomplete. The overlay, when given, applies last in both modes; it
/// carries context-wide fields (step-tracking metadata and the like) that are
/// neither draft- nor strict-specific.
pub fn compose(steps: &[RuleSet], mode: SaveMode, overlay: Option<&RuleSet>) -> RuleSet {
    let folded = steps
        .iter()
        .fold(RuleSet::empty("composed"), |acc, step| acc.merge(step));

    let base = match mode {
        SaveMode::Strict => folded,
        SaveMode::Draft => folded.type_only("draft"),
    };

    let effective = match overlay {
        Some(overlay) => base.merge(overlay),
        None => base,
    };

    tracing::debug!(
        mode = mode.label(),
        steps = steps.len(),
        fields = effective.len(),
        "composed effective rule set"
    );

    effective
}
