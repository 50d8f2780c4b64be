//! The validation engine: composition, requiredness resolution, employment
//! branching, and field evaluation.

pub mod composer;
pub mod employment;
pub mod evaluator;
pub mod requiredness;

#[cfg(test)]
mod tests;

pub use composer::compose;
pub use employment::branch_requirements;
pub use evaluator::{evaluate, FieldError, ValidationResult};
pub use requiredness::{RequirednessSource, RequirednessVerdict};

use crate::rules::{RuleSet, ValidationContext};

/// Stateless facade over compose-then-evaluate.
///
/// Each call is self-contained: the context is a read-only snapshot and the
/// only process-wide state is the static locale tables, so arbitrarily many
/// validations may run concurrently without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate one submission against the given wizard steps. The
    /// submission is evaluated exactly once; the caller decides whether to
    /// persist on valid or surface the field errors on invalid.
    pub fn validate(
        &self,
        steps: &[RuleSet],
        overlay: Option<&RuleSet>,
        ctx: &ValidationContext,
    ) -> ValidationResult {
        let effective = composer::compose(steps, ctx.mode(), overlay);
        evaluator::evaluate(&effective, ctx)
    }
}
