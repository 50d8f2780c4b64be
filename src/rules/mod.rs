//! Declarative rule model shared by the server pipeline and the exported
//! client schema.

pub mod context;
pub mod domain;
pub mod ruleset;

pub use context::{EmploymentStatus, EntityType, SaveMode, ValidationContext};
pub use domain::{
    CompiledPattern, Constraints, ErrorKind, FieldRule, FieldType, Requiredness, ValuePattern,
};
pub use ruleset::RuleSet;
