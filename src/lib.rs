//! Validation rule composition and cross-locale format checking for the
//! rental-application and property-listing wizards.
//!
//! The crate is a pure library: an HTTP layer hands it a flat field map plus
//! a declared context (entity type, save mode, locale and employment
//! selections), and gets back a [`ValidationResult`] mapping fields to
//! errors. It owns the rule model, the step-composition algebra,
//! conditional-requiredness resolution, employment-status branching, and the
//! country-aware postal and phone validators. Routing, persistence, auth,
//! rendering, and message translation live elsewhere.
//!
//! The client form layer reaches the same verdicts by construction: its rule
//! definitions are generated from [`schema::shared_definitions`], not
//! maintained by hand.

pub mod engine;
pub mod error;
pub mod locale;
pub mod rules;
pub mod schema;
pub mod wizard;

pub use engine::{FieldError, ValidationEngine, ValidationResult};
pub use error::RuleSetError;
pub use rules::{
    EmploymentStatus, EntityType, ErrorKind, FieldRule, FieldType, Requiredness, RuleSet,
    SaveMode, ValidationContext,
};
