//! Concrete wizard step catalogs, expressed as data on the rule model.

pub mod application;
pub mod property;
