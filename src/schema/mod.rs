//! Shared-definition export.
//!
//! The client form layer must reach the exact same verdict as the server
//! pipeline. Rather than hand-maintaining two rule copies, the client bundle
//! is generated from this export: wizard rule sets, postal patterns, and the
//! dial-code table, serialized from the single definitions the server
//! validates with.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RuleSetError;
use crate::locale::{phone, postal};
use crate::rules::RuleSet;
use crate::wizard::{application, property};

/// Everything the client form layer mirrors.
#[derive(Debug, Serialize)]
pub struct SharedDefinitions {
    pub application_steps: Vec<RuleSet>,
    pub application_overlay: RuleSet,
    pub property_steps: Vec<RuleSet>,
    pub property_overlay: RuleSet,
    /// Country code → postal pattern source, as used by the registry.
    pub postal_patterns: BTreeMap<String, String>,
    /// Calling code → regions, primary region first.
    pub dial_codes: BTreeMap<String, Vec<String>>,
}

pub fn shared_definitions() -> Result<SharedDefinitions, RuleSetError> {
    Ok(SharedDefinitions {
        application_steps: application::steps()?,
        application_overlay: application::overlay()?,
        property_steps: property::steps()?,
        property_overlay: property::overlay()?,
        postal_patterns: postal::pattern_sources()
            .map(|(country, source)| (country.to_string(), source.to_string()))
            .collect(),
        dial_codes: phone::dial_code_table()
            .map(|(code, regions)| {
                (
                    code.to_string(),
                    regions.iter().map(|region| region.to_string()).collect(),
                )
            })
            .collect(),
    })
}

/// JSON document consumed by the client build. Serialization of the static
/// model cannot fail in practice; the error is surfaced for completeness.
pub fn to_json() -> Result<String, ExportError> {
    let definitions = shared_definitions()?;
    Ok(serde_json::to_string_pretty(&definitions)?)
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("rule definitions failed to construct")]
    Definitions(#[from] RuleSetError),
    #[error("rule definitions failed to serialize")]
    Serialize(#[from] serde_json::Error),
}
