use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which party a set of personal and financial fields describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Tenant,
    CoSigner,
    Guarantor,
}

impl EntityType {
    pub const fn label(self) -> &'static str {
        match self {
            EntityType::Tenant => "tenant",
            EntityType::CoSigner => "co_signer",
            EntityType::Guarantor => "guarantor",
        }
    }
}

/// Save mode declared by the wizard when it submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    Draft,
    Strict,
}

impl SaveMode {
    /// Lenient parse of the mode declared on the wire. Final-submission
    /// requests historically arrive labelled `precognitive`.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" | "precognitive" | "final" => Self::Strict,
            _ => Self::Draft,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SaveMode::Draft => "draft",
            SaveMode::Strict => "strict",
        }
    }
}

/// Employment status selected on the employment wizard step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Student,
    Retired,
    Unemployed,
    Other,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 6] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Student,
        EmploymentStatus::Retired,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::SelfEmployed => "self_employed",
            EmploymentStatus::Student => "student",
            EmploymentStatus::Retired => "retired",
            EmploymentStatus::Unemployed => "unemployed",
            EmploymentStatus::Other => "other",
        }
    }

    /// Lenient parse: anything unrecognized falls back to [`Other`], the
    /// catch-all status the requirement tables already cover.
    ///
    /// [`Other`]: EmploymentStatus::Other
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "employed" => Self::Employed,
            "self_employed" | "self-employed" => Self::SelfEmployed,
            "student" => Self::Student,
            "retired" => Self::Retired,
            "unemployed" => Self::Unemployed,
            _ => Self::Other,
        }
    }
}

/// Read-only snapshot of one submission: the declared context plus the flat
/// field name → raw value map. Built once per validation call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationContext {
    entity_type: EntityType,
    mode: SaveMode,
    country_code: Option<String>,
    dial_code: Option<String>,
    employment_status: Option<EmploymentStatus>,
    sibling_values: BTreeMap<String, String>,
}

impl ValidationContext {
    pub fn new(entity_type: EntityType, mode: SaveMode) -> Self {
        Self {
            entity_type,
            mode,
            country_code: None,
            dial_code: None,
            employment_status: None,
            sibling_values: BTreeMap::new(),
        }
    }

    /// Build a context from a raw submission, lifting the locale and
    /// employment selections out of their conventional field names.
    pub fn for_submission(
        entity_type: EntityType,
        mode: SaveMode,
        values: BTreeMap<String, String>,
    ) -> Self {
        let country_code = non_empty(values.get("country"));
        let dial_code = non_empty(values.get("dial_code"));
        let employment_status = non_empty(values.get("employment_status"))
            .map(|status| EmploymentStatus::from_label(&status));

        Self {
            entity_type,
            mode,
            country_code,
            dial_code,
            employment_status,
            sibling_values: values,
        }
    }

    pub fn with_values(mut self, values: BTreeMap<String, String>) -> Self {
        self.sibling_values = values;
        self
    }

    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn with_dial_code(mut self, dial_code: impl Into<String>) -> Self {
        self.dial_code = Some(dial_code.into());
        self
    }

    pub fn with_employment_status(mut self, status: EmploymentStatus) -> Self {
        self.employment_status = Some(status);
        self
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn dial_code(&self) -> Option<&str> {
        self.dial_code.as_deref()
    }

    pub fn employment_status(&self) -> Option<EmploymentStatus> {
        self.employment_status
    }

    pub fn sibling_values(&self) -> &BTreeMap<String, String> {
        &self.sibling_values
    }

    /// Trimmed value for a field. Missing and whitespace-only values are both
    /// absent: requiredness decides whether absence is an error.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.sibling_values
            .get(field)
            .map(|raw| raw.trim())
            .filter(|trimmed| !trimmed.is_empty())
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
