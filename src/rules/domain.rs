//! The declarative field-rule model.
//!
//! A [`FieldRule`] is immutable once constructed: builders consume and return
//! the rule, and every fallible step (pattern compilation) fails at
//! construction time so evaluation can never trip over a broken definition.

use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::RuleSetError;
use crate::rules::context::{EmploymentStatus, EntityType};

/// Kinds of per-field validation failures surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    TypeMismatch,
    OutOfRange,
    PatternMismatch,
    EnumMismatch,
    DependentRequirementUnmet,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::EnumMismatch => "enum_mismatch",
            ErrorKind::DependentRequirementUnmet => "dependent_requirement_unmet",
        }
    }

    /// `DependentRequirementUnmet` specializes `Required`; both mean the
    /// value was missing while the active context demanded it.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            ErrorKind::Required | ErrorKind::DependentRequirementUnmet
        )
    }
}

/// Base type a raw value must coerce to before constraints apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Enum,
}

impl FieldType {
    pub const fn label(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Enum => "enum",
        }
    }
}

/// A regex compiled once at rule construction. Equality compares sources so
/// merged rules can be compared structurally.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    fn compile(field: &str, source: &str) -> Result<Self, RuleSetError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(false)
            .build()
            .map_err(|cause| RuleSetError::InvalidPattern {
                field: field.to_string(),
                pattern: source.to_string(),
                source: cause,
            })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CompiledPattern {}

/// Format constraint attached to a string value. The locale-driven variants
/// defer to the country and phone tables at evaluation time so one rule
/// serves every country the registry knows.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuePattern {
    Custom(CompiledPattern),
    PostalCode,
    PhoneNumber,
}

impl Serialize for ValuePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ValuePattern::Custom(pattern) => {
                let mut state = serializer.serialize_struct("ValuePattern", 2)?;
                state.serialize_field("kind", "custom")?;
                state.serialize_field("pattern", pattern.source())?;
                state.end()
            }
            ValuePattern::PostalCode => {
                let mut state = serializer.serialize_struct("ValuePattern", 1)?;
                state.serialize_field("kind", "postal_code")?;
                state.end()
            }
            ValuePattern::PhoneNumber => {
                let mut state = serializer.serialize_struct("ValuePattern", 1)?;
                state.serialize_field("kind", "phone_number")?;
                state.end()
            }
        }
    }
}

/// Bounds and format checks evaluated once a value is present and typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<ValuePattern>,
}

/// One requiredness clause. A rule may carry several; any satisfied clause
/// makes the field required (OR semantics).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Requiredness {
    Always,
    Never,
    IfEquals {
        field: String,
        value: String,
    },
    IfEntityType {
        entity_types: BTreeSet<EntityType>,
    },
    /// Required while the submission declares one of `statuses` and the
    /// entity is in `entity_types`. An empty entity set means every entity.
    IfEmploymentStatus {
        statuses: BTreeSet<EmploymentStatus>,
        entity_types: BTreeSet<EntityType>,
    },
}

/// Declarative constraint bundle for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    field: String,
    field_type: FieldType,
    constraints: Constraints,
    requiredness: Vec<Requiredness>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    messages: BTreeMap<ErrorKind, String>,
}

impl FieldRule {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            constraints: Constraints::default(),
            requiredness: Vec::new(),
            messages: BTreeMap::new(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn requiredness(&self) -> &[Requiredness] {
        &self.requiredness
    }

    pub fn required(mut self) -> Self {
        self.requiredness.push(Requiredness::Always);
        self
    }

    pub fn never_required(mut self) -> Self {
        self.requiredness.push(Requiredness::Never);
        self
    }

    pub fn required_if_equals(
        mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.requiredness.push(Requiredness::IfEquals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn required_for(
        mut self,
        entity_types: impl IntoIterator<Item = EntityType>,
    ) -> Self {
        self.requiredness.push(Requiredness::IfEntityType {
            entity_types: entity_types.into_iter().collect(),
        });
        self
    }

    pub fn required_when(mut self, clause: Requiredness) -> Self {
        self.requiredness.push(clause);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.constraints.max_length = Some(max_length);
        self
    }

    pub fn exact_length(mut self, exact_length: usize) -> Self {
        self.constraints.exact_length = Some(exact_length);
        self
    }

    pub fn one_of(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.constraints.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a custom regex, compiled now so a typo fails at construction.
    pub fn matching(mut self, source: &str) -> Result<Self, RuleSetError> {
        let compiled = CompiledPattern::compile(&self.field, source)?;
        self.constraints.pattern = Some(ValuePattern::Custom(compiled));
        Ok(self)
    }

    /// Validate against the country postal-code table using the submission's
    /// declared country.
    pub fn postal_code(mut self) -> Self {
        self.constraints.pattern = Some(ValuePattern::PostalCode);
        self
    }

    /// Validate against the numbering plan of the region resolved from the
    /// submission's dial code.
    pub fn phone_number(mut self) -> Self {
        self.constraints.pattern = Some(ValuePattern::PhoneNumber);
        self
    }

    /// Override the message template for one error kind. Templates may use a
    /// `{field}` placeholder.
    pub fn message(mut self, kind: ErrorKind, template: impl Into<String>) -> Self {
        self.messages.insert(kind, template.into());
        self
    }

    pub fn message_for(&self, kind: ErrorKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }

    /// Relaxed copy used by draft composition: same field and base type,
    /// enum domain kept (it is part of the type), everything else dropped.
    pub(crate) fn type_only(&self) -> FieldRule {
        FieldRule {
            field: self.field.clone(),
            field_type: self.field_type,
            constraints: Constraints {
                one_of: if self.field_type == FieldType::Enum {
                    self.constraints.one_of.clone()
                } else {
                    None
                },
                ..Constraints::default()
            },
            requiredness: Vec::new(),
            messages: self.messages.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_fails_at_construction() {
        let result = FieldRule::new("postal_code", FieldType::String).matching("([");
        match result {
            Err(RuleSetError::InvalidPattern { field, .. }) => {
                assert_eq!(field, "postal_code")
            }
            other => panic!("expected invalid pattern error, got {other:?}"),
        }
    }

    #[test]
    fn type_only_strips_everything_but_the_type() {
        let rule = FieldRule::new("rent", FieldType::Number)
            .required()
            .min(0.0)
            .max(100_000.0);

        let relaxed = rule.type_only();

        assert!(relaxed.requiredness().is_empty());
        assert_eq!(relaxed.constraints(), &Constraints::default());
        assert_eq!(relaxed.field_type(), FieldType::Number);
    }

    #[test]
    fn type_only_keeps_enum_domain() {
        let rule = FieldRule::new("interior", FieldType::Enum)
            .one_of(["furnished", "unfurnished"])
            .required();

        let relaxed = rule.type_only();

        assert_eq!(
            relaxed.constraints().one_of.as_deref(),
            Some(&["furnished".to_string(), "unfurnished".to_string()][..])
        );
        assert!(relaxed.requiredness().is_empty());
    }

    #[test]
    fn compiled_patterns_compare_by_source() {
        let a = CompiledPattern::compile("f", r"^\d{4}$").expect("valid");
        let b = CompiledPattern::compile("g", r"^\d{4}$").expect("valid");
        let c = CompiledPattern::compile("f", r"^\d{5}$").expect("valid");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
