use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RuleSetError;
use crate::rules::domain::{FieldRule, Requiredness};

/// Named bundle of field rules, one rule per field.
///
/// Construction is the fail-fast boundary: duplicate fields and dependent
/// clauses pointing at fields the set does not define are rejected here so a
/// production validation call can never crash on a broken definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSet {
    name: String,
    rules: BTreeMap<String, FieldRule>,
}

impl RuleSet {
    pub fn new(
        name: impl Into<String>,
        rules: Vec<FieldRule>,
    ) -> Result<Self, RuleSetError> {
        let name = name.into();
        let mut indexed: BTreeMap<String, FieldRule> = BTreeMap::new();

        for rule in rules {
            if indexed.contains_key(rule.field()) {
                return Err(RuleSetError::DuplicateField {
                    rule_set: name,
                    field: rule.field().to_string(),
                });
            }
            indexed.insert(rule.field().to_string(), rule);
        }

        for rule in indexed.values() {
            for clause in rule.requiredness() {
                if let Requiredness::IfEquals { field: target, .. } = clause {
                    if !indexed.contains_key(target) {
                        return Err(RuleSetError::UnknownDependentField {
                            rule_set: name,
                            field: rule.field().to_string(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            name,
            rules: indexed,
        })
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Pure merge with last-writer-wins override: when both sets define a
    /// field, `other`'s rule replaces this set's rule entirely. Constraints
    /// are never blended between operands, which keeps a composed rule
    /// internally consistent.
    pub fn merge(&self, other: &RuleSet) -> RuleSet {
        let mut rules = self.rules.clone();
        for (field, rule) in &other.rules {
            rules.insert(field.clone(), rule.clone());
        }

        RuleSet {
            name: format!("{}+{}", self.name, other.name),
            rules,
        }
    }

    /// Relaxed copy of this set for draft saves: every rule reduced to its
    /// base type, nothing required.
    pub(crate) fn type_only(&self, name: impl Into<String>) -> RuleSet {
        RuleSet {
            name: name.into(),
            rules: self
                .rules
                .iter()
                .map(|(field, rule)| (field.clone(), rule.type_only()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::domain::FieldType;

    fn rule(field: &str) -> FieldRule {
        FieldRule::new(field, FieldType::String)
    }

    #[test]
    fn rejects_duplicate_fields() {
        let result = RuleSet::new("step", vec![rule("city"), rule("city")]);
        match result {
            Err(RuleSetError::DuplicateField { rule_set, field }) => {
                assert_eq!(rule_set, "step");
                assert_eq!(field, "city");
            }
            other => panic!("expected duplicate field error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_dependent_clause_on_unknown_field() {
        let dependent = rule("current_rent").required_if_equals("housing_situation", "renting");
        let result = RuleSet::new("residence", vec![dependent]);
        match result {
            Err(RuleSetError::UnknownDependentField { field, target, .. }) => {
                assert_eq!(field, "current_rent");
                assert_eq!(target, "housing_situation");
            }
            other => panic!("expected unknown dependent field error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_dependent_clause_on_declared_field() {
        let set = RuleSet::new(
            "residence",
            vec![
                rule("housing_situation"),
                rule("current_rent").required_if_equals("housing_situation", "renting"),
            ],
        );
        assert!(set.is_ok());
    }

    #[test]
    fn merge_right_hand_rule_wins_entirely() {
        let left = RuleSet::new(
            "a",
            vec![rule("email").required().max_length(50), rule("city")],
        )
        .expect("valid set");
        let right_rule = rule("email").max_length(120);
        let right = RuleSet::new("b", vec![right_rule.clone()]).expect("valid set");

        let merged = left.merge(&right);

        assert_eq!(merged.get("email"), Some(&right_rule));
        assert!(merged
            .get("email")
            .map(|r| r.requiredness().is_empty())
            .unwrap_or(false));
        assert!(merged.get("city").is_some());
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_does_not_mutate_operands() {
        let left = RuleSet::new("a", vec![rule("email").required()]).expect("valid set");
        let right = RuleSet::new("b", vec![rule("email")]).expect("valid set");
        let before = left.clone();

        let _ = left.merge(&right);

        assert_eq!(left, before);
    }
}
