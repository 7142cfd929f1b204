//! Pet entity - The validated pet record

use super::enums::Species;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate)]
pub struct Pet {
    /// Sequential id assigned by the store, 0 until the pet is saved
    pub n_identification: i64,
    pub uuid: Uuid,
    pub uuid_guardian: Uuid,
    #[validate(length(min = 1, message = "pet name is empty"))]
    pub name: String,
    pub birth_year: i32,
    #[validate(length(min = 1, message = "pet breed is empty"))]
    pub breed: String,
    pub specie: Species,
}

/// Which rules `Pet::validate` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    /// Every rule
    All,
    /// No rule at all, the result is always empty
    None,
}

impl ValidationScope {
    /// Maps an action label to a scope: the empty label (case-insensitively)
    /// skips validation, anything else runs every rule.
    pub fn from_action(action: &str) -> Self {
        if action.to_lowercase().is_empty() {
            ValidationScope::None
        } else {
            ValidationScope::All
        }
    }
}

/// Failed rules, keyed by field label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.0.insert(label.into(), detail.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, detail) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", label, detail)?;
            first = false;
        }
        Ok(())
    }
}

impl Pet {
    /// Runs the rules selected by `scope` against the current calendar year.
    pub fn validate(&self, scope: ValidationScope) -> FieldErrors {
        self.validate_for_year(scope, Utc::now().year())
    }

    /// String-labelled entry point, see [`ValidationScope::from_action`].
    pub fn validate_action(&self, action: &str) -> FieldErrors {
        self.validate(ValidationScope::from_action(action))
    }

    fn validate_for_year(&self, scope: ValidationScope, current_year: i32) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if scope == ValidationScope::None {
            return errors;
        }

        if let Err(report) = Validate::validate(self) {
            for (field, failures) in report.field_errors() {
                if let Some(failure) = failures.first() {
                    let detail = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    errors.insert(field.to_string(), detail);
                }
            }
        }

        // equal to the current year is fine
        if self.birth_year > current_year {
            errors.insert("birth_year", "year out of range");
        }

        errors
    }
}
