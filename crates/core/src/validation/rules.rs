//! Validation rule and result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a rule violation blocks the write or is informational.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// The check a rule applies to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCheck {
    /// Present, non-null and not blank after trimming.
    Required,
    /// String length, counted in characters.
    MaxLength(usize),
    /// Inclusive integer bounds. Absent values pass.
    IntRange { min: i64, max: i64 },
    /// Absolute `http`/`https` URL. Absent or blank values pass.
    UrlShape,
}

impl RuleCheck {
    /// Stable name reported in [`FieldViolation::rule_type`].
    pub fn name(&self) -> &'static str {
        match self {
            RuleCheck::Required => "required",
            RuleCheck::MaxLength(_) => "max_length",
            RuleCheck::IntRange { .. } => "range",
            RuleCheck::UrlShape => "url",
        }
    }
}

/// A single rule bound to a field of the record under validation.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub field_name: &'static str,
    pub check: RuleCheck,
    pub error_message: String,
    pub severity: ValidationSeverity,
}

impl ValidationRule {
    pub fn error(field_name: &'static str, check: RuleCheck, message: impl Into<String>) -> Self {
        Self {
            field_name,
            check,
            error_message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    pub fn warning(field_name: &'static str, check: RuleCheck, message: impl Into<String>) -> Self {
        Self {
            field_name,
            check,
            error_message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Aggregated result of evaluating all rules against one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
    pub warnings: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Error messages grouped by field name, fields in lexical order.
    pub fn errors_by_field(&self) -> BTreeMap<String, Vec<String>> {
        group_by_field(&self.errors)
    }

    /// Warning messages grouped by field name, fields in lexical order.
    pub fn warnings_by_field(&self) -> BTreeMap<String, Vec<String>> {
        group_by_field(&self.warnings)
    }

    /// One-line rendering of the errors, e.g. `title: Title is required.`
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn group_by_field(violations: &[FieldViolation]) -> BTreeMap<String, Vec<String>> {
    violations.iter().fold(BTreeMap::new(), |mut m, v| {
        m.entry(v.field.clone())
            .or_insert_with(Vec::new)
            .push(v.message.clone());
        m
    })
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
