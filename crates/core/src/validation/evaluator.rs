//! Rule evaluator. Pure logic, no database access.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::rules::{FieldViolation, RuleCheck, ValidationResult, ValidationRule, ValidationSeverity};

/// Scheme, a non-empty host, then anything without whitespace.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^\s/?#]+(?:[/?#]\S*)?$").expect("URL pattern must compile")
});

/// Evaluate all rules against a single data record.
///
/// Every rule runs; a failing rule never short-circuits the rest, so the
/// result lists every violated field at once.
pub fn evaluate_rules(
    rules: &[ValidationRule],
    data: &serde_json::Map<String, Value>,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for rule in rules {
        if let Some(violation) = evaluate_single_rule(rule, data) {
            match rule.severity {
                ValidationSeverity::Error => errors.push(violation),
                ValidationSeverity::Warning => warnings.push(violation),
            }
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn evaluate_single_rule(
    rule: &ValidationRule,
    data: &serde_json::Map<String, Value>,
) -> Option<FieldViolation> {
    let field_value = data.get(rule.field_name);

    match &rule.check {
        RuleCheck::Required => evaluate_required(rule, field_value),
        RuleCheck::MaxLength(max) => evaluate_max_length(rule, field_value, *max),
        RuleCheck::IntRange { min, max } => evaluate_int_range(rule, field_value, *min, *max),
        RuleCheck::UrlShape => evaluate_url_shape(rule, field_value),
    }
}

fn violation(rule: &ValidationRule, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rule.field_name.to_string(),
        rule_type: rule.check.name().to_string(),
        message: rule.error_message.clone(),
        value: value.cloned(),
    }
}

fn evaluate_required(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(rule, value)),
        Some(Value::String(s)) if s.trim().is_empty() => Some(violation(rule, value)),
        _ => None,
    }
}

fn evaluate_max_length(
    rule: &ValidationRule,
    value: Option<&Value>,
    max: usize,
) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    if s.chars().count() > max {
        Some(violation(rule, value))
    } else {
        None
    }
}

fn evaluate_int_range(
    rule: &ValidationRule,
    value: Option<&Value>,
    min: i64,
    max: i64,
) -> Option<FieldViolation> {
    let val = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    match val.as_i64() {
        Some(n) if (min..=max).contains(&n) => None,
        _ => Some(violation(rule, Some(val))),
    }
}

fn evaluate_url_shape(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?.trim();
    if s.is_empty() || URL_PATTERN.is_match(s) {
        None
    } else {
        Some(violation(rule, value))
    }
}
