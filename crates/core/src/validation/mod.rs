//! Field validation engine.
//!
//! Provides rule types and a pure-logic evaluator that checks every rule in
//! one pass, separating blocking errors from informational warnings.

pub mod evaluator;
pub mod rules;

pub use evaluator::evaluate_rules;
pub use rules::{FieldViolation, RuleCheck, ValidationResult, ValidationRule, ValidationSeverity};
