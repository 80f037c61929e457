//! Validation engine for extractor configs.
//!
//! The validator runs every registered [`ValidationRule`] against a
//! [`RakeConfig`] and collects all diagnostics into a [`ValidationReport`]. It
//! never stops at the first error, so users see all problems at once.
//!
//! ```rust
//! use rapid_rake::config::{ConfigValidator, RakeConfig};
//!
//! let report = ConfigValidator::with_defaults().validate(&RakeConfig::default());
//! assert!(report.is_valid());
//! ```

use std::collections::HashMap;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::ConfigError;
use super::spec::{RakeConfig, CONFIG_VERSION};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Errors fail [`RakeConfig::check`]; warnings are only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single finding: a [`ConfigError`] with a severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Every diagnostic from one validation run, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Diagnostics with [`Severity::Error`]
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Diagnostics with [`Severity::Warning`]
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// No errors; warnings are acceptable.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A stateless check over a [`RakeConfig`].
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier (e.g. `"version"`).
    fn name(&self) -> &str;

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Validator ──────────────────────────────────────────────────────────────

pub struct ConfigValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ConfigValidator {
    /// An empty validator with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// A validator with the default rule set.
    pub fn with_defaults() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(VersionRule));
        validator.add_rule(Box::new(DelimitersRule));
        validator.add_rule(Box::new(RuntimeLimitsRule));
        validator.add_rule(Box::new(UnknownFieldsRule));
        validator
    }

    /// Append a rule; rules run in insertion order.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule against `config` and collect all diagnostics.
    pub fn validate(&self, config: &RakeConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. version ─────────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        if config.v == CONFIG_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            ConfigError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported config version {}", config.v),
            )
            .with_hint(format!("Set \"v\": {CONFIG_VERSION}")),
        )]
    }
}

// ─── 2. delimiters non-empty and disjoint from punctuation ──────────────────

struct DelimitersRule;

impl ValidationRule for DelimitersRule {
    fn name(&self) -> &str {
        "delimiters"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if config.word_delimiters.is_empty() {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::EmptyDelimiters,
                    "/word_delimiters",
                    "word_delimiters must contain at least one character",
                )
                .with_hint("Remove the field to split on whitespace"),
            ));
        }

        let delimiters: FxHashSet<char> = config.word_delimiters.chars().collect();
        let mut overlap: Vec<char> = config
            .punctuation
            .chars()
            .filter(|c| delimiters.contains(c))
            .collect();
        overlap.sort_unstable();
        overlap.dedup();

        if !overlap.is_empty() {
            // A delimiter never ends a token, so it can never act as punctuation.
            out.push(ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::DelimiterOverlap,
                    "/punctuation",
                    format!("characters {overlap:?} are also word delimiters"),
                )
                .with_hint("Remove them from one of the two sets"),
            ));
        }

        out
    }
}

// ─── 3. runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        let checks: &[(&str, Option<usize>)] = &[
            ("max_chars", config.runtime.max_chars),
            ("max_tokens", config.runtime.max_tokens),
        ];

        checks
            .iter()
            .filter(|(_, value)| *value == Some(0))
            .map(|(field, _)| {
                ValidationDiagnostic::error(
                    ConfigError::new(
                        ErrorCode::InvalidLimit,
                        format!("/runtime/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!(
                        "Set {field} to null to disable the limit, or to a positive value"
                    )),
                )
            })
            .collect()
    }
}

// ─── 4. unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    ConfigError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Self::check_unknowns("", &config.unknown_fields, config.strict);
        out.extend(Self::check_unknowns(
            "/runtime",
            &config.runtime.unknown_fields,
            config.strict,
        ));
        out
    }
}
