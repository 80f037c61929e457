//! Extractor configuration and its validation.

pub mod error_code;
pub mod errors;
pub mod spec;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::ConfigError;
pub use spec::{RakeConfig, RuntimeLimits, CONFIG_VERSION, DEFAULT_MAX_CHARS};
pub use validation::{ConfigValidator, Severity, ValidationDiagnostic, ValidationReport, ValidationRule};
