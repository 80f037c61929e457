//! Stable error codes for configuration diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable code attached to every [`super::errors::ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `v` is not a supported config version.
    UnsupportedVersion,
    /// `word_delimiters` is empty, so the text would never be split.
    EmptyDelimiters,
    /// A character is both a word delimiter and punctuation.
    DelimiterOverlap,
    /// A runtime limit was set to zero.
    InvalidLimit,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::EmptyDelimiters => "empty_delimiters",
            Self::DelimiterOverlap => "delimiter_overlap",
            Self::InvalidLimit => "invalid_limit",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
