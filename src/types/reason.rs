//! Warning codes for data-authoring gaps
//!
//! None of these stop the quiz. They are logged and returned from
//! validation so authors can fix their data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum WarningCode {
    /// Question points at an axis that does not exist; it scores nothing
    W101_AXIS_OUT_OF_RANGE,
    /// Catalog key is not a sign-key for this axis count; reachable only as fallback
    W102_MALFORMED_SIGN_KEY,
    /// Sign combination with no catalog entry; resolves to the fallback
    W103_MISSING_SIGN_KEY,
    /// No question scores this axis; its gauge always sits at the midpoint
    W104_UNPROBED_AXIS,
    /// Negative weight; scored as authored, max still grows by |w|
    W105_NEGATIVE_WEIGHT,
}

impl WarningCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::W101_AXIS_OUT_OF_RANGE => "W101_AXIS_OUT_OF_RANGE",
            Self::W102_MALFORMED_SIGN_KEY => "W102_MALFORMED_SIGN_KEY",
            Self::W103_MISSING_SIGN_KEY => "W103_MISSING_SIGN_KEY",
            Self::W104_UNPROBED_AXIS => "W104_UNPROBED_AXIS",
            Self::W105_NEGATIVE_WEIGHT => "W105_NEGATIVE_WEIGHT",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::W101_AXIS_OUT_OF_RANGE => "Question axis out of range, ignored when scoring",
            Self::W102_MALFORMED_SIGN_KEY => "Result key is not a valid sign-key",
            Self::W103_MISSING_SIGN_KEY => "No result for sign combination, fallback used",
            Self::W104_UNPROBED_AXIS => "Axis has no questions",
            Self::W105_NEGATIVE_WEIGHT => "Question weight is negative, option pulls reversed",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// A warning with the offending item named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionWarning {
    pub code: WarningCode,
    pub detail: String,
}

impl DefinitionWarning {
    pub fn new(code: WarningCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for DefinitionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.detail)
    }
}
