//! Extraction warnings.
//!
//! The engine never fails on the shape of a page; it collects structured
//! warnings and degrades to "no rows". Fatal conditions (decode, I/O)
//! belong to the caller's error type, not here.

use std::fmt;

/// Machine-readable category for an extraction warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    /// No grid cells (or no rows) could be reconstructed on the page.
    GridNotFound,
    /// The mandatory heading bindings are still missing after discovery.
    HeadersMissing,
    /// A row's application-number text did not validate.
    BadApplicationNumber,
    /// A row bound no address text.
    MissingAddress,
    /// The page declares a rotation the engine does not handle.
    UnsupportedRotation,
}

impl WarningCode {
    /// String tag for this code.
    pub fn as_str(&self) -> &str {
        match self {
            WarningCode::GridNotFound => "GRID_NOT_FOUND",
            WarningCode::HeadersMissing => "HEADERS_MISSING",
            WarningCode::BadApplicationNumber => "BAD_APPLICATION_NUMBER",
            WarningCode::MissingAddress => "MISSING_ADDRESS",
            WarningCode::UnsupportedRotation => "UNSUPPORTED_ROTATION",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while extracting a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    /// Warning category.
    pub code: WarningCode,
    /// Human-readable description with page/row context.
    pub description: String,
}

impl ExtractWarning {
    /// Create a warning.
    pub fn new(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)
    }
}
