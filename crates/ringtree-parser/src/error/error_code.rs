//! Error codes for the Ringtree record reader.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Table syntax errors
//! - `E1xx` - Table shape errors
//! - `E2xx` - Record value errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Table Syntax Errors (E0xx)
    // =========================================================================
    /// Unterminated quoted field.
    ///
    /// A field was opened with a quote but never closed.
    E001,

    /// Unexpected character.
    ///
    /// Text followed a closing quote before the next separator.
    E002,

    // =========================================================================
    // Table Shape Errors (E1xx)
    // =========================================================================
    /// Missing required column.
    ///
    /// The header row does not name one of `id`, `name`, `type` or `start`.
    E100,

    /// Row length mismatch.
    ///
    /// A data row has a different number of cells than the header row.
    E101,

    /// Duplicate column.
    ///
    /// The header row names the same column twice.
    E102,

    // =========================================================================
    // Record Value Errors (E2xx)
    // =========================================================================
    /// Missing required value.
    ///
    /// A required cell (`id`, `type` or `start`) is empty.
    E200,

    /// Invalid number.
    ///
    /// A time cell does not hold a finite number.
    E201,

    /// Duplicate id.
    ///
    /// Two rows share the same id.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated quoted field",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E100 => "missing required column",
            ErrorCode::E101 => "row length mismatch",
            ErrorCode::E102 => "duplicate column",
            ErrorCode::E200 => "missing required value",
            ErrorCode::E201 => "invalid number",
            ErrorCode::E202 => "duplicate id",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
