//! Error and diagnostic system for the Ringtree record reader.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Every problem found in a table is collected and
//! returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use ringtree_parser::error::{Diagnostic, ErrorCode};
//! # use ringtree_parser::Span;
//!
//! let span = Span::new(100..120);
//! let original_span = Span::new(50..70);
//!
//! let diag = Diagnostic::error("id `borrowck` is used by more than one row")
//!     .with_code(ErrorCode::E202)
//!     .with_label(span, "duplicate id")
//!     .with_secondary_label(original_span, "first used here")
//!     .with_help("give every row a unique id");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
