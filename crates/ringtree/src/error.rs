//! Error types for Ringtree operations.
//!
//! This module provides the main error type [`RingtreeError`] which wraps
//! the failures of every stage, and [`LayoutError`] for the layout pass.

use std::io;

use thiserror::Error;

use ringtree_core::identifier::Id;
use ringtree_parser::error::ParseError;

/// The main error type for Ringtree operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the diagnostics so
/// callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum RingtreeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl RingtreeError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

/// A failure that aborts a layout pass.
///
/// Entity-level variants name the offending entity; no partial layout is
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("entity `{entity}` has `{field}` {value} before {previous}")]
    InvertedBounds {
        entity: Id,
        field: &'static str,
        value: f32,
        previous: f32,
    },

    #[error("entity `{entity}` has a non-finite `{field}`")]
    NonFiniteBound { entity: Id, field: &'static str },

    #[error("entity `{entity}` is defined more than once")]
    DuplicateId { entity: Id },

    #[error("invalid layout configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl LayoutError {
    /// The entity the error refers to, if any.
    pub fn entity(&self) -> Option<Id> {
        match self {
            Self::InvertedBounds { entity, .. }
            | Self::NonFiniteBound { entity, .. }
            | Self::DuplicateId { entity } => Some(*entity),
            Self::InvalidConfig { .. } => None,
        }
    }
}
