//! Export functionality for Ringtree layouts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting laid-out trees into output formats. It is the final stage in
//! the processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Record Table
//!     ↓ parse
//! Records
//!     ↓ layout
//! Layout (angles, lanes, segments)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::io;

use thiserror::Error;

use crate::layout::Layout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Writes `layout` to `out` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, layout: &Layout, out: &mut dyn io::Write) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`RingtreeError::Export`](crate::RingtreeError::Export) at
/// the crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    #[error("Render error: {0}")]
    Render(String),
    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
