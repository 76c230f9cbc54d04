//! Ringtree - radial layout of skill and timeline trees.
//!
//! Reads a table of records with fuzzy time bounds and prerequisites, lays
//! them out on concentric lanes around a center, and renders the result as
//! SVG.

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use ringtree_core::{color, geometry, identifier, record, scale, segment};

pub use error::{LayoutError, RingtreeError};
pub use layout::Layout;

use log::{debug, info, trace};

use ringtree_core::record::Record;

use config::AppConfig;
use export::Exporter;

/// Builder for parsing, laying out, and rendering Ringtree trees.
///
/// # Examples
///
/// ```rust,no_run
/// use ringtree::{TreeBuilder, config::AppConfig};
///
/// let source = "id,name,type,start,end\nrust,Rust,lang,0,12\n";
///
/// let builder = TreeBuilder::new(AppConfig::default());
///
/// let records = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&records).expect("Failed to lay out");
/// let svg = builder.render_svg(&layout).expect("Failed to render");
///
/// // Or use default config
/// let builder = TreeBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    config: AppConfig,
}

impl TreeBuilder {
    /// Create a new tree builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a record table into records.
    ///
    /// # Errors
    ///
    /// Returns [`RingtreeError::Parse`] carrying every diagnostic found in
    /// `source`, together with the source text.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ringtree::TreeBuilder;
    ///
    /// let records = TreeBuilder::default()
    ///     .parse("id,name,type,start\na,A,t,0\n")
    ///     .expect("Failed to parse table");
    /// assert_eq!(records.len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Vec<Record>, RingtreeError> {
        info!("Parsing record table");

        let records = ringtree_parser::parse(source)
            .map_err(|err| RingtreeError::new_parse_error(err, source))?;

        debug!(records = records.len(); "Table parsed successfully");
        trace!(records:?; "Parsed records");

        Ok(records)
    }

    /// Lay out `records` with the configured geometry.
    ///
    /// Unresolved prerequisites and entities without a free lane do not fail
    /// the pass; they are listed in [`Layout::report`].
    ///
    /// # Errors
    ///
    /// Returns [`RingtreeError::Layout`] for an invalid configuration, a
    /// duplicate id, or unusable time bounds.
    pub fn layout(&self, records: &[Record]) -> Result<Layout, RingtreeError> {
        info!(records = records.len(); "Computing layout");

        let layout = layout::Engine::new(self.config.layout()).run(records)?;

        info!(
            entities = layout.entities().len(),
            links = layout.links().len(),
            unplaced = layout.report().unplaced().count();
            "Layout calculated"
        );
        Ok(layout)
    }

    /// Render a layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`RingtreeError::Export`] if a style color is invalid or
    /// rendering fails.
    pub fn render_svg(&self, layout: &Layout) -> Result<String, RingtreeError> {
        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_layout_config(self.config.layout())
            .build()?;

        let mut buffer = Vec::new();
        svg_exporter.export_layout(layout, &mut buffer)?;

        let svg_string = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(err.to_string()))?;

        info!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }
}
