//! CLI logic for the Ringtree timeline tool.
//!
//! This module contains the core CLI logic for the Ringtree timeline tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use ringtree::{RingtreeError, TreeBuilder};

/// Run the Ringtree CLI application
///
/// This function reads the input table, lays it out, and writes the
/// resulting SVG to the output file.
///
/// # Errors
///
/// Returns `RingtreeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RingtreeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing record table"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = TreeBuilder::new(app_config);
    let records = builder.parse(&source)?;
    let layout = builder.layout(&records)?;
    if !layout.report().is_clean() {
        warn!(
            diagnostics = layout.report().diagnostics().len();
            "Layout finished with diagnostics"
        );
    }
    let svg = builder.render_svg(&layout)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
