//! SVG rendering of radial layouts.
//!
//! The drawing is centered on the origin of a main group. Each entity is a
//! group rotated by its angle, with its bars drawn along the rotated +Y axis,
//! so `rotate(angle)` alone places it on the circle.

mod entity;
mod grid;
mod link;

use std::io;

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use ringtree_core::color::Color;

use crate::{
    config::{GridConfig, LayoutConfig, StyleConfig},
    export::{self, Exporter},
    layout::Layout,
};

/// Margin around the outermost drawn radius.
const MARGIN: f32 = 50.0;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    layout_config: Option<&'a LayoutConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Geometry the layout was computed with; bar widths follow its slot width.
    pub fn with_layout_config(mut self, config: &'a LayoutConfig) -> Self {
        self.layout_config = Some(config);
        self
    }

    /// Resolves colors and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);
        let default_layout = LayoutConfig::default();
        let layout_config = self.layout_config.unwrap_or(&default_layout);

        Ok(Svg {
            background: style.background_color().map_err(export::Error::Render)?,
            bar_color: style.bar_color().map_err(export::Error::Render)?,
            fuzzy_color: style.fuzzy_color().map_err(export::Error::Render)?,
            link_color: style.link_color().map_err(export::Error::Render)?,
            grid_color: style.grid_color().map_err(export::Error::Render)?,
            text_color: style.text_color().map_err(export::Error::Render)?,
            text_size: style.text_size(),
            grid: style.grid().clone(),
            slot_width: layout_config.slot_width(),
        })
    }
}

/// SVG exporter with resolved style.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    bar_color: Color,
    fuzzy_color: Color,
    link_color: Color,
    grid_color: Color,
    text_color: Color,
    text_size: f32,
    grid: GridConfig,
    slot_width: f32,
}

impl Svg {
    /// Renders `layout` into a standalone SVG document.
    pub fn render_layout(&self, layout: &Layout) -> Document {
        let radius = Self::drawn_radius(layout);
        let size = 2.0 * (radius + MARGIN);
        debug!(radius = radius, size = size; "SVG dimensions");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {size} {size}"))
            .set("width", size)
            .set("height", size);

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("class", "background")
                    .set("width", size)
                    .set("height", size)
                    .set("fill", background.to_string())
                    .set("fill-opacity", background.alpha()),
            );
        }

        let center = size / 2.0;
        let main_group = svg_element::Group::new()
            .set("transform", format!("translate({center}, {center})"))
            .add(self.render_grid(layout.scale(), radius))
            .add(self.render_links(layout))
            .add(self.render_entities(layout));

        doc.add(main_group)
    }

    /// The largest radius anything in `layout` reaches.
    fn drawn_radius(layout: &Layout) -> f32 {
        layout
            .entities()
            .iter()
            .map(|entity| entity.segments().total().end())
            .filter(|radius| radius.is_finite())
            .fold(layout.scale().outer_radius(), f32::max)
    }
}

impl Exporter for Svg {
    fn export_layout(
        &mut self,
        layout: &Layout,
        out: &mut dyn io::Write,
    ) -> Result<(), export::Error> {
        let doc = self.render_layout(layout);
        debug!("SVG document rendered");

        if let Err(err) = write!(out, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        info!(entities = layout.entities().len(); "SVG exported");
        Ok(())
    }
}
