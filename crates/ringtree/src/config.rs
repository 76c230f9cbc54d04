//! Configuration types for Ringtree layout and rendering.
//!
//! This module provides configuration structures that control how timeline
//! trees are laid out and styled. All types implement [`serde::Deserialize`]
//! for loading from external sources; every field has a default, so a
//! partial file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Geometry constants of the radial layout.
//! - [`StyleConfig`] - Visual styling options such as colors and text size.
//! - [`GridConfig`] - Spacing and emphasis of the background rings.
//!
//! # Example
//!
//! ```
//! # use ringtree::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().outer_radius(), 500.0);
//! assert!(config.style().bar_color().is_ok());
//! ```

use serde::Deserialize;

use ringtree_core::color::Color;

use crate::error::LayoutError;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry constants of the radial layout.
///
/// | field                | default | meaning                                          |
/// |----------------------|---------|--------------------------------------------------|
/// | `min_visual_length`  | 45      | shortest drawn bar, in radial units              |
/// | `center_radius`      | 10      | radius of time zero                              |
/// | `width`              | 1000    | drawing diameter; the outer radius is half of it |
/// | `slot_width`         | 20      | width of a bar                                   |
/// | `slot_margin`        | 4       | angular gap between neighbouring bars            |
/// | `lane_margin`        | 4       | radial gap between bars sharing a lane           |
/// | `initial_lane_count` | 4       | lanes of the innermost ring                      |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    min_visual_length: f32,
    center_radius: f32,
    width: f32,
    slot_width: f32,
    slot_margin: f32,
    lane_margin: f32,
    initial_lane_count: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_visual_length: 45.0,
            center_radius: 10.0,
            width: 1000.0,
            slot_width: 20.0,
            slot_margin: 4.0,
            lane_margin: 4.0,
            initial_lane_count: 4,
        }
    }
}

impl LayoutConfig {
    pub fn with_min_visual_length(mut self, length: f32) -> Self {
        self.min_visual_length = length;
        self
    }

    pub fn with_center_radius(mut self, radius: f32) -> Self {
        self.center_radius = radius;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_slot_width(mut self, width: f32) -> Self {
        self.slot_width = width;
        self
    }

    pub fn with_slot_margin(mut self, margin: f32) -> Self {
        self.slot_margin = margin;
        self
    }

    pub fn with_lane_margin(mut self, margin: f32) -> Self {
        self.lane_margin = margin;
        self
    }

    pub fn with_initial_lane_count(mut self, count: u32) -> Self {
        self.initial_lane_count = count;
        self
    }

    pub fn min_visual_length(&self) -> f32 {
        self.min_visual_length
    }

    pub fn center_radius(&self) -> f32 {
        self.center_radius
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Radius of the latest time in the data: half the drawing width.
    pub fn outer_radius(&self) -> f32 {
        self.width / 2.0
    }

    pub fn slot_width(&self) -> f32 {
        self.slot_width
    }

    pub fn slot_margin(&self) -> f32 {
        self.slot_margin
    }

    pub fn lane_margin(&self) -> f32 {
        self.lane_margin
    }

    pub fn initial_lane_count(&self) -> u32 {
        self.initial_lane_count
    }

    /// Checks that the constants describe a drawable layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let non_negative = [
            ("min_visual_length", self.min_visual_length),
            ("center_radius", self.center_radius),
            ("slot_width", self.slot_width),
            ("slot_margin", self.slot_margin),
            ("lane_margin", self.lane_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig {
                    field,
                    reason: "must be a finite, non-negative number",
                });
            }
        }

        if !self.width.is_finite() || self.outer_radius() <= self.center_radius {
            return Err(LayoutError::InvalidConfig {
                field: "width",
                reason: "half the width must exceed the center radius",
            });
        }
        if self.slot_width + self.slot_margin <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                field: "slot_width",
                reason: "slot width and slot margin cannot both be zero",
            });
        }
        if self.initial_lane_count == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "initial_lane_count",
                reason: "at least one lane is required",
            });
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered trees.
///
/// Colors are CSS color strings and are parsed when rendering starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background fill; transparent when unset.
    background_color: Option<String>,
    bar_color: String,
    fuzzy_color: String,
    link_color: String,
    grid_color: String,
    text_color: String,
    text_size: f32,
    grid: GridConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            bar_color: "steelblue".to_string(),
            fuzzy_color: "rgba(70, 130, 180, 0.4)".to_string(),
            link_color: "#999999".to_string(),
            grid_color: "#dddddd".to_string(),
            text_color: "black".to_string(),
            text_size: 10.0,
            grid: GridConfig::default(),
        }
    }
}

impl StyleConfig {
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_bar_color(mut self, color: impl Into<String>) -> Self {
        self.bar_color = color.into();
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    /// Fill of the total outline and the main bar.
    pub fn bar_color(&self) -> Result<Color, String> {
        parse_color("bar_color", &self.bar_color)
    }

    /// Fill of the uncertain start and end bars.
    pub fn fuzzy_color(&self) -> Result<Color, String> {
        parse_color("fuzzy_color", &self.fuzzy_color)
    }

    pub fn link_color(&self) -> Result<Color, String> {
        parse_color("link_color", &self.link_color)
    }

    pub fn grid_color(&self) -> Result<Color, String> {
        parse_color("grid_color", &self.grid_color)
    }

    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text_color", &self.text_color)
    }

    /// Font size of entity names and ring labels.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Background ring spacing.
///
/// A ring is drawn every `interval` time units. Every `quarter_every`-th ring
/// is emphasized, and every `year_every`-th ring is emphasized further and
/// labelled with its time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    interval: f32,
    quarter_every: u32,
    year_every: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            interval: 1.0,
            quarter_every: 3,
            year_every: 12,
        }
    }
}

impl GridConfig {
    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn quarter_every(&self) -> u32 {
        self.quarter_every
    }

    pub fn year_every(&self) -> u32 {
        self.year_every
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_constants() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.min_visual_length(), 45.0);
        assert_eq!(layout.center_radius(), 10.0);
        assert_eq!(layout.outer_radius(), 500.0);
        assert_eq!(layout.slot_width(), 20.0);
        assert_eq!(layout.slot_margin(), 4.0);
        assert_eq!(layout.lane_margin(), 4.0);
        assert_eq!(layout.initial_lane_count(), 4);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        let zero_lanes = LayoutConfig::default().with_initial_lane_count(0);
        assert!(matches!(
            zero_lanes.validate(),
            Err(LayoutError::InvalidConfig {
                field: "initial_lane_count",
                ..
            })
        ));

        let narrow = LayoutConfig::default().with_width(10.0);
        assert!(narrow.validate().is_err());

        let negative_margin = LayoutConfig::default().with_lane_margin(-1.0);
        assert!(negative_margin.validate().is_err());

        let no_slot = LayoutConfig::default()
            .with_slot_width(0.0)
            .with_slot_margin(0.0);
        assert!(no_slot.validate().is_err());
    }

    #[test]
    fn test_default_style_colors_parse() {
        let style = StyleConfig::default();
        assert!(style.background_color().unwrap().is_none());
        assert!(style.bar_color().is_ok());
        assert!(style.fuzzy_color().is_ok());
        assert!(style.link_color().is_ok());
        assert!(style.grid_color().is_ok());
        assert!(style.text_color().is_ok());
        assert_eq!(style.grid().year_every(), 12);
    }

    #[test]
    fn test_invalid_color_names_field() {
        let style = StyleConfig {
            bar_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let err = style.bar_color().unwrap_err();
        assert!(err.contains("bar_color"));
    }
}
