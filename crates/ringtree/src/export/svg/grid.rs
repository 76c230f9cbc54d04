//! Background rings.

use svg::node::{Text as SvgText, element as svg_element};

use ringtree_core::scale::RadialScale;

use super::Svg;

/// Upper bound on drawn rings, for very fine intervals.
const MAX_RINGS: u32 = 2000;

/// Emphasis of a background ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingLevel {
    Plain,
    Quarter,
    Year,
}

impl RingLevel {
    fn of(step: u32, quarter_every: u32, year_every: u32) -> Self {
        if year_every > 0 && step % year_every == 0 {
            RingLevel::Year
        } else if quarter_every > 0 && step % quarter_every == 0 {
            RingLevel::Quarter
        } else {
            RingLevel::Plain
        }
    }

    fn class(self) -> &'static str {
        match self {
            RingLevel::Plain => "level",
            RingLevel::Quarter => "level level-quarter",
            RingLevel::Year => "level level-year",
        }
    }

    fn stroke_width(self) -> f32 {
        match self {
            RingLevel::Plain => 0.5,
            RingLevel::Quarter => 1.0,
            RingLevel::Year => 2.0,
        }
    }
}

impl Svg {
    /// Renders one ring per grid interval out to `max_radius`; year rings
    /// carry a label at their top.
    pub(super) fn render_grid(&self, scale: &RadialScale, max_radius: f32) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "grid");

        let interval = self.grid.interval();
        if scale.is_degenerate() || !(interval > 0.0) {
            return group;
        }

        for step in 0..MAX_RINGS {
            let time = step as f32 * interval;
            let radius = scale.forward(time);
            if radius > max_radius {
                break;
            }

            let level = RingLevel::of(step, self.grid.quarter_every(), self.grid.year_every());
            group = group.add(
                svg_element::Circle::new()
                    .set("class", level.class())
                    .set("id", format!("level-{step}"))
                    .set("cx", 0)
                    .set("cy", 0)
                    .set("r", radius)
                    .set("fill", "none")
                    .set("stroke", self.grid_color.to_string())
                    .set("stroke-opacity", self.grid_color.alpha())
                    .set("stroke-width", level.stroke_width()),
            );

            if level == RingLevel::Year {
                group = group.add(
                    svg_element::Text::new("")
                        .set("class", "label")
                        .set("x", 0)
                        .set("y", -radius - 2.0)
                        .set("text-anchor", "middle")
                        .set("font-size", self.text_size)
                        .set("fill", self.grid_color.to_string())
                        .add(SvgText::new(time.to_string())),
                );
            }
        }

        group
    }
}
