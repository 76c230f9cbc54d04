//! SVG rendering for entities.

use svg::node::{Text as SvgText, element as svg_element};

use ringtree_core::{color::Color, segment::RangeSegment};

use super::Svg;
use crate::{layout::Layout, structure::Entity};

/// Offset of a name from the bar edge, along the bar.
const TEXT_INSET: f32 = 5.0;
/// Offset of a name from the bar axis, across the bar.
const TEXT_OFFSET: f32 = 2.0;

/// Returns `true` when a bar at `angle` points into the left half of the
/// circle, where text along it would read upside down.
fn reads_reversed(angle: f32) -> bool {
    (angle + 270.0) % 360.0 > 180.0
}

impl Svg {
    pub(super) fn render_entities(&self, layout: &Layout) -> svg_element::Group {
        layout
            .entities()
            .iter()
            .fold(svg_element::Group::new().set("class", "nodes"), |group, entity| {
                group.add(self.render_entity(entity))
            })
    }

    fn render_entity(&self, entity: &Entity) -> svg_element::Group {
        let class = if entity.is_placed() {
            "node"
        } else {
            "node unplaced"
        };
        let segments = entity.segments();

        let mut group = svg_element::Group::new()
            .set("class", class)
            .set("id", entity.id().to_string())
            .set("transform", format!("rotate({})", entity.angle()))
            .add(
                self.bar(segments.total(), "outline")
                    .set("fill", "none")
                    .set("stroke", self.bar_color.to_string())
                    .set("stroke-opacity", self.bar_color.alpha()),
            );

        if let Some(main) = segments.main() {
            group = group.add(self.filled_bar(main, "bar bar-main", &self.bar_color));
        }
        if let Some(start) = segments.start() {
            group = group.add(self.filled_bar(start, "bar bar-start", &self.fuzzy_color));
        }
        if let Some(end) = segments.end() {
            group = group.add(self.filled_bar(end, "bar bar-end", &self.fuzzy_color));
        }

        group.add(self.render_name(entity))
    }

    fn bar(&self, segment: &RangeSegment, class: &str) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("class", class)
            .set("x", -self.slot_width / 2.0)
            .set("y", segment.start())
            .set("width", self.slot_width)
            .set("height", segment.length())
    }

    fn filled_bar(
        &self,
        segment: &RangeSegment,
        class: &str,
        color: &Color,
    ) -> svg_element::Rectangle {
        self.bar(segment, class)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
    }

    /// The entity name, written along the bar and kept upright.
    fn render_name(&self, entity: &Entity) -> svg_element::Text {
        let total = entity.segments().total();
        let (class, transform) = if reads_reversed(entity.angle()) {
            (
                "name reversed",
                format!(
                    "translate({}, {}) rotate(90)",
                    -TEXT_OFFSET,
                    total.start() + TEXT_INSET
                ),
            )
        } else {
            (
                "name",
                format!(
                    "translate({}, {}) rotate(-90)",
                    TEXT_OFFSET,
                    total.end() - TEXT_INSET
                ),
            )
        };

        svg_element::Text::new("")
            .set("class", class)
            .set("transform", transform)
            .set("font-size", self.text_size)
            .set("fill", self.text_color.to_string())
            .set("fill-opacity", self.text_color.alpha())
            .add(SvgText::new(entity.name()))
    }
}

#[cfg(test)]
mod tests {
    use ringtree_core::record::Record;

    use super::*;
    use crate::{config::LayoutConfig, export::svg::SvgBuilder, layout::Engine};

    #[test]
    fn test_reads_reversed() {
        assert!(!reads_reversed(0.0));
        assert!(reads_reversed(90.0));
        assert!(reads_reversed(135.0));
        assert!(!reads_reversed(180.0));
        assert!(!reads_reversed(270.0));
    }

    #[test]
    fn test_entity_group() {
        let config = LayoutConfig::default();
        let records = vec![
            Record::new("a", "Alpha", "one", 0.0).with_end(10.0),
            Record::new("b", "Beta", "two", 0.0).with_end(10.0),
        ];
        let layout = Engine::new(&config).run(&records).unwrap();
        let svg = SvgBuilder::new().with_layout_config(&config).build().unwrap();

        let alpha = svg.render_entity(layout.get("a").unwrap()).to_string();
        assert!(alpha.contains("transform=\"rotate(0)\""));
        assert!(alpha.contains("class=\"outline\""));
        assert!(alpha.contains("x=\"-10\""));
        assert!(alpha.contains("class=\"name\""));

        // Second type group starts half way round.
        let beta = svg.render_entity(layout.get("b").unwrap()).to_string();
        assert!(beta.contains("transform=\"rotate(180)\""));
        assert!(beta.contains("Beta"));
    }
}
