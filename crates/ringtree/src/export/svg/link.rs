//! SVG rendering for prerequisite links.

use svg::node::element as svg_element;

use super::Svg;
use crate::layout::Layout;

impl Svg {
    /// Draws each link as a straight line from the outer end of the
    /// prerequisite to the inner end of its dependent.
    pub(super) fn render_links(&self, layout: &Layout) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "links");

        for (_, ends) in layout.link_endpoints() {
            group = group.add(
                svg_element::Line::new()
                    .set("class", "link")
                    .set("x1", ends.from().x())
                    .set("y1", ends.from().y())
                    .set("x2", ends.to().x())
                    .set("y2", ends.to().y())
                    .set("stroke", self.link_color.to_string())
                    .set("stroke-opacity", self.link_color.alpha()),
            );
        }

        group
    }
}
