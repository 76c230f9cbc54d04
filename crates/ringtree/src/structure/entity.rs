//! Entities and their bar segments.

use std::fmt;

use ringtree_core::{
    geometry::normalize_degrees, identifier::Id, record::Record, segment::RangeSegment,
};

use super::LinkIndex;
use crate::layout::LaneKey;

/// Position of an [`Entity`] in the entity list of an
/// [`EntityGraph`](super::EntityGraph).
///
/// Indices follow processing order, i.e. ascending start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityIndex(usize);

impl EntityIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Radial intervals drawn for one entity.
///
/// `total` always exists and contains every other segment:
///
/// ```text
/// start       max_start           end           max_end
///   |--- start ---|----- main -----|---- end ------|
///   |------------------- total --------------------|
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segments {
    total: RangeSegment,
    main: Option<RangeSegment>,
    start: Option<RangeSegment>,
    end: Option<RangeSegment>,
}

impl Segments {
    pub fn new(total: RangeSegment) -> Self {
        Self {
            total,
            main: None,
            start: None,
            end: None,
        }
    }

    pub fn with_main(mut self, main: RangeSegment) -> Self {
        self.main = Some(main);
        self
    }

    pub fn with_start(mut self, start: RangeSegment) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: RangeSegment) -> Self {
        self.end = Some(end);
        self
    }

    /// The full visual extent, including the minimum-length extension.
    pub fn total(&self) -> &RangeSegment {
        &self.total
    }

    /// The firm part of the bar, present when the end is known.
    pub fn main(&self) -> Option<&RangeSegment> {
        self.main.as_ref()
    }

    /// The uncertain onset, present when a latest start is known.
    pub fn start(&self) -> Option<&RangeSegment> {
        self.start.as_ref()
    }

    /// The uncertain completion, present when both end and latest end are known.
    pub fn end(&self) -> Option<&RangeSegment> {
        self.end.as_ref()
    }

    /// Every present segment other than `total`.
    pub fn parts(&self) -> impl Iterator<Item = &RangeSegment> {
        [self.start.as_ref(), self.main.as_ref(), self.end.as_ref()]
            .into_iter()
            .flatten()
    }
}

/// One record together with its layout state.
#[derive(Debug, Clone)]
pub struct Entity {
    record: Record,
    angle: f32,
    lane: Option<LaneKey>,
    segments: Segments,
    parent_links: Vec<LinkIndex>,
    child_links: Vec<LinkIndex>,
}

impl Entity {
    pub(crate) fn new(record: Record, segments: Segments) -> Self {
        Self {
            record,
            angle: 0.0,
            lane: None,
            segments,
            parent_links: Vec::new(),
            child_links: Vec::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.record.id()
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    /// The grouping type.
    pub fn kind(&self) -> &str {
        self.record.kind()
    }

    /// The input row this entity was built from.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Angle in degrees within `[0, 360)`, clockwise from +Y.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The occupied lane, or `None` for an entity that could not be placed.
    pub fn lane(&self) -> Option<LaneKey> {
        self.lane
    }

    pub fn is_placed(&self) -> bool {
        self.lane.is_some()
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Links whose target is this entity, in prerequisite order.
    pub fn parent_links(&self) -> &[LinkIndex] {
        &self.parent_links
    }

    /// Links whose source is this entity, in creation order.
    pub fn child_links(&self) -> &[LinkIndex] {
        &self.child_links
    }

    /// Sets the angle, normalized into `[0, 360)`.
    ///
    /// Only the model changes; whoever drives the layout reports the new
    /// angle to its [`AngleObserver`](crate::layout::AngleObserver).
    pub fn assign_angle(&mut self, angle: f32) {
        self.angle = normalize_degrees(angle);
    }

    pub(crate) fn assign_lane(&mut self, lane: LaneKey) {
        self.lane = Some(lane);
    }

    pub(crate) fn add_parent_link(&mut self, link: LinkIndex) {
        self.parent_links.push(link);
    }

    pub(crate) fn add_child_link(&mut self, link: LinkIndex) {
        self.child_links.push(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_angle_normalizes() {
        let mut entity = Entity::new(
            Record::new("a", "A", "t", 0.0),
            Segments::new(RangeSegment::new(10.0, 55.0)),
        );
        entity.assign_angle(-90.0);
        assert_eq!(entity.angle(), 270.0);
        entity.assign_angle(720.0);
        assert_eq!(entity.angle(), 0.0);
        assert!(!entity.is_placed());
    }

    #[test]
    fn test_segment_parts_order() {
        let segments = Segments::new(RangeSegment::new(0.0, 40.0))
            .with_start(RangeSegment::new(0.0, 10.0))
            .with_main(RangeSegment::new(10.0, 30.0))
            .with_end(RangeSegment::new(30.0, 40.0));
        let starts: Vec<f32> = segments.parts().map(RangeSegment::start).collect();
        assert_eq!(starts, vec![0.0, 10.0, 30.0]);
    }
}
