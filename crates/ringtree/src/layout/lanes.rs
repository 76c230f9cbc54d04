//! Ring and lane packing.
//!
//! The circle is divided into rings whose lane count doubles as the
//! circumference grows: a ring offers `initial_lane_count * 2^ring` evenly
//! spaced angles. An entity goes into the closest lane whose last occupant
//! ends, plus the lane margin, before the entity starts. Closeness is the
//! plain difference of angles and does not wrap past 0°, so a preference of
//! 350° tries 270° before 0°.
//!
//! Lanes are keyed by their exact angle, so the lane at 90° of ring 0 is the
//! same lane as the one at 90° of every outer ring.

use std::{cmp::Ordering, f32::consts::TAU, fmt};

use indexmap::IndexMap;
use log::{debug, trace};

use ringtree_core::{geometry::angle_difference, segment::RangeSegment};

use crate::{config::LayoutConfig, structure::EntityIndex};

/// Outermost ring considered; bounds the candidate count at
/// `initial_lane_count * 2^16`.
const MAX_RING: u32 = 16;

/// Exact angle of a lane as a reduced fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaneKey {
    numerator: u32,
    denominator: u32,
}

impl LaneKey {
    /// The `slot`-th of `count` evenly spaced angles, starting at 0°.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn new(slot: u32, count: u32) -> Self {
        assert!(count > 0, "a ring needs at least one lane");
        let slot = slot % count;
        let divisor = gcd(slot, count);
        Self {
            numerator: slot / divisor,
            denominator: count / divisor,
        }
    }

    pub fn numerator(self) -> u32 {
        self.numerator
    }

    pub fn denominator(self) -> u32 {
        self.denominator
    }

    /// The lane angle in degrees, within `[0, 360)`.
    pub fn angle(self) -> f32 {
        (f64::from(self.numerator) * 360.0 / f64::from(self.denominator)) as f32
    }
}

impl fmt::Display for LaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Ring index for an entity starting at `radius`.
///
/// This is the largest `ring` with `initial * 2^ring <= max_count`, where
/// `max_count` is how many slots of `slot_width + slot_margin` fit on the
/// circumference. Radii too small for even the initial lanes use ring 0.
pub fn ring_at_radius(radius: f32, config: &LayoutConfig) -> u32 {
    let pitch = config.slot_width() + config.slot_margin();
    let max_count = (TAU * radius / pitch).floor();
    let initial = u64::from(config.initial_lane_count());

    // Also rejects NaN.
    if !(max_count >= initial as f32) {
        return 0;
    }
    let max_count = max_count as u64;

    let mut ring = 0;
    while ring < MAX_RING && initial << (ring + 1) <= max_count.min(u64::from(u32::MAX)) {
        ring += 1;
    }
    ring
}

/// Number of lanes available at `radius`.
pub fn lane_count_at_radius(radius: f32, config: &LayoutConfig) -> u32 {
    config.initial_lane_count() << ring_at_radius(radius, config)
}

/// An entity's claim on a lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneOccupant {
    entity: EntityIndex,
    span: RangeSegment,
}

impl LaneOccupant {
    pub fn entity(&self) -> EntityIndex {
        self.entity
    }

    /// The occupant's total segment.
    pub fn span(&self) -> &RangeSegment {
        &self.span
    }
}

/// Occupied lanes of one pass, each listing its occupants by increasing
/// radius.
#[derive(Debug, Clone, Default)]
pub struct LaneRegistry {
    lanes: IndexMap<LaneKey, Vec<LaneOccupant>>,
}

impl LaneRegistry {
    /// Occupied lanes in order of first use.
    pub fn lanes(&self) -> impl Iterator<Item = (LaneKey, &[LaneOccupant])> {
        self.lanes
            .iter()
            .map(|(key, occupants)| (*key, occupants.as_slice()))
    }

    /// Occupants of `key`; empty if the lane was never used.
    pub fn lane(&self, key: LaneKey) -> &[LaneOccupant] {
        self.lanes.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of occupied lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    fn accepts(&self, key: LaneKey, span: &RangeSegment, margin: f32) -> bool {
        match self.lane(key).last() {
            None => true,
            Some(last) => last.span.end() + margin <= span.start(),
        }
    }

    fn occupy(&mut self, key: LaneKey, occupant: LaneOccupant) {
        self.lanes.entry(key).or_default().push(occupant);
    }
}

/// First-fit lane assignment over a [`LaneRegistry`].
#[derive(Debug)]
pub struct LanePacker<'c> {
    config: &'c LayoutConfig,
    registry: LaneRegistry,
}

impl<'c> LanePacker<'c> {
    /// Creates a packer with an empty registry.
    ///
    /// `config` must have passed [`LayoutConfig::validate`].
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self {
            config,
            registry: LaneRegistry::default(),
        }
    }

    /// Lanes available at `radius`, closest to `preferred` first.
    ///
    /// Distance is the absolute difference of angles, without wrapping; of two
    /// equidistant angles the larger comes first.
    pub fn candidates(&self, radius: f32, preferred: f32) -> Vec<LaneKey> {
        let count = lane_count_at_radius(radius, self.config);
        let mut candidates: Vec<(f32, f32, LaneKey)> = (0..count)
            .map(|slot| {
                let key = LaneKey::new(slot, count);
                let angle = key.angle();
                (angle_difference(angle, preferred), angle, key)
            })
            .collect();

        candidates.sort_by(|(a_distance, a_angle, _), (b_distance, b_angle, _)| {
            match a_distance.total_cmp(b_distance) {
                Ordering::Equal => b_angle.total_cmp(a_angle),
                ordering => ordering,
            }
        });
        candidates.into_iter().map(|(_, _, key)| key).collect()
    }

    /// Puts `entity` into the closest lane that can take `span`.
    ///
    /// Returns the chosen lane, or `None` when every candidate is blocked; the
    /// registry is unchanged in that case.
    pub fn place(
        &mut self,
        entity: EntityIndex,
        span: &RangeSegment,
        preferred: f32,
    ) -> Option<LaneKey> {
        let margin = self.config.lane_margin();
        let chosen = self
            .candidates(span.start(), preferred)
            .into_iter()
            .find(|&key| self.registry.accepts(key, span, margin));

        match chosen {
            Some(key) => {
                self.registry.occupy(key, LaneOccupant { entity, span: *span });
                trace!(entity:% = entity, lane:% = key, angle = key.angle(); "Entity placed");
            }
            None => {
                debug!(entity:% = entity, radius = span.start(); "No lane accepts entity");
            }
        }
        chosen
    }

    pub fn registry(&self) -> &LaneRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> LaneRegistry {
        self.registry
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn lanes_never_overlap(
            spans in prop::collection::vec((0.0f32..500.0, 0.0f32..120.0, 0.0f32..360.0), 1..60)
        ) {
            let config = LayoutConfig::default();
            let mut packer = LanePacker::new(&config);

            let mut spans = spans;
            spans.sort_by(|a, b| a.0.total_cmp(&b.0));
            for (index, (start, length, preferred)) in spans.into_iter().enumerate() {
                let span = RangeSegment::new(start, start + length);
                packer.place(EntityIndex::new(index), &span, preferred);
            }

            for (_, occupants) in packer.registry().lanes() {
                for pair in occupants.windows(2) {
                    prop_assert!(
                        pair[1].span().start() >= pair[0].span().end() + config.lane_margin()
                    );
                }
            }
        }

        #[test]
        fn candidates_cover_every_lane_once(radius in 0.0f32..600.0, preferred in 0.0f32..360.0) {
            let config = LayoutConfig::default();
            let packer = LanePacker::new(&config);
            let mut candidates = packer.candidates(radius, preferred);
            let count = candidates.len();
            prop_assert_eq!(count as u32, lane_count_at_radius(radius, &config));
            candidates.sort();
            candidates.dedup();
            prop_assert_eq!(candidates.len(), count);
        }
    }
}
