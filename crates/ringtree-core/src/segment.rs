//! Radial intervals of an entity bar.

use crate::scale::RadialScale;

/// A contiguous radial interval in scaled units.
///
/// `end == start + length` and `length >= 0` for every segment built through
/// [`RangeSegment::from_times`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeSegment {
    start: f32,
    length: f32,
    end: f32,
}

impl RangeSegment {
    /// Creates a segment from radial bounds.
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            length: end - start,
            end,
        }
    }

    /// Maps the time interval `[start, end]` through `scale`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringtree_core::{scale::RadialScale, segment::RangeSegment};
    /// let scale = RadialScale::new(100.0, 10.0, 110.0);
    /// let segment = RangeSegment::from_times(&scale, 0.0, 25.0);
    /// assert_eq!(segment.start(), 10.0);
    /// assert_eq!(segment.end(), 60.0);
    /// assert_eq!(segment.length(), 50.0);
    /// ```
    pub fn from_times(scale: &RadialScale, start: f32, end: f32) -> Self {
        Self::new(scale.forward(start), scale.forward(end))
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Returns `true` when `other` lies within this segment.
    pub fn contains(&self, other: &RangeSegment) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
