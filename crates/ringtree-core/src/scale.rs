//! Power-law mapping from time to radius.
//!
//! Timelines get denser toward the rim of a circle because circumference grows
//! with radius. [`RadialScale`] compensates with a square-root mapping:
//!
//! ```text
//! radius = center + (outer - center) * sqrt(t / max_time)
//! ```
//!
//! The domain is `[0, max_time]` and the range `[center, outer]`. Values
//! outside the domain extrapolate; negative times mirror the curve the way a
//! sign-preserving power scale does.

/// Square-root scale from time units to radial drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    max_time: f32,
    center_radius: f32,
    outer_radius: f32,
}

impl RadialScale {
    /// Creates a scale over `[0, max_time]` onto `[center_radius, outer_radius]`.
    ///
    /// A `max_time` of zero (or below) builds a degenerate scale that maps
    /// every time to `center_radius`.
    pub fn new(max_time: f32, center_radius: f32, outer_radius: f32) -> Self {
        Self {
            max_time,
            center_radius,
            outer_radius,
        }
    }

    /// Returns `true` when the domain is empty and every time maps to the center.
    pub fn is_degenerate(&self) -> bool {
        !(self.max_time > 0.0) || self.outer_radius == self.center_radius
    }

    /// Upper bound of the time domain.
    pub fn max_time(&self) -> f32 {
        self.max_time
    }

    /// Radius of time zero.
    pub fn center_radius(&self) -> f32 {
        self.center_radius
    }

    /// Radius of `max_time`.
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    /// Maps a time value to a radius.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringtree_core::scale::RadialScale;
    /// let scale = RadialScale::new(100.0, 10.0, 510.0);
    /// assert_eq!(scale.forward(0.0), 10.0);
    /// assert_eq!(scale.forward(25.0), 260.0);
    /// assert_eq!(scale.forward(100.0), 510.0);
    ///
    /// let degenerate = RadialScale::new(0.0, 10.0, 510.0);
    /// assert_eq!(degenerate.forward(42.0), 10.0);
    /// ```
    pub fn forward(&self, time: f32) -> f32 {
        if self.is_degenerate() {
            return self.center_radius;
        }

        let normalized = time / self.max_time;
        let curved = normalized.signum() * normalized.abs().sqrt();
        self.center_radius + (self.outer_radius - self.center_radius) * curved
    }

    /// Maps a radius back to a time value; the exact inverse of [`forward`](Self::forward).
    ///
    /// A degenerate scale inverts every radius to `0`.
    pub fn invert(&self, radius: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }

        let curved = (radius - self.center_radius) / (self.outer_radius - self.center_radius);
        self.max_time * curved.signum() * curved * curved
    }
}
