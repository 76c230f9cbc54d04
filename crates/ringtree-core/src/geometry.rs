//! Geometric primitives for radial layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`PolarPoint`] - A radius and an angle around the drawing center
//! - [`normalize_degrees`] / [`angle_difference`] - angle helpers used by lane placement
//!
//! # Coordinate System
//!
//! Ringtree draws around the origin using the SVG convention (Y grows
//! downward). Angles are in degrees and measured clockwise from the +Y axis,
//! which is exactly what an SVG `rotate(angle)` transform does to a bar drawn
//! along +Y:
//!
//! ```text
//!            180°
//!             │
//!    90° ─────┼───── 270°
//!             │
//!             ▼ +Y
//!             0°
//! ```

/// A 2D point in drawing space.
///
/// # Examples
///
/// ```
/// # use ringtree_core::geometry::Point;
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.hypot(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// A point expressed as a radius and an angle around the origin.
///
/// # Examples
///
/// ```
/// # use ringtree_core::geometry::PolarPoint;
/// let p = PolarPoint::new(10.0, 90.0).to_point();
/// assert!((p.x() + 10.0).abs() < 1e-4);
/// assert!(p.y().abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarPoint {
    radius: f32,
    angle: f32,
}

impl PolarPoint {
    /// Creates a polar point; `angle` is in degrees.
    pub fn new(radius: f32, angle: f32) -> Self {
        Self { radius, angle }
    }

    pub fn radius(self) -> f32 {
        self.radius
    }

    /// Angle in degrees, clockwise from +Y.
    pub fn angle(self) -> f32 {
        self.angle
    }

    /// Converts to a cartesian point.
    ///
    /// Equivalent to rotating `(0, radius)` by `rotate(angle)` in SVG.
    pub fn to_point(self) -> Point {
        let theta = self.angle.to_radians();
        Point::new(-self.radius * theta.sin(), self.radius * theta.cos())
    }
}

/// Maps any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Absolute difference of two angles after normalizing both, in `[0, 360)`.
///
/// The difference does not wrap around: 350° and 10° are 340° apart.
pub fn angle_difference(a: f32, b: f32) -> f32 {
    (normalize_degrees(a) - normalize_degrees(b)).abs()
}
