//! Color handling for Ringtree rendering.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so style settings can be given as any CSS color
//! string.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// CSS color used by the renderer's style settings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input if it is not a valid CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringtree_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a copy of this color with the given alpha (0.0 transparent, 1.0 opaque).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("steelblue").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        assert_approx_eq!(f32, color.alpha(), 1.0);

        let faded = color.with_alpha(0.35);
        assert_approx_eq!(f32, faded.alpha(), 0.35);
    }

    #[test]
    fn test_color_display_is_not_empty() {
        let color = Color::new("blue").unwrap();
        assert!(!color.to_string().is_empty());
    }
}
