//! Color handling for railmap diagrams.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing CSS color string parsing for configuration
//! values and diagram backgrounds.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Colors are only carried for rendering. They are parsed once from CSS
/// color strings and written back out as strings for the Graphviz backend.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string.
    ///
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)",
    /// "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use railmap_core::color::Color;
    ///
    /// let white = Color::new("white").unwrap();
    /// let orange = Color::new("#ed7100").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }
}

// The Graphviz backend consumes colors as strings.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
