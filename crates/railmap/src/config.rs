//! Configuration types for railmap rendering.
//!
//! This module provides configuration structures that control how the diagram
//! is rendered. All types implement [`serde::Deserialize`] for loading from
//! TOML configuration files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and style settings.
//! - [`RenderConfig`] - Controls the output format and Graphviz layout engine.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use railmap::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

use railmap_core::color::Color;

/// Output image format for the rendering backend.
///
/// The names match external configuration strings (lowercase).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// PNG raster output (default)
    #[default]
    Png,
    /// SVG vector output
    Svg,
}

impl RenderFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        (*self).into()
    }
}

impl FromStr for RenderFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err("Unsupported render format"),
        }
    }
}

impl From<RenderFormat> for &'static str {
    fn from(val: RenderFormat) -> Self {
        match val {
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
        }
    }
}

impl Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Top-level application configuration combining render and style settings.
///
/// Groups [`RenderConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style configurations.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the configured output format, used for command-line overrides.
    pub fn override_render_format(&mut self, format: RenderFormat) {
        self.render.format = format;
    }
}

/// Rendering backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Output image format.
    #[serde(default)]
    format: RenderFormat,

    /// Graphviz layout engine name (dot, neato, fdp, sfdp, twopi, circo).
    #[serde(default = "default_engine")]
    engine: String,
}

fn default_engine() -> String {
    "dot".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: RenderFormat::default(),
            engine: default_engine(),
        }
    }
}

impl RenderConfig {
    /// Returns the output image format.
    pub fn format(&self) -> RenderFormat {
        self.format
    }

    /// Returns the Graphviz layout engine name.
    pub fn engine(&self) -> &str {
        &self.engine
    }
}

/// Visual styling configuration for the rendered diagram.
///
/// Fields that are not set fall back to the diagram's own styling.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] override for the diagram, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.render().format(), RenderFormat::Png);
        assert_eq!(config.render().engine(), "dot");
        assert_eq!(config.style().background_color(), Ok(None));
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!("png".parse(), Ok(RenderFormat::Png));
        assert_eq!("svg".parse(), Ok(RenderFormat::Svg));
        assert!("gif".parse::<RenderFormat>().is_err());
        assert_eq!(RenderFormat::Svg.extension(), "svg");
        assert_eq!(RenderFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_override_render_format() {
        let mut config = AppConfig::default();
        config.override_render_format(RenderFormat::Svg);
        assert_eq!(config.render().format(), RenderFormat::Svg);
    }

    #[test]
    fn test_background_color_parsing() {
        let style = StyleConfig {
            background_color: Some("white".to_string()),
        };
        let parsed = style.background_color().expect("white should parse");
        assert_eq!(parsed.map(|c| c.to_string()), Some("white".to_string()));

        let invalid = StyleConfig {
            background_color: Some("not-a-color".to_string()),
        };
        assert!(invalid.background_color().is_err());
    }
}
