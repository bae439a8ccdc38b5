//! Core diagram structure types.
//!
//! This module contains the top of the semantic diagram model:
//! - [`Diagram`] - The root diagram type with title, direction, and styling
//! - [`Scope`] - Container for diagram elements
//! - [`RankDirection`] - Flow direction of the rendered graph
//! - [`GraphAttributes`] - Graph-wide presentation attributes

use std::fmt::{self, Display};

use crate::{color::Color, semantic::element::Element};

/// A scope containing a sequence of diagram elements.
///
/// A scope represents a container for diagram elements (nodes, clusters,
/// relations) and forms the building block for both the top-level diagram and
/// nested clusters.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    elements: Vec<Element>,
}

impl Scope {
    /// Create a new Scope from a list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Borrow the elements contained in this scope.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Flow direction of the rendered graph.
///
/// Maps onto the rendering backend's rank direction. The railway architecture
/// diagram flows top to bottom.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankDirection {
    /// Top-to-bottom flow (default)
    #[default]
    TopBottom,
    /// Left-to-right flow
    LeftRight,
}

impl From<RankDirection> for &'static str {
    fn from(val: RankDirection) -> Self {
        match val {
            RankDirection::TopBottom => "TB",
            RankDirection::LeftRight => "LR",
        }
    }
}

impl Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Graph-wide presentation attributes.
///
/// These are passed through to the rendering backend unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphAttributes {
    font_size: f32,
    pad: f32,
}

impl GraphAttributes {
    /// Create graph attributes with an explicit title font size and padding
    /// (in inches, backend units).
    pub fn new(font_size: f32, pad: f32) -> Self {
        Self { font_size, pad }
    }

    /// Get the title font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Get the outer padding in inches.
    pub fn pad(&self) -> f32 {
        self.pad
    }
}

impl Default for GraphAttributes {
    fn default() -> Self {
        // Graphviz-flavored defaults
        Self {
            font_size: 14.0,
            pad: 0.25,
        }
    }
}

/// A complete diagram: title, flow direction, styling, and content.
///
/// This is the root type of the semantic model. It is built once, top to
/// bottom, and never mutated afterwards; the structure stage validates it and
/// the export stage renders it.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    direction: RankDirection,
    attributes: GraphAttributes,
    background_color: Option<Color>,
    scope: Scope,
}

impl Diagram {
    /// Create a new Diagram with its title, direction, attributes, optional
    /// background color, and content scope.
    pub fn new(
        title: impl Into<String>,
        direction: RankDirection,
        attributes: GraphAttributes,
        background_color: Option<Color>,
        scope: Scope,
    ) -> Self {
        Self {
            title: title.into(),
            direction,
            attributes,
            background_color,
            scope,
        }
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the flow direction.
    pub fn direction(&self) -> RankDirection {
        self.direction
    }

    /// Get the graph-wide presentation attributes.
    pub fn attributes(&self) -> GraphAttributes {
        self.attributes
    }

    /// Get the diagram's background color if specified.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Borrow the diagram's top-level scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}
