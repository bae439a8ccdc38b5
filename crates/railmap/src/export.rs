//! Export functionality for railmap diagrams.
//!
//! This module converts a validated diagram hierarchy into output artifacts.
//! It is the final stage in the railmap pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Semantic Model
//!     ↓ structure
//! Validated Hierarchy
//!     ↓ export (this module)
//! DOT text
//!     ↓ image (Graphviz backend)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`dot`]: Graphviz DOT text via [`dot::DotExporter`]
//! - [`image`]: image files produced by handing DOT to the Graphviz binary
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`RailmapError::Export`] at the crate
//! boundary.
//!
//! [`RailmapError::Export`]: crate::RailmapError::Export

pub(crate) mod dot;
pub(crate) mod image;

mod theme;

use crate::structure::DiagramHierarchy;

/// Abstraction for diagram export backends.
///
/// Implementors convert a validated [`DiagramHierarchy`] into a textual
/// output format. See the [`dot`] module for the built-in DOT implementation.
pub(crate) trait Exporter {
    /// Exports a validated hierarchy to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the hierarchy cannot be converted to the
    /// target format.
    fn export_hierarchy(&mut self, hierarchy: &DiagramHierarchy) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`RailmapError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`RailmapError::Export`]: crate::RailmapError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error from the rendering backend.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
