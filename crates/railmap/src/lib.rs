//! Railmap - a declarative AWS architecture diagram, rendered via Graphviz.
//!
//! The crate holds one fixed diagram: the AWS migration architecture for a
//! railway-reservation system ([`railway::migration_architecture`]). The
//! [`DiagramBuilder`] validates the diagram's structure, exports it to
//! Graphviz DOT, and optionally hands the DOT to the Graphviz binary to
//! produce an image file.

pub mod config;
pub mod railway;

mod error;
mod export;
mod structure;

pub use railmap_core::{color, identifier, semantic};

pub use error::RailmapError;
pub use structure::StructureError;

use std::path::Path;

use log::{debug, info};

use config::{AppConfig, RenderFormat};
use export::Exporter;

/// Builder for validating and rendering railmap diagrams.
///
/// This provides an API for processing a semantic diagram through the
/// validation, DOT export, and image rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use railmap::{DiagramBuilder, config::AppConfig, railway};
///
/// let diagram = railway::migration_architecture();
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Export the diagram to DOT text
/// let dot = builder.to_dot(&diagram)
///     .expect("Failed to export");
///
/// // Or render an image through the Graphviz backend
/// builder.render_image(&diagram, "architecture.png".as_ref())
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Borrow the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate a diagram and export it to Graphviz DOT text.
    ///
    /// This flattens the scope tree, rejects dangling relation endpoints and
    /// duplicate node ids, and emits deterministic DOT.
    ///
    /// # Errors
    ///
    /// Returns `RailmapError::Graph` for structural problems and
    /// `RailmapError::Export` if the style configuration cannot be applied.
    pub fn to_dot(&self, diagram: &semantic::Diagram) -> Result<String, RailmapError> {
        info!(title = diagram.title(); "Building diagram structure");
        let hierarchy = structure::DiagramHierarchy::from_diagram(diagram)?;
        info!(
            nodes = hierarchy.node_count(),
            edges = hierarchy.edge_count(),
            clusters = hierarchy.cluster_count();
            "Structure built"
        );

        let mut exporter = export::dot::DotExporter::new(self.config.style());
        let dot = exporter.export_hierarchy(&hierarchy)?;
        debug!(dot_len = dot.len(); "DOT exported");

        Ok(dot)
    }

    /// Validate a diagram, export it, and render an image file at `output`.
    ///
    /// The image format and Graphviz layout engine come from the builder's
    /// configuration. Rendering requires an installed Graphviz binary; if it
    /// is unavailable the error propagates before any output is written.
    ///
    /// # Errors
    ///
    /// Returns `RailmapError` for structural, export, or backend errors.
    pub fn render_image(
        &self,
        diagram: &semantic::Diagram,
        output: &Path,
    ) -> Result<(), RailmapError> {
        let dot = self.to_dot(diagram)?;
        export::image::render(dot, self.config.render(), output)?;
        info!(output = output.display().to_string(); "Image rendered successfully");
        Ok(())
    }

    /// Default output file name for a diagram, derived from its title and the
    /// configured image format.
    pub fn default_output_name(&self, diagram: &semantic::Diagram) -> String {
        let format: RenderFormat = self.config.render().format();
        format!(
            "{}.{}",
            export::image::title_slug(diagram.title()),
            format.extension()
        )
    }
}
