//! CLI logic for the railmap diagram tool.
//!
//! The diagram topology is compiled into the binary; running the tool builds
//! the semantic model, validates it, and writes exactly one artifact (an
//! image rendered through Graphviz, or DOT text with `--emit-dot`).

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use log::info;

use railmap::{DiagramBuilder, RailmapError, config::RenderFormat, railway};

/// Run the railmap CLI application
///
/// This function builds the fixed architecture diagram, validates it, and
/// renders the requested artifact.
///
/// # Errors
///
/// Returns `RailmapError` for:
/// - Configuration loading errors
/// - Structural validation errors
/// - Rendering backend errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), RailmapError> {
    // Load configuration, with command-line overrides on top
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = &args.format {
        let format = RenderFormat::from_str(format)
            .map_err(|err| RailmapError::Config(format!("{err}: `{format}`")))?;
        app_config.override_render_format(format);
    }

    let builder = DiagramBuilder::new(app_config);
    let diagram = railway::migration_architecture();
    info!(title = diagram.title(); "Processing diagram");

    if args.emit_dot {
        let dot = builder.to_dot(&diagram)?;
        match &args.output {
            Some(path) => {
                fs::write(path, dot)?;
                info!(output_file = path; "DOT exported successfully");
            }
            None => io::stdout().write_all(dot.as_bytes())?,
        }
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| builder.default_output_name(&diagram));
    builder.render_image(&diagram, Path::new(&output))?;

    info!(output_file = output; "Image exported successfully");

    Ok(())
}
