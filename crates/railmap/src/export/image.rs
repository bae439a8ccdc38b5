//! Image rendering through the Graphviz backend.
//!
//! Hands generated DOT text to the locally installed Graphviz binary via
//! `graphviz-rust` and writes the resulting image file. If Graphviz is
//! missing, the invocation fails before any output file is created.

use std::path::Path;

use graphviz_rust::cmd::{CommandArg, Format, Layout};
use log::info;

use crate::config::{RenderConfig, RenderFormat};

use super::Error;

impl From<RenderFormat> for Format {
    fn from(val: RenderFormat) -> Self {
        match val {
            RenderFormat::Png => Format::Png,
            RenderFormat::Svg => Format::Svg,
        }
    }
}

/// Resolve a configured layout engine name to a Graphviz layout.
fn layout_from_name(name: &str) -> Result<Layout, Error> {
    match name {
        "dot" => Ok(Layout::Dot),
        "neato" => Ok(Layout::Neato),
        "twopi" => Ok(Layout::Twopi),
        "circo" => Ok(Layout::Circo),
        "fdp" => Ok(Layout::Fdp),
        "sfdp" => Ok(Layout::Sfdp),
        other => Err(Error::Render(format!("unknown layout engine `{other}`"))),
    }
}

/// Render DOT text to an image file at `output`.
pub(crate) fn render(dot: String, config: &RenderConfig, output: &Path) -> Result<(), Error> {
    let layout = layout_from_name(config.engine())?;

    info!(
        output = output.display().to_string(),
        format = config.format().to_string(),
        engine = config.engine();
        "Invoking Graphviz"
    );

    graphviz_rust::exec_dot(
        dot,
        vec![
            CommandArg::Layout(layout),
            CommandArg::Format(config.format().into()),
            CommandArg::Output(output.display().to_string()),
        ],
    )
    .map_err(Error::Io)?;

    Ok(())
}

/// Derive the default output file stem from a diagram title.
///
/// Lowercases the title, joins whitespace runs with underscores, and drops
/// characters that are awkward in file names, mirroring what the usual
/// diagram backends do with their titles.
pub(crate) fn title_slug(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}
