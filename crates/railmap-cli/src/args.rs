//! Command-line argument definitions for the railmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The diagram itself is compiled in, so there is no input
//! path; arguments control output, configuration, and logging.

use clap::Parser;

/// Command-line arguments for the railmap diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file (defaults to a name derived from the diagram title)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output image format (png, svg); overrides the configured format
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write Graphviz DOT text instead of rendering an image
    #[arg(long)]
    pub emit_dot: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
