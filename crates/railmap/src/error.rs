//! Error types for railmap operations.
//!
//! This module provides the main error type [`RailmapError`] which wraps
//! the error conditions that can occur while validating and rendering the
//! diagram.

use std::io;

use thiserror::Error;

use crate::structure::StructureError;

/// The main error type for railmap operations.
#[derive(Debug, Error)]
pub enum RailmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] StructureError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RailmapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
