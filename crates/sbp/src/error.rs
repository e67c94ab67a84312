//! Error types for sbp operations.
//!
//! This module provides the main error type [`SbpError`] which wraps the
//! error conditions that can occur while generating a diagram.

use std::io;

use thiserror::Error;

use sbp_parser::error::ParseError;

use crate::layout::LayoutError;

/// The main error type for sbp operations.
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics so reporters can render the offending lines.
#[derive(Debug, Error)]
pub enum SbpError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SbpError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SbpError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
