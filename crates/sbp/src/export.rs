//! Exporters turning a laid-out [`Scene`](sbp_core::scene::Scene) into an
//! output document.
//!
//! The scene carries all geometry; exporters only map it onto their target
//! format. Currently SVG is the only backend ([`svg`] module).

pub mod svg;

use thiserror::Error;

/// Errors produced while preparing an exporter.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured style value could not be used.
    #[error("invalid style: {0}")]
    Style(String),
}
