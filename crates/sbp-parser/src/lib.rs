//! # sbp Parser
//!
//! Parser for the sbp service blueprint DSL. Each non-blank line of the
//! input describes one step of the blueprint: a step name, a `:`, and a
//! chain of lane-tagged actions joined by connector separators (`/` one-way,
//! `//` two-way, `|` no line).
//!
//! ## Usage
//!
//! ```
//! # use sbp_parser::error::ParseError;
//! fn main() -> Result<(), ParseError> {
//!     let source = "Add to Cart:C Click cart/F Add to cart/B Update inventory//P Check DB";
//!
//!     let blueprint = sbp_parser::parse(source)?;
//!     assert_eq!(blueprint.steps().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod parser;
mod span;

pub use span::Span;

use log::{debug, trace};

use sbp_core::blueprint::Blueprint;

use crate::error::ParseError;

/// Parse blueprint source text into a [`Blueprint`].
///
/// Blank (or whitespace-only) lines are skipped; every other line must be a
/// well-formed step. Parsing is all-or-nothing: diagnostics are collected
/// for every malformed line and returned together, and no partially valid
/// blueprint is ever produced.
///
/// # Errors
///
/// Returns a [`ParseError`] wrapping one diagnostic per offending line:
/// malformed step headers (`E001`), malformed actions (`E002`) and empty
/// steps (`E003`).
pub fn parse(source: &str) -> Result<Blueprint, ParseError> {
    let blueprint = parser::parse_source(source)?;

    debug!(steps_count = blueprint.steps().len(); "Blueprint parsed");
    trace!(blueprint:?; "Parsed blueprint");

    Ok(blueprint)
}
