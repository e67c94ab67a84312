//! Error and diagnostic system for the blueprint parser.
//!
//! The system is built around the [`Diagnostic`] type: a single error or
//! warning with an optional error code, one or more labeled source spans,
//! and optional help text. Diagnostics for a whole parse run are accumulated
//! by a [`DiagnosticCollector`] and wrapped in a [`ParseError`], so every
//! malformed line is reported at once while the parse as a whole stays
//! all-or-nothing.
//!
//! # Example
//!
//! ```
//! # use sbp_parser::error::{Diagnostic, ErrorCode};
//! # use sbp_parser::Span;
//! let span = Span::new(12..20);
//!
//! let diag = Diagnostic::error("line 2: malformed action `X Foo` in step `Checkout`")
//!     .with_code(ErrorCode::E002)
//!     .with_label(span, "unknown lane abbreviation `X`")
//!     .with_help("valid lane abbreviations are C, F, B and P");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
