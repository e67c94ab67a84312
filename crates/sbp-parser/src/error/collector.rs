//! Collector for accumulating diagnostics over a parse run.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so every bad input line is reported, while the
/// parse as a whole remains all-or-nothing: a single error diagnostic fails
/// the run.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// Returns `Err(ParseError)` with all diagnostics if any error was
    /// emitted; warnings alone do not fail the run.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_empty_collector_is_ok() {
        assert!(DiagnosticCollector::new().finish().is_ok());
    }

    #[test]
    fn test_error_fails_the_run() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("bad line"));
        assert!(collector.finish().is_err());
    }

    #[test]
    fn test_warnings_alone_pass() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("odd but accepted"));
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_all_diagnostics_are_kept() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(
            Diagnostic::error("line 1: malformed action")
                .with_code(ErrorCode::E002)
                .with_label(Span::new(0..5), "here"),
        );
        collector.emit(Diagnostic::error("line 3: empty step").with_code(ErrorCode::E003));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[1].code(), Some(ErrorCode::E003));
    }
}
