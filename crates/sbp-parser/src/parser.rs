//! Line parser for the blueprint DSL.
//!
//! Every non-blank input line describes one step:
//!
//! ```text
//! StepName:C Label/F Label//B Label|P Label
//! ```
//!
//! A single `:` separates the step name from its action chain. The chain is
//! tokenized on the separators `//`, `/` and `|` (longest match first, so a
//! two-way separator is never read as two one-way ones); each token between
//! separators is one action of the form `<lane abbreviation> <label>`.
//!
//! Lines are parsed independently and their diagnostics collected, so one
//! run reports every malformed line. Any error diagnostic fails the whole
//! parse; a partially valid [`Blueprint`] never escapes.

use winnow::{
    Parser as _,
    combinator::{alt, opt},
    error::ModalResult,
    stream::LocatingSlice,
    token::{literal, take_till},
};

use sbp_core::{
    blueprint::{Action, Blueprint, ConnectorKind, Step},
    lane::Lane,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

type Input<'a> = LocatingSlice<&'a str>;

/// Parse a complete source document into a [`Blueprint`].
pub(crate) fn parse_source(source: &str) -> Result<Blueprint, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut steps = Vec::new();

    let mut line_start = 0usize;
    for (index, raw_line) in source.split('\n').enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        // Blank lines are permitted between steps for readability.
        if !line.is_empty() {
            // Byte offset of the trimmed line within the whole source, so
            // diagnostic spans point into the original document.
            let base = line_start + (raw_line.len() - raw_line.trim_start().len());

            match parse_step(line, line_number, base) {
                Ok(step) => steps.push(step),
                Err(diagnostic) => collector.emit(diagnostic),
            }
        }

        line_start += raw_line.len() + 1;
    }

    collector.finish()?;
    Ok(Blueprint::new(steps))
}

/// Parse one trimmed, non-empty line into a [`Step`].
///
/// `base` is the byte offset of `line` within the full source.
fn parse_step(line: &str, line_number: usize, base: usize) -> Result<Step, Diagnostic> {
    let line_span = Span::new(base..base + line.len());

    // Exactly one `:` separates the step name from the action chain.
    let mut colons = line.char_indices().filter(|(_, ch)| *ch == ':');
    let Some((colon_at, _)) = colons.next() else {
        return Err(Diagnostic::error(format!(
            "line {line_number}: missing `:` between step name and actions: `{}`",
            excerpt(line)
        ))
        .with_code(ErrorCode::E001)
        .with_label(line_span, "expected `Step name:C Label/F Label/...`")
        .with_help("separate the step name from its action chain with a single `:`"));
    };
    if let Some((second_at, _)) = colons.next() {
        return Err(Diagnostic::error(format!(
            "line {line_number}: more than one `:` in step line"
        ))
        .with_code(ErrorCode::E001)
        .with_label(
            Span::new(base + second_at..base + second_at + 1),
            "unexpected second `:`",
        )
        .with_secondary_label(
            Span::new(base + colon_at..base + colon_at + 1),
            "step name ends at this `:`",
        ));
    }

    let name = line[..colon_at].trim();
    if name.is_empty() {
        return Err(Diagnostic::error(format!(
            "line {line_number}: step name before `:` is empty"
        ))
        .with_code(ErrorCode::E001)
        .with_label(Span::new(base..base + colon_at + 1), "missing step name"));
    }

    let chain = &line[colon_at + 1..];
    if chain.trim().is_empty() {
        return Err(Diagnostic::error(format!(
            "line {line_number}: step `{name}` has no actions"
        ))
        .with_code(ErrorCode::E003)
        .with_label(line_span, "empty action chain")
        .with_help("add at least one action after the `:`, e.g. `C Browse catalog`"));
    }

    let actions = parse_actions(chain, name, line_number, base + colon_at + 1)?;
    Ok(Step::new(name, actions))
}

/// Parse an action chain, recording on each action the connector that
/// followed it in the source. The final action keeps `None`.
fn parse_actions(
    chain: &str,
    step_name: &str,
    line_number: usize,
    base: usize,
) -> Result<Vec<Action>, Diagnostic> {
    let mut input = LocatingSlice::new(chain);
    let mut actions = Vec::new();

    loop {
        let (raw, range) = action_text
            .with_span()
            .parse_next(&mut input)
            .expect("action_text matches any input, including empty");
        let span = Span::new(base + range.start..base + range.end);
        let action = parse_action(raw, span, step_name, line_number)?;

        match opt(connector)
            .parse_next(&mut input)
            .expect("opt() never fails")
        {
            Some(kind) => actions.push(action.with_connector(kind)),
            // End of line: no separator follows the last action.
            None => {
                actions.push(action);
                break;
            }
        }
    }

    Ok(actions)
}

/// Raw action text: everything up to the next separator or end of line.
fn action_text<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_till(0.., ['/', '|']).parse_next(input)
}

/// A connector separator. `//` must be tried before `/` so a two-way
/// separator is never split into two one-way ones.
fn connector(input: &mut Input<'_>) -> ModalResult<ConnectorKind> {
    alt((
        literal("//").value(ConnectorKind::TwoWay),
        '/'.value(ConnectorKind::OneWay),
        '|'.value(ConnectorKind::None),
    ))
    .parse_next(input)
}

/// Shorten a line for inclusion in a diagnostic message.
fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{head}…")
    }
}

/// Validate one action token: a lane abbreviation, whitespace, then a
/// non-empty label.
fn parse_action(
    raw: &str,
    span: Span,
    step_name: &str,
    line_number: usize,
) -> Result<Action, Diagnostic> {
    let malformed = |detail: &str| {
        Diagnostic::error(format!(
            "line {line_number}: malformed action `{}` in step `{step_name}`: {detail}",
            raw.trim()
        ))
        .with_code(ErrorCode::E002)
    };

    let text = raw.trim();
    let Some(abbrev) = text.chars().next() else {
        return Err(malformed("empty action text")
            .with_label(span, "expected `<lane> <label>` here")
            .with_help("every separator must sit between two actions"));
    };

    let Some(lane) = Lane::from_abbrev(abbrev) else {
        return Err(malformed(&format!("unknown lane abbreviation `{abbrev}`"))
            .with_label(span, "action must start with a lane abbreviation")
            .with_help("valid lane abbreviations are C, F, B and P"));
    };

    let rest = &text[abbrev.len_utf8()..];
    if rest.is_empty() {
        return Err(malformed("missing label after the lane abbreviation")
            .with_label(span, "label is missing")
            .with_help(format!("write the action as `{abbrev} <label>`")));
    }
    if !rest.starts_with(|ch: char| ch.is_whitespace()) {
        return Err(malformed("expected whitespace after the lane abbreviation")
            .with_label(span, "no whitespace between abbreviation and label")
            .with_help(format!("write the action as `{abbrev} <label>`")));
    }

    // `text` carries no trailing whitespace, so the label cannot be empty.
    Ok(Action::new(lane, rest.trim_start()))
}
