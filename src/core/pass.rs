//! Document pass: runs the locator and rewriter once per severity.
//!
//! Stages run in the fixed order of [`Severity::ALL`]; each stage rescans the
//! output of the previous one. Edits are reported with line numbers of the
//! original document, mapped back through earlier stages.

use std::sync::LazyLock;

use super::{
    locator::{CallPattern, DEFAULT_LOGGER_FIELD, Severity},
    rewriter::RewrittenCall,
};

static DEFAULT_REWRITER: LazyLock<Rewriter> =
    LazyLock::new(|| Rewriter::new(DEFAULT_LOGGER_FIELD).unwrap());

/// Rewrite a document with the default logger field name.
///
/// Returns the new text and whether it differs from `document`.
pub fn rewrite(document: &str) -> (String, bool) {
    let result = DEFAULT_REWRITER.rewrite(document);
    (result.text, result.changed)
}

/// One call-site that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteEdit {
    pub severity: Severity,
    /// 1-based line of the call in the original document.
    pub line: usize,
    pub original: String,
    pub replacement: String,
}

/// Outcome of a full four-stage pass over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRewrite {
    pub text: String,
    pub changed: bool,
    /// Applied edits, ordered by line.
    pub edits: Vec<RewriteEdit>,
}

/// A replacement made by one stage, in that stage's input coordinates.
#[derive(Debug, Clone, Copy)]
struct Splice {
    start: usize,
    old_len: usize,
    new_len: usize,
}

#[derive(Debug, Clone)]
pub struct Rewriter {
    patterns: Vec<CallPattern>,
}

impl Rewriter {
    pub fn new(logger_field: &str) -> Result<Self, regex::Error> {
        let patterns = Severity::ALL
            .iter()
            .map(|&severity| CallPattern::new(logger_field, severity))
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub fn rewrite(&self, document: &str) -> DocumentRewrite {
        let mut text = document.to_string();
        let mut stages: Vec<Vec<Splice>> = Vec::with_capacity(self.patterns.len());
        let mut edits = Vec::new();

        for pattern in &self.patterns {
            let mut output = String::with_capacity(text.len());
            let mut splices = Vec::new();
            let mut last = 0;

            for call in pattern.find_calls(&text) {
                let Some(rewritten) = RewrittenCall::from_call(&call) else {
                    continue;
                };
                let replacement = rewritten.to_string();

                let origin = stages
                    .iter()
                    .rev()
                    .fold(call.span.start, |offset, stage| to_input_offset(offset, stage));

                output.push_str(&text[last..call.span.start]);
                output.push_str(&replacement);
                last = call.span.end;

                splices.push(Splice {
                    start: call.span.start,
                    old_len: call.span.len(),
                    new_len: replacement.len(),
                });
                edits.push(RewriteEdit {
                    severity: pattern.severity(),
                    line: line_at(document, origin),
                    original: call.full_text.to_string(),
                    replacement,
                });
            }

            if splices.is_empty() {
                continue;
            }
            output.push_str(&text[last..]);
            text = output;
            stages.push(splices);
        }

        edits.sort_by_key(|edit| edit.line);
        let changed = text != document;

        DocumentRewrite {
            text,
            changed,
            edits,
        }
    }
}

/// Map an offset in a stage's output back to the stage's input.
///
/// Offsets inside a replaced region map to the start of that region.
fn to_input_offset(offset: usize, splices: &[Splice]) -> usize {
    let mut input_pos = 0;
    let mut output_pos = 0;

    for splice in splices {
        let out_start = output_pos + (splice.start - input_pos);
        if offset < out_start {
            break;
        }
        if offset < out_start + splice.new_len {
            return splice.start;
        }
        input_pos = splice.start + splice.old_len;
        output_pos = out_start + splice.new_len;
    }

    input_pos + (offset - output_pos)
}

fn line_at(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
