//! Field rewriter: turns a structured call into a positional format call.

use std::fmt;

use super::{
    fields::{Field, FormatVerb, parse_fields},
    locator::{CallMatch, Severity},
};

/// Replacement for a matched call-site.
///
/// `args` holds one expression per placeholder appended to `message`, in the
/// textual order of the original mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenCall<'a> {
    pub receiver: &'a str,
    pub logger: &'a str,
    pub severity: Severity,
    pub message: String,
    pub args: Vec<String>,
}

impl<'a> RewrittenCall<'a> {
    /// Build the replacement for `call`, or `None` when its mapping body has no
    /// parseable fields and the call should stay as it is.
    pub fn from_call(call: &CallMatch<'a>) -> Option<Self> {
        let fields = parse_fields(call.fields_body);
        if fields.is_empty() {
            return None;
        }

        let mut message = call.message.to_string();
        let mut args = Vec::with_capacity(fields.len());
        for Field { key, expression } in fields {
            let verb = FormatVerb::infer(&expression);
            message.push_str(&format!(", {}: {}", key, verb));
            args.push(expression);
        }

        Some(Self {
            receiver: call.receiver,
            logger: call.logger,
            severity: call.severity,
            message,
            args,
        })
    }
}

impl fmt::Display for RewrittenCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}(\"{}\"",
            self.receiver, self.logger, self.severity, self.message
        )?;
        if !self.args.is_empty() {
            write!(f, ", {}", self.args.join(", "))?;
        }
        f.write_str(")")
    }
}
