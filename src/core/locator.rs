//! Call-site locator.
//!
//! Finds structured logger calls of the shape
//!
//! ```text
//! <receiver>.logger.<Severity>("message", map[string]interface{}{ <body> })
//! ```
//!
//! Recognition is purely textual. Anything that does not fit the shape exactly
//! (non-literal message, a mapping held in a variable, braces inside the body,
//! extra arguments after the mapping) is not matched and stays untouched.

use std::{fmt, ops::Range};

use regex::Regex;

/// Default name of the logger field on the receiver.
pub const DEFAULT_LOGGER_FIELD: &str = "logger";

/// Log level selecting which call pattern is targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Debug,
    Warning,
    Error,
}

impl Severity {
    /// All severities in the order the document pass applies them.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warning,
        Severity::Error,
    ];

    /// Method name as it appears at the call-site.
    pub fn method_name(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// A recognized call-site, borrowing from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMatch<'a> {
    pub severity: Severity,
    /// Byte range of `full_text` within the scanned text.
    pub span: Range<usize>,
    /// The entire call, from the receiver up to and including the closing `)`.
    /// A trailing comma after the mapping literal is part of the call.
    pub full_text: &'a str,
    pub receiver: &'a str,
    pub logger: &'a str,
    /// Literal message argument, without quotes.
    pub message: &'a str,
    /// Raw text between the mapping literal's braces.
    pub fields_body: &'a str,
}

/// Compiled pattern for one severity.
#[derive(Debug, Clone)]
pub struct CallPattern {
    severity: Severity,
    logger: String,
    regex: Regex,
}

impl CallPattern {
    pub fn new(logger_field: &str, severity: Severity) -> Result<Self, regex::Error> {
        let pattern = format!(
            concat!(
                r#"(?P<receiver>\w+)\.{logger}\.{method}\(\s*"(?P<message>[^"]+)"\s*,\s*"#,
                r#"map\[string\]\s*(?:interface\s*\{{\s*\}}|any)\s*"#,
                r#"\{{(?P<body>[^{{}}]+)\}}\s*,?\s*\)"#,
            ),
            logger = regex::escape(logger_field),
            method = severity.method_name(),
        );

        Ok(Self {
            severity,
            logger: logger_field.to_string(),
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Find all non-overlapping call-sites, left to right.
    pub fn find_calls<'a>(&'a self, text: &'a str) -> Vec<CallMatch<'a>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(CallMatch {
                    severity: self.severity,
                    span: whole.range(),
                    full_text: whole.as_str(),
                    receiver: caps.name("receiver")?.as_str(),
                    logger: &self.logger,
                    message: caps.name("message")?.as_str(),
                    fields_body: caps.name("body")?.as_str(),
                })
            })
            .collect()
    }
}
