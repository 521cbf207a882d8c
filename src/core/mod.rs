//! Rewrite engine.
//!
//! ## Module Structure
//!
//! - `locator`: Finds structured logger call-sites per severity
//! - `fields`: Parses mapping bodies into fields and infers format verbs
//! - `rewriter`: Builds the positional format call for one call-site
//! - `pass`: Runs the four severity stages over a document
//! - `file_scanner`: Selects the source files to rewrite
//!
//! Everything except `file_scanner` is pure text-to-text and never touches the
//! filesystem.

pub mod fields;
pub mod file_scanner;
pub mod locator;
pub mod pass;
pub mod rewriter;

pub use fields::{Field, FormatVerb, parse_fields};
pub use locator::{CallMatch, CallPattern, DEFAULT_LOGGER_FIELD, Severity};
pub use pass::{DocumentRewrite, RewriteEdit, Rewriter, rewrite};
pub use rewriter::RewrittenCall;
