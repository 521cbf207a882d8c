//! gologfix - rewrite structured Go logger calls into format-string calls
//!
//! Turns calls like
//!
//! ```text
//! s.logger.Info("saved file", map[string]interface{}{ "fileID": fileID, "size": len(data) })
//! ```
//!
//! into
//!
//! ```text
//! s.logger.Info("saved file, fileID: %s, size: %d", fileID, len(data))
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Rewrite engine (call-site locator, field rewriter, document pass) and file scanning

pub mod cli;
pub mod config;
pub mod core;
