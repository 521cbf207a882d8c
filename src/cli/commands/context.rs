use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use super::super::{args::CommonArgs, report};
use crate::{
    config::{Config, load_config},
    core::{
        DocumentRewrite, Rewriter,
        file_scanner::{ScanOptions, scan_files},
    },
};

/// Rewrite result for one file.
pub struct FileRewrite {
    /// Path relative to the working directory, for display.
    pub path: String,
    pub rewrite: DocumentRewrite,
}

/// A file that could not be read or written.
pub struct FileFailure {
    pub path: String,
    pub error: anyhow::Error,
}

/// Results of processing every selected file, sorted by path.
pub struct RunResults {
    pub rewrites: Vec<FileRewrite>,
    pub failures: Vec<FileFailure>,
}

impl RunResults {
    pub fn files_scanned(&self) -> usize {
        self.rewrites.len() + self.failures.len()
    }

    pub fn changed(&self) -> impl Iterator<Item = &FileRewrite> {
        self.rewrites.iter().filter(|f| f.rewrite.changed)
    }

    pub fn files_changed(&self) -> usize {
        self.changed().count()
    }

    pub fn calls_rewritten(&self) -> usize {
        self.changed().map(|f| f.rewrite.edits.len()).sum()
    }
}

/// Shared state for `fix` and `check`.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`PATHS`, `--logger-field`)
/// 2. `.gologfixrc.json` config file
/// 3. Built-in defaults
pub struct RunContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub files: BTreeSet<String>,
    pub verbose: bool,
    rewriter: Rewriter,
}

impl RunContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::with_root(args, root_dir)
    }

    pub fn with_root(args: &CommonArgs, root_dir: PathBuf) -> Result<Self> {
        let verbose = args.verbose;
        let loaded = load_config(&root_dir)?;
        report::print_config_source(loaded.from_file, verbose);

        let mut config = loaded.config;
        if !args.paths.is_empty() {
            config.includes = args.paths.clone();
        }
        if let Some(field) = &args.logger_field {
            config.logger_field = field.clone();
        }
        config.validate()?;

        let rewriter = Rewriter::new(&config.logger_field)
            .with_context(|| format!("Invalid logger field: \"{}\"", config.logger_field))?;

        let scan_result = scan_files(
            &root_dir,
            &ScanOptions {
                includes: &config.includes,
                ignores: &config.ignores,
                extensions: &config.extensions,
                verbose,
            },
        );
        report::print_skipped_warning(scan_result.skipped_count, verbose);

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            rewriter,
        })
    }

    /// Rewrite every selected file in parallel.
    ///
    /// With `apply`, changed files are written back; unchanged files are never
    /// written.
    pub fn rewrite_all(&self, apply: bool) -> RunResults {
        let outcomes: Vec<(String, Result<DocumentRewrite>)> = self
            .files
            .par_iter()
            .map(|file_path| {
                (
                    self.display_path(file_path),
                    self.rewrite_file(Path::new(file_path), apply),
                )
            })
            .collect();

        let mut rewrites = Vec::new();
        let mut failures = Vec::new();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(rewrite) => rewrites.push(FileRewrite { path, rewrite }),
                Err(error) => failures.push(FileFailure { path, error }),
            }
        }
        rewrites.sort_by(|a, b| a.path.cmp(&b.path));
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        RunResults { rewrites, failures }
    }

    fn rewrite_file(&self, path: &Path, apply: bool) -> Result<DocumentRewrite> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let rewrite = self.rewriter.rewrite(&content);

        if apply && rewrite.changed {
            fs::write(path, &rewrite.text)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }

        Ok(rewrite)
    }

    fn display_path(&self, file_path: &str) -> String {
        let path = Path::new(file_path);
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
