use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Selected source files, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Options controlling which files are selected.
pub struct ScanOptions<'a> {
    /// Files, directories or glob patterns, relative to the base directory.
    pub includes: &'a [String],
    /// Glob patterns or literal path prefixes to exclude.
    pub ignores: &'a [String],
    /// Extensions (without dot) accepted when walking directories.
    pub extensions: &'a [String],
    pub verbose: bool,
}

/// Collect the source files selected by `options`.
///
/// - Explicit files are taken as-is.
/// - Directories are walked recursively and filtered by extension.
/// - Glob patterns are expanded; matching files are taken as-is and matching
///   directories are walked.
pub fn scan_files(base_dir: &Path, options: &ScanOptions) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let ignores = IgnoreSet::new(base_dir, options.ignores, options.verbose);

    let mut roots: Vec<PathBuf> = Vec::new();
    for inc in options.includes {
        if is_glob_pattern(inc) {
            let full_pattern = base_dir.join(inc);
            let pattern_str = full_pattern.to_string_lossy();
            match glob(&pattern_str) {
                Ok(entries) => {
                    for entry in entries {
                        match entry {
                            Ok(path) if path.is_dir() => roots.push(path),
                            Ok(path) => {
                                if path.is_file() && !ignores.is_ignored(&path) {
                                    files.insert(path.to_string_lossy().into());
                                }
                            }
                            Err(e) => {
                                skipped_count += 1;
                                if options.verbose {
                                    eprintln!(
                                        "{} Cannot access path: {}",
                                        "warning:".bold().yellow(),
                                        e
                                    );
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    if options.verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
        } else {
            let path = base_dir.join(inc);
            if path.is_file() {
                if !ignores.is_ignored(&path) {
                    files.insert(path.to_string_lossy().into());
                }
            } else if path.is_dir() {
                roots.push(path);
            } else if options.verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }

    for dir in roots {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if options.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if ignores.is_ignored(path) {
                continue;
            }

            if path.is_file() && has_extension(path, options.extensions) {
                files.insert(path.to_string_lossy().into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Ignore patterns split into literal path prefixes and glob patterns.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignores: &[String], verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self
            .literal_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
