//! Source discovery - expands command-line paths into source files
//!
//! Files given explicitly are always taken. Directories are walked, skipping
//! hidden entries, and their files are kept when they match the filter.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use rewrex::sources::{SourceFilter, collect_sources};
//!
//! let filter = SourceFilter::from_extensions(["as"]);
//! let files = collect_sources(&[PathBuf::from("src")], &filter).unwrap();
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while collecting sources
#[derive(Debug, Error)]
pub enum SourceError {
    /// Input path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// `--include` is not a valid glob
    #[error("invalid include pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Which files to pick up when walking a directory
#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    extensions: Vec<String>,
    include: Option<glob::Pattern>,
}

impl SourceFilter {
    /// Match files by extension (without the leading dot)
    pub fn from_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            include: None,
        }
    }

    /// Match files by glob instead of extension
    pub fn with_include(mut self, pattern: &str) -> Result<Self, SourceError> {
        self.include = Some(glob::Pattern::new(pattern)?);
        Ok(self)
    }

    /// Check whether `relative` (a path below a walked directory) is a source
    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        if let Some(include) = &self.include {
            return include.matches_path(relative);
        }
        relative
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

/// Expand `inputs` into a sorted, de-duplicated list of source files
pub fn collect_sources(
    inputs: &[PathBuf],
    filter: &SourceFilter,
) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            return Err(SourceError::NotFound(input.clone()));
        }

        let walker = WalkDir::new(input)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.path() == input || !is_hidden(e));
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(input).unwrap_or(path);
            if filter.matches(relative) {
                files.push(path.to_path_buf());
            }
        }
    }

    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
