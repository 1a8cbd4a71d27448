//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Translated source goes to
//! stdout; human summaries go to stderr so the two can be piped apart.

use colored::Colorize;
use serde::Serialize;

use crate::translate::PassReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a translate operation
#[derive(Debug, Default, Serialize)]
pub struct TranslateResult {
    /// One entry per translated file, in input order
    pub files: Vec<FileReport>,
    /// Replacements across all files
    pub total_rewrites: usize,
}

/// Translation outcome for one file
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The source file
    pub path: String,
    /// Where the translation was written, if it was written to a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
    /// Per-production replacement counts
    pub passes: Vec<PassReport>,
    /// Replacements in this file
    pub rewrites: usize,
    /// Translated text, when it was not written to a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated: Option<String>,
}

/// Composed pattern sources for the `grammar` command
#[derive(Debug, Serialize)]
pub struct GrammarListing {
    /// Listed productions
    pub productions: Vec<ProductionSource>,
}

/// One composed production
#[derive(Debug, Serialize)]
pub struct ProductionSource {
    /// Production name (e.g., "`variable_declaration`")
    pub name: String,
    /// Regular expression source
    pub pattern: String,
    /// Named groups, in declaration order
    pub groups: Vec<String>,
}

impl TranslateResult {
    /// Add a file report and update the total
    pub fn push(&mut self, report: FileReport) {
        self.total_rewrites += report.rewrites;
        self.files.push(report);
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let headers = self.files.iter().filter(|f| f.translated.is_some()).count() > 1;

        for file in &self.files {
            if let Some(text) = &file.translated {
                if headers {
                    println!("// ==> {} <==", file.path);
                }
                print!("{text}");
                if headers && !text.ends_with('\n') {
                    println!();
                }
            }

            let counts = file
                .passes
                .iter()
                .map(|p| format!("{} {}", p.rewrites, p.production))
                .collect::<Vec<_>>()
                .join(", ");
            let target =
                file.written_to.as_deref().map(|to| format!(" -> {to}")).unwrap_or_default();
            eprintln!("{} {}{target} ({counts})", "translated".green().bold(), file.path);
        }

        if self.files.is_empty() {
            eprintln!("{}", "No source files found.".yellow());
        } else {
            eprintln!(
                "{} {} declaration(s) in {} file(s)",
                "Rewrote".bold(),
                self.total_rewrites,
                self.files.len()
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl GrammarListing {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        // A single production prints bare so it can be piped.
        if let [only] = self.productions.as_slice() {
            println!("{}", only.pattern);
            return;
        }

        for production in &self.productions {
            println!("{}", production.name.bold());
            if !production.groups.is_empty() {
                println!("  groups: {}", production.groups.join(", "));
            }
            println!("  {}\n", production.pattern);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
