//! Translators built on the rewrite engine
//!
//! A translator owns a set of rewrite productions and runs them over a
//! source buffer in a fixed order.

mod actionscript;
mod types;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rewrite::RewriteError;

pub use actionscript::ActionScriptTranslator;
pub use types::{FALLBACK_TYPE, TypeMap};

/// A translator rewrites a whole source buffer in place
pub trait Translator: Send + Sync {
    /// Get the name of this translator (e.g., "actionscript")
    fn name(&self) -> &str;

    /// Rewrite `source` in place
    ///
    /// On error `source` is left unchanged.
    fn translate(&self, source: &mut String) -> Result<TranslationReport, RewriteError>;

    /// Rewrite a copy of `source`
    fn translate_str(&self, source: &str) -> Result<(String, TranslationReport), RewriteError> {
        let mut buffer = source.to_string();
        let report = self.translate(&mut buffer)?;
        Ok((buffer, report))
    }
}

/// Error returned when parsing an unknown production name
#[derive(Debug, Error)]
#[error("unknown production: {0} (expected methods or variables)")]
pub struct UnknownProduction(String);

/// A group of declarations a translator can rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Production {
    /// Method declarations and their parameter lists
    Methods,
    /// Field and constant declarations
    Variables,
}

impl Production {
    /// All productions, in the order they run
    pub const ALL: [Self; 2] = [Self::Methods, Self::Variables];
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Methods => write!(f, "methods"),
            Self::Variables => write!(f, "variables"),
        }
    }
}

impl FromStr for Production {
    type Err = UnknownProduction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "methods" | "method" => Ok(Self::Methods),
            "variables" | "variable" | "vars" => Ok(Self::Variables),
            _ => Err(UnknownProduction(s.to_string())),
        }
    }
}

/// Number of rewrites one production made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// The production that ran
    pub production: Production,
    /// Replacements committed
    pub rewrites: usize,
}

/// Outcome of translating one buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    /// One entry per production that ran, in run order
    pub passes: Vec<PassReport>,
}

impl TranslationReport {
    /// Total replacements across all passes
    #[must_use]
    pub fn total(&self) -> usize {
        self.passes.iter().map(|p| p.rewrites).sum()
    }

    /// Replacements made by `production`
    #[must_use]
    pub fn rewrites(&self, production: Production) -> usize {
        self.passes.iter().filter(|p| p.production == production).map(|p| p.rewrites).sum()
    }
}
