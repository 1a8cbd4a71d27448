//! Configuration management
//!
//! Config is read from `rewrex.toml` in the working directory, falling back
//! to `~/.rewrex/config.toml`. A missing file means defaults.
//!
//! ```toml
//! [translate]
//! productions = ["methods", "variables"]
//! extensions = ["as"]
//!
//! [types]
//! Number = "float"
//!
//! [limits]
//! max_matches = 10000
//! regex_size_limit = 10485760
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::grammar::GrammarError;
use crate::paths;
use crate::rewrite::{DEFAULT_SIZE_LIMIT, Limits};
use crate::translate::{ActionScriptTranslator, Production, TypeMap};

/// rewrex configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Translation settings
    #[serde(default)]
    pub translate: TranslateConfig,
    /// Extra type mappings; these override the built-in ones
    #[serde(default)]
    pub types: BTreeMap<String, String>,
    /// Bounds for untrusted input
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// `[translate]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Productions to run
    #[serde(default = "default_productions")]
    pub productions: Vec<Production>,
    /// File extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_productions() -> Vec<Production> {
    Production::ALL.to_vec()
}

fn default_extensions() -> Vec<String> {
    vec!["as".to_string()]
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            productions: default_productions(),
            extensions: default_extensions(),
        }
    }
}

/// `[limits]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum replacements per production pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_matches: Option<usize>,
    /// Maximum compiled pattern size, in bytes
    #[serde(default = "default_regex_size_limit")]
    pub regex_size_limit: usize,
}

const fn default_regex_size_limit() -> usize {
    DEFAULT_SIZE_LIMIT
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_matches: None,
            regex_size_limit: default_regex_size_limit(),
        }
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read config from `path`
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load config for a run in `project_dir`
    ///
    /// `explicit` must exist. Otherwise the project config is tried, then the
    /// global one, then defaults.
    pub fn load(explicit: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            debug!("loading config from {}", path.display());
            return Self::from_file(path);
        }

        match Self::discover(project_dir) {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Self::from_file(&path)
            },
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// First existing config file for `project_dir`
    #[must_use]
    pub fn discover(project_dir: &Path) -> Option<PathBuf> {
        [paths::project_config(project_dir), paths::global_config()]
            .into_iter()
            .find(|path| path.is_file())
    }

    /// Built-in type map extended with `[types]`
    #[must_use]
    pub fn type_map(&self) -> TypeMap {
        let mut types = TypeMap::default();
        types.extend(self.types.iter().map(|(from, to)| (from.clone(), to.clone())));
        types
    }

    /// Engine limits from `[limits]`
    #[must_use]
    pub const fn limits(&self) -> Limits {
        Limits {
            max_matches: self.limits.max_matches,
            regex_size_limit: self.limits.regex_size_limit,
        }
    }

    /// Build a translator for this config
    pub fn translator(&self) -> Result<ActionScriptTranslator, GrammarError> {
        ActionScriptTranslator::with_options(self.type_map(), self.limits())
            .map(|translator| translator.with_productions(self.translate.productions.clone()))
    }
}
