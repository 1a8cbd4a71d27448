//! rewrex - composable regex grammars and a match/rewrite engine
//!
//! Grammar fragments are composed into named-group patterns, matched against
//! a text buffer and rewritten group by group through templates. The
//! ActionScript translator is built on top of these pieces.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod grammar;
pub mod output;
pub mod paths;
pub mod rewrite;
pub mod sources;
pub mod translate;
