//! rewrex - rewrite source declarations with composable regex grammars
//!
//! Translates ActionScript class members into C# declarations and prints the
//! composed grammar patterns it uses.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod cli;
mod commands;

/// Main entry point for the rewrex CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
