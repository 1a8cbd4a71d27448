//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use rewrex::output::OutputMode;
use rewrex::translate::Production;

/// rewrex - Rewrite declarations with composable regex grammars
#[derive(Parser, Debug)]
#[command(
    name = "rewrex",
    version,
    about = "Rewrite declarations with composable regex grammars",
    long_about = "Translate ActionScript class members into C# declarations.\n\n\
                  Productions are composed from small regex fragments, matched\n\
                  left to right and rewritten group by group through templates."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate source files or directories
    Translate {
        /// Files or directories to translate
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write the translation here (single input file only)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite each input file with its translation
        #[arg(long)]
        in_place: bool,

        /// Only run these productions: methods, variables
        #[arg(short, long = "production", value_delimiter = ',')]
        productions: Vec<Production>,

        /// Select files in directories by glob instead of extension
        #[arg(long)]
        include: Option<String>,

        /// Config file (defaults to ./rewrex.toml, then ~/.rewrex/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print composed grammar patterns
    Grammar {
        /// Production to print (all when omitted)
        name: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Translate {
            paths,
            output,
            in_place,
            productions,
            include,
            config,
        }) => commands::translate(
            &commands::TranslateArgs {
                paths,
                output,
                in_place,
                productions,
                include,
                config,
            },
            output_mode,
        ),
        Some(Command::Grammar { name }) => commands::grammar(name.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": rewrex::VERSION
                    })
                );
            } else {
                println!("rewrex v{}", rewrex::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": rewrex::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rewrex v{}", rewrex::VERSION);
                println!("\nRun 'rewrex --help' for usage");
            }
            Ok(())
        },
    }
}
