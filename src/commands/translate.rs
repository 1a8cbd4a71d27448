//! Translate command - rewrite source files

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use log::debug;

use rewrex::config::Config;
use rewrex::output::{FileReport, OutputMode, TranslateResult};
use rewrex::sources::{SourceFilter, collect_sources};
use rewrex::translate::{Production, Translator};

/// Arguments of `rewrex translate`
#[derive(Debug)]
pub struct TranslateArgs {
    /// Files or directories to translate
    pub paths: Vec<PathBuf>,
    /// Output file for a single input
    pub output: Option<PathBuf>,
    /// Overwrite inputs
    pub in_place: bool,
    /// Productions overriding the config
    pub productions: Vec<Production>,
    /// Glob selecting files in directories
    pub include: Option<String>,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// Translate every source named by `args`
pub fn translate(args: &TranslateArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::load(args.config.as_deref(), &cwd)?;
    if !args.productions.is_empty() {
        config.translate.productions.clone_from(&args.productions);
    }

    let translator = config.translator().context("failed to build translator")?;
    debug!("translator {} with productions {:?}", translator.name(), translator.productions());

    let mut filter = SourceFilter::from_extensions(config.translate.extensions.iter().cloned());
    if let Some(include) = &args.include {
        filter = filter.with_include(include)?;
    }
    let files = collect_sources(&args.paths, &filter)?;

    if args.output.is_some() && files.len() != 1 {
        bail!("--output needs exactly one input file, found {}", files.len());
    }

    let mut result = TranslateResult::default();
    for path in &files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let (translated, report) = translator
            .translate_str(&source)
            .with_context(|| format!("failed to translate {}", path.display()))?;
        debug!("{}: {} rewrite(s)", path.display(), report.total());

        let target = args.output.as_ref().or_else(|| args.in_place.then_some(path));
        if let Some(target) = target {
            fs::write(target, &translated)
                .with_context(|| format!("failed to write {}", target.display()))?;
        }

        result.push(FileReport {
            path: path.display().to_string(),
            written_to: target.map(|t| t.display().to_string()),
            rewrites: report.total(),
            passes: report.passes,
            translated: target.is_none().then_some(translated),
        });
    }

    result.render(output_mode);
    Ok(())
}
