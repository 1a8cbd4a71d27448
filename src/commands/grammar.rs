//! Grammar command - print composed production patterns

use anyhow::{Context, anyhow};

use rewrex::grammar::productions;
use rewrex::output::{GrammarListing, OutputMode, ProductionSource};
use rewrex::rewrite::Pattern;

/// Print one production, or all of them
pub fn grammar(name: Option<&str>, output_mode: OutputMode) -> anyhow::Result<()> {
    let names: Vec<&str> = match name {
        Some(name) => vec![name],
        None => productions::NAMES.to_vec(),
    };

    let mut listing = GrammarListing {
        productions: Vec::with_capacity(names.len()),
    };
    for name in names {
        let fragment = productions::by_name(name)
            .ok_or_else(|| {
                anyhow!(
                    "unknown production: {name} (expected one of: {})",
                    productions::NAMES.join(", ")
                )
            })?
            .with_context(|| format!("failed to compose {name}"))?;
        let pattern = Pattern::compile(name, &fragment)?;

        listing.productions.push(ProductionSource {
            name: name.to_string(),
            pattern: pattern.as_str().to_string(),
            groups: pattern.groups().to_vec(),
        });
    }

    listing.render(output_mode);
    Ok(())
}
