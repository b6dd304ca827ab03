// blueprint/src/commands/validate.rs
//
// USE CASE: Validate a configuration document (and optionally its resources).

use blueprint_core::application::check_resources;
use blueprint_core::infrastructure::adapters::catalog::StaticCatalog;
use blueprint_core::infrastructure::config::to_json;

use super::{fail, load_or_exit};
use crate::cli::{DocumentArgs, OutputFormat};

pub fn execute(
    args: &DocumentArgs,
    format: OutputFormat,
    resources: Vec<String>,
) -> anyhow::Result<()> {
    let (path, document) = load_or_exit(args);

    // Resources are only checked when the caller says what exists at runtime.
    if !resources.is_empty() {
        let catalog = StaticCatalog::new(resources);
        let missing = check_resources(&document, &catalog);
        if !missing.is_empty() {
            fail(missing.into());
        }
    }

    match format {
        OutputFormat::Json => println!("{}", to_json(&document)?),
        OutputFormat::Text => {
            let checks: usize = document.assets().iter().map(|a| a.checks().len()).sum();
            println!("✅ {} is valid", path.display());
            println!("   Partitions: {}", document.partitions().len());
            println!("   Assets: {}", document.assets().len());
            println!("   Checks: {}", checks);
        }
    }

    Ok(())
}
