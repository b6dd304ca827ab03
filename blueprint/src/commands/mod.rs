// blueprint/src/commands/mod.rs

pub mod fmt;
pub mod inspect;
pub mod plan;
pub mod validate;

use std::path::PathBuf;
use tracing::debug;

use blueprint_core::infrastructure::config::{load_document, locate_document};
use blueprint_core::{BlueprintError, Document};

use crate::cli::DocumentArgs;

/// Locates and validates the document, or prints every error and exits with 1.
pub fn load_or_exit(args: &DocumentArgs) -> (PathBuf, Document) {
    let loaded = locate_document(args.file.as_deref(), &args.dir)
        .map_err(BlueprintError::from)
        .and_then(|path| {
            debug!(path = ?path, "Document located");
            load_document(&path).map(|document| (path, document))
        });

    match loaded {
        Ok(loaded) => loaded,
        Err(err) => fail(err),
    }
}

/// Prints every collected error (or the miette diagnostic of an IO/YAML failure) and
/// exits with 1.
pub fn fail(err: BlueprintError) -> ! {
    match err.report() {
        Some(report) => {
            eprintln!("\n❌ {} error(s) found:", report.len());
            for error in report {
                eprintln!("   ❌ {}", error);
            }
        }
        None => eprintln!("{:?}", miette::Report::new(err)),
    }
    std::process::exit(1);
}
