// blueprint/src/commands/fmt.rs
//
// USE CASE: Canonical form (aliases resolved, defaults written out).

use blueprint_core::application::normalize_file;
use blueprint_core::infrastructure::config::locate_document;
use blueprint_core::BlueprintError;

use super::fail;
use crate::cli::DocumentArgs;

pub fn execute(args: &DocumentArgs, write: bool) -> anyhow::Result<()> {
    let normalized = locate_document(args.file.as_deref(), &args.dir)
        .map_err(BlueprintError::from)
        .and_then(|path| normalize_file(&path, write));

    let normalized = match normalized {
        Ok(normalized) => normalized,
        Err(err) => fail(err),
    };

    if !write {
        print!("{}", normalized.rendered);
    } else if normalized.changed {
        println!("✨ {} rewritten in canonical form", normalized.path.display());
    } else {
        println!("✅ {} already canonical", normalized.path.display());
    }
    Ok(())
}
