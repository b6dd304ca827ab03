// blueprint/src/commands/inspect.rs
//
// USE CASE: Tabular overview of the assets of a document.

use blueprint_core::{Asset, Document};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use super::load_or_exit;
use crate::cli::DocumentArgs;

pub fn execute(args: &DocumentArgs) -> anyhow::Result<()> {
    let (path, document) = load_or_exit(args);

    println!("\n🔍 Inspecting: '{}'", path.display());
    println!("{}", asset_table(&document));

    for partition in document.partitions() {
        match partition.config().start_date() {
            Some(start) => println!(
                "   ➜ partition '{}' ({} from {})",
                partition.name(),
                partition.kind(),
                start
            ),
            None => println!("   ➜ partition '{}' ({})", partition.name(), partition.kind()),
        }
    }
    Ok(())
}

fn asset_table(document: &Document) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Asset",
        "Depends on",
        "Partitions",
        "Schedule",
        "Resources",
        "Checks",
    ]);

    for asset in document.assets() {
        table.add_row(vec![
            asset.name().to_string(),
            asset.depends_on().unwrap_or("-").to_string(),
            or_dash(asset.partitions().join(", ")),
            asset.schedule().to_string(),
            or_dash(asset.resources().join(", ")),
            or_dash(check_summary(asset)),
        ]);
    }
    table
}

fn check_summary(asset: &Asset) -> String {
    asset
        .checks()
        .iter()
        .map(|check| match check.config().column() {
            Some(column) => format!("{}({})", check.kind(), column),
            None => check.kind().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_dash(value: String) -> String {
    if value.is_empty() { "-".to_string() } else { value }
}
