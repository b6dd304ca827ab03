// blueprint-core/src/domain/config/integrity.rs
//
// Cross-entity passes over an assembled document. Every pass records into the same
// report; nothing short-circuits, so one run yields every defect.

use std::collections::HashSet;
use tracing::{debug, instrument};

use super::document::Document;
use crate::domain::error::{ConfigError, ErrorReport};
use crate::domain::graph::GraphSolver;

#[instrument(skip_all, fields(assets = document.assets().len()))]
pub fn validate_document(document: Document) -> Result<Document, ErrorReport> {
    let mut report = ErrorReport::new();

    unique_partition_names(&document, &mut report);
    unique_asset_names(&document, &mut report);
    dependency_closure(&document, &mut report);
    partition_reference_closure(&document, &mut report);

    // Cycles are only meaningful once every edge points at a unique, existing asset.
    if report.is_empty() {
        dependency_cycles(&document, &mut report);
    }

    debug!(errors = report.len(), "Integrity passes finished");
    report.into_result(document)
}

/// One `DuplicateName` per repeated name, in order of first repetition.
fn duplicates<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    names
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .collect()
}

pub fn unique_partition_names(document: &Document, report: &mut ErrorReport) {
    for name in duplicates(document.partitions().iter().map(|p| p.name())) {
        report.push(ConfigError::DuplicateName {
            entity: "partition".to_string(),
            name: name.to_string(),
        });
    }
}

pub fn unique_asset_names(document: &Document, report: &mut ErrorReport) {
    for name in duplicates(document.assets().iter().map(|a| a.name())) {
        report.push(ConfigError::DuplicateName {
            entity: "asset".to_string(),
            name: name.to_string(),
        });
    }
}

/// `depends_on` must name another asset. An asset naming itself is reported too:
/// self-loops are not a supported dependency.
pub fn dependency_closure(document: &Document, report: &mut ErrorReport) {
    let names: HashSet<&str> = document.assets().iter().map(|a| a.name()).collect();

    for asset in document.assets() {
        let Some(dependency) = asset.depends_on() else {
            continue;
        };
        if dependency == asset.name() || !names.contains(dependency) {
            report.push(ConfigError::DanglingReference {
                entity: "asset".to_string(),
                field: "depends_on".to_string(),
                from: asset.name().to_string(),
                to: dependency.to_string(),
            });
        }
    }
}

/// Every partition an asset lists must be declared. Without a `partitions` section
/// any reference dangles.
pub fn partition_reference_closure(document: &Document, report: &mut ErrorReport) {
    let names: HashSet<&str> = document.partitions().iter().map(|p| p.name()).collect();

    for asset in document.assets() {
        for partition in asset.partitions() {
            if !names.contains(partition.as_str()) {
                report.push(ConfigError::DanglingReference {
                    entity: "asset".to_string(),
                    field: "partitions".to_string(),
                    from: asset.name().to_string(),
                    to: partition.clone(),
                });
            }
        }
    }
}

pub fn dependency_cycles(document: &Document, report: &mut ErrorReport) {
    for cycle in GraphSolver::find_cycles(document) {
        report.push(ConfigError::CircularDependency { assets: cycle });
    }
}
