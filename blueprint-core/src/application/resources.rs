// blueprint-core/src/application/resources.rs
//
// USE CASE: confirm that every resource an asset names is provided at runtime.

use crate::domain::config::Document;
use crate::domain::error::{ConfigError, ErrorReport};
use crate::ports::resources::ResourceCatalog;

pub fn check_resources(document: &Document, catalog: &dyn ResourceCatalog) -> ErrorReport {
    let mut report = ErrorReport::new();
    for asset in document.assets() {
        for resource in asset.resources() {
            if !catalog.has_resource(resource) {
                report.push(ConfigError::MissingResource {
                    asset: asset.name().to_string(),
                    resource: resource.clone(),
                });
            }
        }
    }
    report
}
