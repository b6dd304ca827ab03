// blueprint-core/src/infrastructure/adapters/catalog.rs

use std::collections::BTreeSet;

use crate::ports::resources::ResourceCatalog;

/// A fixed set of resource names, e.g. from `--resource` flags or a deployment manifest.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    names: BTreeSet<String>,
}

impl StaticCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl ResourceCatalog for StaticCatalog {
    fn has_resource(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
