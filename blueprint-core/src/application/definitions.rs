// blueprint-core/src/application/definitions.rs
//
// USE CASE: hand a validated document to an orchestration-engine builder.

use std::collections::BTreeMap;
use tracing::{info, instrument};

use crate::domain::config::{Document, PartitionConfig};
use crate::ports::definitions::DefinitionBuilder;

/// Built definitions keyed by name, so assets can share one partition definition.
#[derive(Debug)]
pub struct Definitions<P, A> {
    pub partitions: BTreeMap<String, P>,
    pub assets: BTreeMap<String, A>,
}

#[instrument(
    skip_all,
    fields(partitions = document.partitions().len(), assets = document.assets().len())
)]
pub fn build_definitions<B: DefinitionBuilder>(
    document: &Document,
    builder: &B,
) -> Result<Definitions<B::Partition, B::Asset>, B::Error> {
    let mut partitions = BTreeMap::new();

    for partition in document.partitions() {
        let name = partition.name();
        let built = match partition.config() {
            PartitionConfig::Hourly(config) => builder.hourly(name, config)?,
            PartitionConfig::Daily(config) => builder.daily(name, config)?,
            PartitionConfig::Weekly(config) => builder.weekly(name, config)?,
            PartitionConfig::Monthly(config) => builder.monthly(name, config)?,
            PartitionConfig::Categorical(config) => builder.categorical(name, config)?,
        };
        partitions.insert(name.to_string(), built);
    }

    let mut assets = BTreeMap::new();
    for asset in document.assets() {
        // A validated document only references declared partitions.
        let used: Vec<&B::Partition> = asset
            .partitions()
            .iter()
            .filter_map(|name| partitions.get(name))
            .collect();
        let built = builder.asset(asset, &used)?;
        assets.insert(asset.name().to_string(), built);
    }

    info!(
        partitions = partitions.len(),
        assets = assets.len(),
        "Definitions built"
    );
    Ok(Definitions { partitions, assets })
}
