// blueprint-core/src/ports/definitions.rs

use crate::domain::config::{
    Asset, CategoricalPartitionConfig, DailyPartitionConfig, HourlyPartitionConfig,
    MonthlyPartitionConfig, WeeklyPartitionConfig,
};

/// Turns validated configuration into orchestration-engine definitions.
///
/// One constructor per partition cadence; the configs arrive with every default
/// applied, and their serialized form uses the engine's argument names
/// (`fmt`, `partition_keys`).
pub trait DefinitionBuilder {
    type Partition;
    type Asset;
    type Error;

    fn hourly(
        &self,
        name: &str,
        config: &HourlyPartitionConfig,
    ) -> Result<Self::Partition, Self::Error>;

    fn daily(
        &self,
        name: &str,
        config: &DailyPartitionConfig,
    ) -> Result<Self::Partition, Self::Error>;

    fn weekly(
        &self,
        name: &str,
        config: &WeeklyPartitionConfig,
    ) -> Result<Self::Partition, Self::Error>;

    fn monthly(
        &self,
        name: &str,
        config: &MonthlyPartitionConfig,
    ) -> Result<Self::Partition, Self::Error>;

    fn categorical(
        &self,
        name: &str,
        config: &CategoricalPartitionConfig,
    ) -> Result<Self::Partition, Self::Error>;

    /// `partitions` are the already-built definitions the asset lists, in its order.
    fn asset(
        &self,
        asset: &Asset,
        partitions: &[&Self::Partition],
    ) -> Result<Self::Asset, Self::Error>;
}
