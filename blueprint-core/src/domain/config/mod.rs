// blueprint-core/src/domain/config/mod.rs
//
// raw document -> envelopes -> resolver (per partition / check) -> entities
// -> integrity passes -> validated Document

pub mod asset;
pub mod check;
pub mod document;
pub mod integrity;
pub mod kinds;
pub mod partition;
pub mod resolver;
pub mod rules;

pub use asset::{Asset, Column, RawAsset, build_asset};
pub use check::{
    BoundsCheckConfig, Check, CheckConfig, NullityCheckConfig, RegexCheckConfig,
    SchemaCheckConfig, UniqueCheckConfig, VolumeCheckConfig, build_check,
};
pub use document::{Document, parse_document, resolve_document};
pub use integrity::validate_document;
pub use kinds::{CheckKind, MaxOperator, MinOperator, PartitionKind, Severity};
pub use partition::{
    CategoricalPartitionConfig, DailyPartitionConfig, HourlyPartitionConfig,
    MonthlyPartitionConfig, Partition, PartitionConfig, WeeklyPartitionConfig, build_partition,
};
pub use resolver::{resolve_check, resolve_partition};
pub use rules::{MaxBound, MinBound};
