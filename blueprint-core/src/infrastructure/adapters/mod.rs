// blueprint-core/src/infrastructure/adapters/mod.rs

pub mod catalog;

pub use catalog::StaticCatalog;
