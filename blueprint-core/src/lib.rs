// blueprint-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports: contracts for the collaborators that consume a validated document
// (definition builders, resource catalogs).
pub mod ports;

// 2. Domain: the configuration model, variant resolution, cross-entity validation
// and the dependency graph. Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure: file discovery, YAML loading, atomic writes, catalog adapters.
pub mod infrastructure;

// 4. Application: use cases wiring the domain to the ports and the infrastructure.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::config::{Asset, Check, Document, Partition};
pub use domain::error::{ConfigError, ErrorReport};
pub use error::BlueprintError;
