// blueprint-core/src/ports/mod.rs
//
// Contracts of the collaborators that consume a validated document. The core never
// builds engine objects nor opens resources itself.

pub mod definitions;
pub mod resources;

pub use definitions::DefinitionBuilder;
pub use resources::ResourceCatalog;
