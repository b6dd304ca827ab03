// blueprint-core/src/application/mod.rs

pub mod definitions;
pub mod normalize;
pub mod resources;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use blueprint_core::application::{build_definitions, check_resources, normalize_file};`

pub use definitions::{Definitions, build_definitions};
pub use normalize::{Normalized, normalize_file};
pub use resources::check_resources;
