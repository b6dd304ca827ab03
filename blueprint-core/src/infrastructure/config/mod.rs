// blueprint-core/src/infrastructure/config/mod.rs

pub mod loader;
pub mod render;

pub use loader::{
    CONFIG_ENV, DOCUMENT_CANDIDATES, find_document, load_document, load_raw, locate_document,
    parse_document_str,
};
pub use render::{to_json, to_yaml};
