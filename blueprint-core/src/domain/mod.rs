pub mod config;
pub mod error;
pub mod graph;

pub use error::{ConfigError, ErrorReport};
