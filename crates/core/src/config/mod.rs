//! Configuration management for kgen

mod settings;
pub mod validation;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, GeneratorConfig};
pub use validation::{ConfigValidator, DefaultConfigValidator};
