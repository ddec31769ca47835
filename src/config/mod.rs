//! Configuration loading.

mod settings;

pub use settings::{Config, ExtractionConfig, MessageConfig};
