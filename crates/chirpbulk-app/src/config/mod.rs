//! Configuration file parsing for chirpbulk
//!
//! Supports `<config_dir>/chirpbulk/config.toml`. Every field is optional;
//! command-line flags override the file.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::*;
