//! Configuration module for Choosy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CHOOSY_*)
//! 3. `--config <path>`, else project config (./.choosy.toml)
//! 4. User config (<config dir>/choosy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load, with_env_overrides, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, DisplayConfig, SearchConfig};
