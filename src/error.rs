//! Error types for Choosy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Choosy operations
pub type ChoosyResult<T> = Result<T, ChoosyError>;

/// Host input that cannot be turned into a choice set.
///
/// Raised synchronously while classifying entries or parsing a select
/// control, never during interaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Entry looks like both a choice and a group
    #[error("entry #{index} is ambiguous: it has both a 'headline' and a 'label'")]
    AmbiguousEntry { index: usize },

    /// Entry is missing a field its shape requires
    #[error("entry #{index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// A group was nested inside another group
    #[error("entry #{index} nests a group inside a group")]
    NestedGroup { index: usize },

    /// Two different values share the key a selection map uses
    #[error("entry #{index} has value '{key}', which collides with an earlier value of another type")]
    ConflictingValue { index: usize, key: String },

    /// More than one preferred marker at the top level
    #[error("Multiple preferred markers found")]
    MultiplePreferredMarkers,

    /// Preferred marker found inside an option group
    #[error("Found invalid preferred marker inside group '{group}'")]
    NestedPreferredMarker { group: String },
}

/// Main error type for Choosy operations
#[derive(Error, Debug)]
pub enum ChoosyError {
    /// Choice set could not be built from host input
    #[error("invalid choices: {0}")]
    Configuration(#[from] ConfigurationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file exists but does not deserialize
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Input file extension is neither TOML nor JSON
    #[error("unsupported input format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Key script token that names no key
    #[error("unknown key '{token}' in key script")]
    InvalidKeyScript { token: String },

    /// Interactive picking was cancelled by the user
    #[error("selection aborted by user")]
    Aborted,
}
