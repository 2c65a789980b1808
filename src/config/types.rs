//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{DropdownProps, Labels};
use crate::domain::services::{PlacementRules, DEFAULT_SEARCH_THRESHOLD};
use crate::error::ChoosyResult;

use super::loader;
use super::ConfigWarning;

/// Search form configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Force the search form on or off; unset decides by choice count
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Show the search form above this many choices
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            threshold: DEFAULT_SEARCH_THRESHOLD,
        }
    }
}

fn default_threshold() -> usize {
    DEFAULT_SEARCH_THRESHOLD
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix selected labels with their group headline
    #[serde(default)]
    pub include_group_headline: bool,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            include_group_headline: false,
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against what the terminal supports
    pub fn enabled(&self, terminal_supports_color: bool) -> bool {
        match self {
            ColorMode::Auto => terminal_supports_color,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub labels: Labels,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub overlay: PlacementRules,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ChoosyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ChoosyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (CHOOSY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Fill widget props from this configuration.
    ///
    /// A placeholder already on `props` (from the select control) wins over
    /// the configured one.
    pub fn apply(&self, mut props: DropdownProps) -> DropdownProps {
        let placeholder = props
            .labels
            .placeholder
            .take()
            .or_else(|| self.labels.placeholder.clone());

        props.labels = Labels {
            placeholder,
            ..self.labels.clone()
        };
        props.searchable = self.search.enabled;
        props.search_threshold = self.search.threshold;
        props.include_group_headline = self.display.include_group_headline;
        props.placement = self.overlay;
        props
    }
}
