//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChoosyError, ChoosyResult};

use super::types::Config;
use super::ConfigWarning;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = ".choosy.toml";

/// A loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, `None` for defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ChoosyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ChoosyError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::debug!(%warning, "config warning");
    }

    Ok((config, warnings))
}

/// Resolve the configuration.
///
/// Lookup order: `explicit` path (must exist), `<cwd>/.choosy.toml`, the user
/// config dir's `choosy/config.toml`, defaults. Environment overrides are
/// applied on top.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> ChoosyResult<LoadedConfig> {
    let user = dirs::config_dir().map(|dir| dir.join("choosy/config.toml"));
    let mut loaded = load_from(explicit, cwd, user.as_deref())?;
    loaded.config = with_env_overrides(loaded.config, |key| std::env::var(key).ok());
    Ok(loaded)
}

fn load_from(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config: Option<&Path>,
) -> ChoosyResult<LoadedConfig> {
    if let Some(path) = explicit {
        return read(path);
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return read(&project);
    }

    if let Some(user) = user_config.filter(|p| p.is_file()) {
        return read(user);
    }

    tracing::debug!("no config file found, using defaults");
    Ok(LoadedConfig::default())
}

fn read(path: &Path) -> ChoosyResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(path)?;
    tracing::debug!(path = %path.display(), warnings = warnings.len(), "config loaded");
    Ok(LoadedConfig {
        config,
        source: Some(path.to_path_buf()),
        warnings,
    })
}

/// Apply environment variable overrides (CHOOSY_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CHOOSY_PLACEHOLDER
    if let Some(placeholder) = get_env("CHOOSY_PLACEHOLDER") {
        config.labels.placeholder = Some(placeholder);
    }

    // CHOOSY_SEARCHABLE (unset or "auto" defers to the threshold)
    if let Some(value) = get_env("CHOOSY_SEARCHABLE") {
        config.search.enabled = if value.eq_ignore_ascii_case("auto") {
            None
        } else {
            parse_flag("CHOOSY_SEARCHABLE", &value).or(config.search.enabled)
        };
    }

    // CHOOSY_UNICODE
    if let Some(value) = get_env("CHOOSY_UNICODE") {
        if let Some(unicode) = parse_flag("CHOOSY_UNICODE", &value) {
            config.display.unicode = unicode;
        }
    }

    config
}

fn parse_flag(name: &str, value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(name, value, "ignoring unrecognized boolean");
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "labels",
        "placeholder",
        "empty_message",
        "empty_results_message",
        "reset_label",
        "search",
        "enabled",
        "threshold",
        "display",
        "include_group_headline",
        "color",
        "unicode",
        "overlay",
        "gap",
        "edge_margin",
        "min_width",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
