//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.barcart/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Env vars may also come from a `.env` file in the working directory.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::Tab;
use crate::core::wheel::WheelConfig;
use crate::firebase::assets::DEFAULT_STORAGE_BASE_URL;
use crate::firebase::store::DEFAULT_FIRESTORE_BASE_URL;
use crate::recipes::providers::cocktaildb::{DEFAULT_API_KEY, DEFAULT_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BarcartConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cocktaildb: CocktailDbConfig,
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub wheel: WheelSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<Tab>,
    pub log_level: Option<String>,
    pub recommended_count: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CocktailDbConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub firestore_base_url: Option<String>,
    pub storage_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WheelSection {
    pub adjective_count: Option<u32>,
    pub name_count: Option<u32>,
    pub ingredient_pool: Option<u32>,
    pub min_ingredients: Option<u32>,
    pub max_ingredients: Option<u32>,
    pub spin_millis: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_RECOMMENDED_COUNT: usize = 5;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, Options only where absence is meaningful)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub log_level: String,
    pub recommended_count: usize,
    pub cocktaildb_base_url: String,
    pub cocktaildb_api_key: String,
    pub firebase_api_key: Option<String>,
    /// `None` disables the wheel.
    pub firebase_project_id: Option<String>,
    /// `None` disables menu images.
    pub firebase_storage_bucket: Option<String>,
    pub firestore_base_url: String,
    pub storage_base_url: String,
    pub wheel: WheelConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.barcart/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".barcart").join("config.toml"))
}

/// Load config from `~/.barcart/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BarcartConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BarcartConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BarcartConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BarcartConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BarcartConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# barcart configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"                 # "home", "menu" or "list"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"
# recommended_count = 5

# [cocktaildb]
# base_url = "https://www.thecocktaildb.com/api/json/v1"
# api_key = "1"                      # Or set COCKTAILDB_API_KEY env var

# [firebase]                         # Needed for the wheel and menu images
# api_key = "..."                    # Or set FIREBASE_API_KEY env var
# project_id = "my-project"          # Or set FIREBASE_PROJECT_ID env var
# storage_bucket = "my-project.appspot.com"

# [wheel]
# adjective_count = 13
# name_count = 8
# ingredient_pool = 18
# min_ingredients = 3
# max_ingredients = 6
# spin_millis = 2000
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Reads an env var, treating an empty value as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_tab` and `cli_log_level` are from CLI flags (None = not specified).
pub fn resolve(
    config: &BarcartConfig,
    cli_tab: Option<Tab>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    let start_tab = cli_tab
        .or(config.general.start_tab)
        .unwrap_or_default();

    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| env_var("BARCART_LOG"))
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // CocktailDB: env → config → default
    let cocktaildb_base_url = env_var("COCKTAILDB_BASE_URL")
        .or_else(|| config.cocktaildb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let cocktaildb_api_key = env_var("COCKTAILDB_API_KEY")
        .or_else(|| config.cocktaildb.api_key.clone())
        .unwrap_or_else(|| DEFAULT_API_KEY.to_string());

    // Firebase: env → config, no defaults for credentials
    let firebase_api_key =
        env_var("FIREBASE_API_KEY").or_else(|| config.firebase.api_key.clone());
    let firebase_project_id =
        env_var("FIREBASE_PROJECT_ID").or_else(|| config.firebase.project_id.clone());
    let firebase_storage_bucket =
        env_var("FIREBASE_STORAGE_BUCKET").or_else(|| config.firebase.storage_bucket.clone());
    let firestore_base_url = env_var("FIRESTORE_BASE_URL")
        .or_else(|| config.firebase.firestore_base_url.clone())
        .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string());
    let storage_base_url = env_var("FIREBASE_STORAGE_BASE_URL")
        .or_else(|| config.firebase.storage_base_url.clone())
        .unwrap_or_else(|| DEFAULT_STORAGE_BASE_URL.to_string());

    ResolvedConfig {
        start_tab,
        log_level,
        recommended_count: config
            .general
            .recommended_count
            .unwrap_or(DEFAULT_RECOMMENDED_COUNT),
        cocktaildb_base_url,
        cocktaildb_api_key,
        firebase_api_key,
        firebase_project_id,
        firebase_storage_bucket,
        firestore_base_url,
        storage_base_url,
        wheel: resolve_wheel(&config.wheel),
    }
}

/// Fills wheel settings from defaults. A min above the max is swapped.
fn resolve_wheel(section: &WheelSection) -> WheelConfig {
    let defaults = WheelConfig::default();
    let min = section
        .min_ingredients
        .unwrap_or(*defaults.ingredient_draws.start());
    let max = section
        .max_ingredients
        .unwrap_or(*defaults.ingredient_draws.end());
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    WheelConfig {
        adjective_count: section.adjective_count.unwrap_or(defaults.adjective_count),
        name_count: section.name_count.unwrap_or(defaults.name_count),
        ingredient_pool: section.ingredient_pool.unwrap_or(defaults.ingredient_pool),
        ingredient_draws: min..=max,
        spin_duration: section
            .spin_millis
            .map(Duration::from_millis)
            .unwrap_or(defaults.spin_duration),
        segments: defaults.segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = BarcartConfig::default();
        assert!(config.general.start_tab.is_none());
        assert!(config.firebase.project_id.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = BarcartConfig::default();
        let resolved = resolve(&config, None, Some("info"));
        assert_eq!(resolved.recommended_count, DEFAULT_RECOMMENDED_COUNT);
        assert_eq!(resolved.wheel, WheelConfig::default());
        assert_eq!(resolved.log_level, "info");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BarcartConfig {
            general: GeneralConfig {
                start_tab: Some(Tab::List),
                log_level: None,
                recommended_count: Some(8),
            },
            wheel: WheelSection {
                adjective_count: Some(20),
                spin_millis: Some(500),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_tab, Tab::List);
        assert_eq!(resolved.recommended_count, 8);
        assert_eq!(resolved.wheel.adjective_count, 20);
        assert_eq!(resolved.wheel.spin_duration, Duration::from_millis(500));
        assert_eq!(resolved.wheel.name_count, 8);
    }

    #[test]
    fn test_resolve_cli_tab_wins() {
        let config = BarcartConfig {
            general: GeneralConfig {
                start_tab: Some(Tab::List),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Tab::Menu), None);
        assert_eq!(resolved.start_tab, Tab::Menu);
    }

    #[test]
    fn test_inverted_ingredient_range_is_swapped() {
        let section = WheelSection {
            min_ingredients: Some(7),
            max_ingredients: Some(2),
            ..Default::default()
        };
        assert_eq!(resolve_wheel(&section).ingredient_draws, 2..=7);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_tab = "menu"
recommended_count = 3

[cocktaildb]
api_key = "9973533"

[firebase]
project_id = "barcart-demo"
storage_bucket = "barcart-demo.appspot.com"

[wheel]
max_ingredients = 4
"#;
        let config: BarcartConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_tab, Some(Tab::Menu));
        assert_eq!(config.general.recommended_count, Some(3));
        assert_eq!(config.cocktaildb.api_key.as_deref(), Some("9973533"));
        assert_eq!(config.firebase.project_id.as_deref(), Some("barcart-demo"));
        assert_eq!(config.wheel.max_ingredients, Some(4));
        assert!(config.wheel.min_ingredients.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[firebase]
project_id = "only-this"
"#;
        let config: BarcartConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.firebase.project_id.as_deref(), Some("only-this"));
        assert!(config.firebase.storage_bucket.is_none());
        assert!(config.general.start_tab.is_none());
    }
}
