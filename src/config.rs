//! Configuration for the dxkit binary.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (DXKIT_ID_LENGTH, DXKIT_ID_ALPHABET, DXKIT_LOG)
//! 2. Config file (.dxkit/config.yaml in the current directory or a parent,
//!    then ~/.dxkit/config.yaml)
//! 3. Defaults (8-character identifiers, default alphabet, `info` logging)
//!
//! The library itself never reads configuration: `Event::new` always stamps
//! default identifiers.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::util::nanoid::{DEFAULT_ALPHABET, DEFAULT_LENGTH};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const ENV_ID_LENGTH: &str = "DXKIT_ID_LENGTH";
const ENV_ID_ALPHABET: &str = "DXKIT_ID_ALPHABET";
const ENV_LOG: &str = "DXKIT_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub ids: IdsConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdsConfig {
    pub length: Option<usize>,
    pub alphabet: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "dxkit=debug"
    pub filter: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub ids: IdSettings,
    /// Log filter used when RUST_LOG is unset
    pub log_filter: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSettings {
    pub length: usize,
    pub alphabet: String,
}

impl Default for IdSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            ids: IdSettings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".dxkit").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".dxkit").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Layer a parsed config file and environment lookups over the defaults
fn resolve<F>(file: Option<(PathBuf, ConfigFile)>, env: F) -> Result<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut resolved = ResolvedConfig::default();

    if let Some((path, config)) = file {
        if let Some(length) = config.ids.length {
            resolved.ids.length = length;
        }
        if let Some(alphabet) = config.ids.alphabet {
            resolved.ids.alphabet = alphabet;
        }
        if let Some(filter) = config.logging.and_then(|l| l.filter) {
            resolved.log_filter = filter;
        }
        resolved.config_file = Some(path);
    }

    if let Some(length) = env(ENV_ID_LENGTH) {
        resolved.ids.length = length
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", ENV_ID_LENGTH, length))?;
    }
    if let Some(alphabet) = env(ENV_ID_ALPHABET) {
        resolved.ids.alphabet = alphabet;
    }
    if let Some(filter) = env(ENV_LOG) {
        resolved.log_filter = filter;
    }

    // Report the settings the generator will actually use
    if resolved.ids.length == 0 {
        resolved.ids.length = DEFAULT_LENGTH;
    }
    if resolved.ids.alphabet.is_empty() {
        resolved.ids.alphabet = DEFAULT_ALPHABET.to_string();
    }

    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    resolve(file, |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Log filter to use when RUST_LOG is unset.
///
/// Never fails: a broken config falls back to `info`, and the commands that
/// read the config report the error themselves.
pub fn log_filter() -> String {
    select_log_filter(config())
}

fn select_log_filter<E>(loaded: Result<&ResolvedConfig, E>) -> String {
    match loaded {
        Ok(config) => config.log_filter.clone(),
        Err(_) => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
