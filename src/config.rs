use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

use crate::provider::{API_KEY_ENV_VAR, ApiConfig, DEFAULT_MODEL};

/// Optional on-disk configuration, `~/.pythia/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct PythiaConfig {
    pub api: Option<ApiSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSection {
    /// API key; `${VAR}` references are expanded from the environment.
    pub key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no API key configured: set ANTHROPIC_API_KEY or add an [api] key to ~/.pythia/config.toml"
    )]
    MissingApiKey,
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated reference; keep it verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

impl PythiaConfig {
    pub fn load() -> Option<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pythia").join("config.toml"))
}

/// Resolve startup credentials into the immutable request configuration.
///
/// The environment wins over the config file; a missing key is fatal here,
/// before the terminal is touched.
pub fn startup_config() -> Result<ApiConfig, ConfigError> {
    let file = PythiaConfig::load().unwrap_or_default();
    resolve(file)
}

fn resolve(file: PythiaConfig) -> Result<ApiConfig, ConfigError> {
    let api = file.api.unwrap_or_default();

    let api_key = env_value(API_KEY_ENV_VAR)
        .or_else(|| {
            api.key
                .as_deref()
                .map(expand_env_vars)
                .filter(|key| !key.trim().is_empty())
        })
        .ok_or(ConfigError::MissingApiKey)?;

    let model = env_value("PYTHIA_MODEL")
        .or(api.model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    Ok(ApiConfig::new(api_key, model))
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
