use crate::error::PaimonError;
use crate::providers::{DEFAULT_GEMINI_MODEL, GEMINI_BASE_URL};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables checked, in order, when no key is configured.
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "PAIMON_API_KEY"];

/// Runtime settings.
///
/// Layered as: defaults, then `~/.paimon/config.json`, then `./.paimon.json`
/// (key-by-key override), then the environment for an empty API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaimonConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_model() -> String {
    std::env::var("PAIMON_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string())
}

fn default_base_url() -> String {
    GEMINI_BASE_URL.to_string()
}

fn env_api_key() -> String {
    API_KEY_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_default()
}

impl Default for PaimonConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl PaimonConfig {
    pub fn load() -> Result<Self> {
        let home_config = Self::resolve_path("config.json");
        let local_config = std::env::current_dir()
            .ok()
            .map(|d| d.join(".paimon.json"));
        let mut config = Self::load_from(&home_config, local_config.as_deref())?;

        if config.api_key.is_empty() {
            config.api_key = env_api_key();
        }
        Ok(config)
    }

    /// File layers only, no environment lookup for the key.
    pub fn load_from(home_config: &Path, local_config: Option<&Path>) -> Result<Self> {
        let mut config = if home_config.exists() {
            let data = std::fs::read_to_string(home_config)?;
            serde_json::from_str::<PaimonConfig>(&data)?
        } else {
            PaimonConfig::default()
        };

        if let Some(local) = local_config.filter(|p| p.exists()) {
            let data = std::fs::read_to_string(local)?;
            let override_val: serde_json::Value = serde_json::from_str(&data)?;
            let mut base = serde_json::to_value(&config)?;
            if let (Some(base_obj), Some(over_obj)) =
                (base.as_object_mut(), override_val.as_object())
            {
                for (k, v) in over_obj {
                    base_obj.insert(k.clone(), v.clone());
                }
            }
            config = serde_json::from_value(base)?;
        }

        Ok(config)
    }

    /// The credential, or a `Configuration` error the operator can act on.
    pub fn api_key(&self) -> std::result::Result<&str, PaimonError> {
        let key = self.api_key.as_str();
        if key.is_empty() {
            return Err(PaimonError::configuration(format!(
                "GEMINI_API_KEY not found! Set {} or add \"api_key\" to {}",
                API_KEY_VARS.join(" / "),
                Self::resolve_path("config.json").display()
            )));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(PaimonError::configuration(
                "API key contains whitespace; check for a stray newline or space",
            ));
        }
        Ok(key)
    }

    pub fn resolve_path(relative: &str) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".paimon")
            .join(relative)
    }
}
