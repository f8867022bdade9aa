use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::DefaultMap;
use crate::router::HistoryMode;
use crate::value::StateValue;

/// Synchronizer settings loaded from `~/.config/urlstate/config.toml`.
///
/// ```toml
/// history = "replace"
/// exclude = ["utm_source"]
///
/// [defaults]
/// q = ""
/// page = 1
/// archived = false
/// tags = []
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlStateConfig {
    /// "push" (default) or "replace".
    #[serde(default)]
    pub history: HistoryMode,
    /// Keys stripped from every outgoing query.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Default value per key; the TOML type picks the key's kind.
    #[serde(default)]
    pub defaults: BTreeMap<String, toml::Value>,
}

impl UrlStateConfig {
    /// Convert the `[defaults]` table into a typed default map.
    ///
    /// Strings, integers, floats, booleans and arrays of strings are
    /// accepted. Anything else names the offending key in the error.
    pub fn default_map(&self) -> Result<DefaultMap> {
        let mut map = DefaultMap::new();
        for (key, raw) in &self.defaults {
            map.insert(key.as_str(), toml_to_state(key, raw)?);
        }
        Ok(map)
    }
}

fn toml_to_state(key: &str, raw: &toml::Value) -> Result<StateValue> {
    let value = match raw {
        toml::Value::String(s) => StateValue::Str(s.clone()),
        toml::Value::Integer(n) => StateValue::Number(*n as f64),
        toml::Value::Float(n) => StateValue::Number(*n),
        toml::Value::Boolean(b) => StateValue::Bool(*b),
        toml::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    toml::Value::String(s) => list.push(s.clone()),
                    other => bail!(
                        "default `{key}`: list elements must be strings, found {}",
                        other.type_str()
                    ),
                }
            }
            StateValue::List(list)
        }
        other => bail!(
            "default `{key}`: unsupported value type {}",
            other.type_str()
        ),
    };
    Ok(value)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlstate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Read and parse a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<UrlStateConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: UrlStateConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    // Surface bad defaults at load time rather than at first use.
    cfg.default_map()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlStateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlStateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
