//! Traits shared across Gradus crates.
//!
//! [`ConfigManager`] gives any serde-backed configuration struct the file
//! resolution, loading, and export behaviour used by the CLI's `config`
//! subcommands.

use std::env;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::util::paths::expand_tilde;

/// Configuration file handling for a project.
///
/// Implementors only name their project; path resolution, TOML loading and
/// environment export come with the trait.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory and env var prefix.
    fn project_name() -> &'static str;

    /// Environment variable prefix, e.g. `GRADUS`.
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace(['-', ' '], "_")
    }

    /// Environment variable that may point at a config file.
    fn config_env_var() -> String {
        format!("{}_CONFIG", Self::env_prefix())
    }

    /// Platform default: `<config dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config file path.
    ///
    /// Checks in order:
    /// 1. Explicit path (e.g. a `--config` flag)
    /// 2. `{PROJECT}_CONFIG` environment variable
    /// 3. Platform default path
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_tilde(path));
        }
        if let Ok(path) = env::var(Self::config_env_var()) {
            if !path.trim().is_empty() {
                return Some(expand_tilde(&path));
            }
        }
        Self::default_config_path()
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. A missing file found through the env
    /// var or the platform default yields the default configuration.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config directory for this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten the configuration into `PREFIX_SECTION_KEY=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::env_prefix(), &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{}_{}", prefix, key.to_uppercase().replace('-', "_"));
                flatten_env(&name, child, out);
            }
        }
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.push((prefix.to_string(), joined));
        }
        other => out.push((prefix.to_string(), scalar_to_string(other))),
    }
}

fn scalar_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
