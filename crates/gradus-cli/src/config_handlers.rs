//! Handlers for `gradus config` subcommands.
//!
//! The `cmd_config_*` functions are generic over any
//! [`ConfigManager`](gradus_core::ConfigManager) and write to the given
//! output, so they can be tested without capturing stdout. The dotted-key
//! helpers operate on plain `toml::Value` trees.

use std::io::Write;
use std::path::PathBuf;

use gradus_core::ConfigManager;

use crate::cli::ConfigAction;
use crate::config::GradusConfig;
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand for [`GradusConfig`].
pub fn handle_config_command(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<GradusConfig>(config_path, out),
        ConfigAction::Get { key } => cmd_config_get::<GradusConfig>(config_path, &key, out),
        ConfigAction::Set { key, value } => {
            cmd_config_set::<GradusConfig>(config_path, &key, &value, out)
        }
        ConfigAction::Init { file, force } => {
            cmd_config_init::<GradusConfig>(file.as_deref(), force, out)
        }
        ConfigAction::Export { docker_env } => {
            let config = GradusConfig::load(config_path)?;
            cmd_config_export(&config, docker_env, out)
        }
    }
}

// ============================================================================
// Generic command handlers
// ============================================================================

/// Print the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(
    config_path: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        log::warn!(
            "{} does not exist; run `{} config init` to create it",
            path.display(),
            C::project_name()
        );
    }
    Ok(())
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    out: &mut impl Write,
) -> Result<()> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    let found = get_nested_value(&value, key)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;
    writeln!(out, "{}", format_toml_value(found))?;
    Ok(())
}

/// Set a configuration value by dotted key in an existing config file.
///
/// The updated file must still load as `C`, so a value of the wrong type
/// is rejected before anything is written.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| gradus_core::Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    toml::from_str::<C>(&toml_str)
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| gradus_core::Error::io_with_path(e, &path))?;

    writeln!(out, "Set {key} = {value} in {}", path.display())?;
    Ok(())
}

/// Write a default configuration file.
pub fn cmd_config_init<C: ConfigManager>(
    file: Option<&str>,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| gradus_core::Error::io_with_path(e, parent))?;
    }

    let toml_str = C::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| gradus_core::Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

/// Print the configuration as environment variables.
pub fn cmd_config_export<C: ConfigManager>(
    config: &C,
    docker_env: bool,
    out: &mut impl Write,
) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            writeln!(out, "--env {key}={value}")?;
        } else {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let Some(last) = parts.pop().filter(|p| !p.is_empty()) else {
        return Err(Error::config("Empty key path"));
    };

    let mut current = root;
    for part in parts {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part)
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string into a TOML value: bool, then integer, then float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_default(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, GradusConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    // ------------------------------------------------------------------------
    // cmd_config_path
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        let mut out = Vec::new();
        cmd_config_path::<GradusConfig>(Some("/explicit/config.toml"), &mut out).unwrap();
        assert_eq!(output(out), "/explicit/config.toml\n");
    }

    // ------------------------------------------------------------------------
    // cmd_config_get
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let mut out = Vec::new();
        let file = path.to_str().unwrap();
        cmd_config_get::<GradusConfig>(Some(file), "search.default_limit", &mut out).unwrap();
        assert_eq!(output(out), "10\n");
    }

    #[test]
    fn test_cmd_config_get_section() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let mut out = Vec::new();
        cmd_config_get::<GradusConfig>(Some(path.to_str().unwrap()), "logging", &mut out).unwrap();
        assert!(output(out).contains("level = \"warn\""));
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let file = path.to_str().unwrap();
        let err = cmd_config_get::<GradusConfig>(Some(file), "nonexistent.key", &mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_cmd_config_get_explicit_missing_file() {
        let file = "/nonexistent/gradus.toml";
        let err =
            cmd_config_get::<GradusConfig>(Some(file), "search", &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let mut out = Vec::new();
        let file = path.to_str().unwrap();
        cmd_config_set::<GradusConfig>(Some(file), "search.default_limit", "25", &mut out).unwrap();
        assert!(output(out).starts_with("Set search.default_limit = 25"));

        let config = GradusConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.search.default_limit, 25);
    }

    #[test]
    fn test_cmd_config_set_new_optional_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let file = path.to_str().unwrap();
        cmd_config_set::<GradusConfig>(Some(file), "outline.path", "~/arrays.md", &mut Vec::new())
            .unwrap();
        let config = GradusConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.outline.path.as_deref(), Some("~/arrays.md"));
    }

    #[test]
    fn test_cmd_config_set_rejects_wrong_type() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let file = path.to_str().unwrap();
        let err = cmd_config_set::<GradusConfig>(
            Some(file),
            "search.default_limit",
            "many",
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid value"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let err = cmd_config_set::<GradusConfig>(
            Some("/nonexistent/config.toml"),
            "key",
            "value",
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("gradus").join("config.toml");

        let file = path.to_str().unwrap();
        cmd_config_init::<GradusConfig>(Some(file), false, &mut Vec::new()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[search]"));
        assert!(content.contains("[logging]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let file = path.to_str().unwrap();
        let err =
            cmd_config_init::<GradusConfig>(Some(file), false, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        let file = path.to_str().unwrap();
        cmd_config_init::<GradusConfig>(Some(file), true, &mut Vec::new()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("default_limit"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_export
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_export_env_vars() {
        let mut out = Vec::new();
        cmd_config_export(&GradusConfig::default(), false, &mut out).unwrap();
        assert!(output(out).lines().any(|l| l == "GRADUS_SEARCH_DEFAULT_LIMIT=10"));
    }

    #[test]
    fn test_cmd_config_export_docker_env() {
        let mut out = Vec::new();
        cmd_config_export(&GradusConfig::default(), true, &mut out).unwrap();
        assert!(output(out).lines().all(|l| l.starts_with("--env GRADUS_")));
    }

    // ------------------------------------------------------------------------
    // dotted-key helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("[search]\ndefault_limit = 3").unwrap();
        assert_eq!(
            get_nested_value(&val, "search.default_limit"),
            Some(&toml::Value::Integer(3))
        );
        assert!(get_nested_value(&val, "search.nonexistent").is_none());
        assert!(get_nested_value(&val, "search.default_limit.deeper").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "outline.path", toml::Value::String("a.md".into())).unwrap();
        assert_eq!(
            get_nested_value(&val, "outline.path"),
            Some(&toml::Value::String("a.md".into()))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut val: toml::Value = toml::from_str("limit = 3").unwrap();
        assert!(set_nested_value(&mut val, "limit.inner", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_set_nested_value_empty_key() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("0.9"), toml::Value::Float(0.9));
        assert_eq!(parse_value("json"), toml::Value::String("json".to_string()));
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("tsv".into())), "tsv");
        assert_eq!(format_toml_value(&toml::Value::Integer(10)), "10");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
