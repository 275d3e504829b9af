use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use super::Config;

/// Keys every configuration file is expected to carry.
pub const REQUIRED_KEYS: [&str; 5] = [
    "database",
    "week_start",
    "attendance_threshold",
    "time_format",
    "separator_char",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

/// Keys absent from the configuration file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add missing keys with their default values, keeping existing ones untouched.
///   Returns:
///   Ok(true)  → file rewritten
///   Ok(false) → nothing to do
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in REQUIRED_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    success(format!("Configuration migrated, added: {}", added.join(", ")));
    Ok(true)
}
