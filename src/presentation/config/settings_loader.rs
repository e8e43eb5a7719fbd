use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvironmentSource, File, FileFormat};
use serde_json::Value;

use super::{Settings, SettingsError};

pub const DEFAULT_PROFILE: &str = "default";
pub const TEST_PROFILE: &str = "test";
pub const PROFILES_ENV_VAR: &str = "DOCU_CHAT_PROFILES";
pub const SETTINGS_FOLDER_ENV_VAR: &str = "DOCU_CHAT_SETTINGS_FOLDER";
pub const ENV_OVERRIDE_PREFIX: &str = "DOCU_CHAT";

const ENV_SEPARATOR: &str = "__";
const ENV_LIST_SEPARATOR: &str = ",";
const ENV_LIST_KEYS: [&str; 3] = [
    "server.cors.allow_origins",
    "server.cors.allow_methods",
    "server.cors.allow_headers",
];
const DEFAULT_SETTINGS: &str = include_str!("../../../settings.toml");

/// Merges partial settings mappings in order.
///
/// Objects are merged key by key; any other value from a later source
/// replaces the earlier one.
pub fn merge_settings(sources: &[Value]) -> Value {
    let mut merged = Value::Object(serde_json::Map::new());
    for source in sources {
        deep_merge(&mut merged, source);
    }
    merged
}

fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

/// Profiles named in `DOCU_CHAT_PROFILES`, always led by `default`.
pub fn active_profiles() -> Vec<String> {
    parse_profiles(std::env::var(PROFILES_ENV_VAR).ok().as_deref())
}

pub fn parse_profiles(raw: Option<&str>) -> Vec<String> {
    let mut profiles = vec![DEFAULT_PROFILE.to_string()];
    for profile in raw.unwrap_or_default().split(',') {
        let profile = profile.trim();
        if !profile.is_empty() && !profiles.iter().any(|p| p == profile) {
            profiles.push(profile.to_string());
        }
    }
    profiles
}

pub fn settings_folder() -> PathBuf {
    std::env::var(SETTINGS_FOLDER_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Loads a single profile as a partial mapping.
///
/// `default` is compiled into the binary. Any other profile is read from
/// `settings-<profile>.toml` in `folder`; a missing file yields an empty
/// mapping.
pub fn load_profile(profile: &str, folder: &Path) -> Result<Value, SettingsError> {
    let builder = Config::builder();
    let builder = if profile == DEFAULT_PROFILE {
        builder.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
    } else {
        let path = folder.join(format!("settings-{}.toml", profile));
        if !path.exists() {
            tracing::warn!(profile = %profile, path = %path.display(), "Settings profile file not found");
        }
        builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
    };

    let value = builder.build()?.try_deserialize::<Value>()?;
    tracing::debug!(profile = %profile, "Settings profile loaded");
    Ok(value)
}

/// Reads `DOCU_CHAT__SECTION__KEY` variables from the process environment.
///
/// Values stay strings, except the CORS lists which are split on `,`. Use
/// [`coerce_overrides`] to type them against a base layer.
pub fn load_environment_overrides() -> Result<Value, SettingsError> {
    environment_overrides(None)
}

/// Same as [`load_environment_overrides`] but from an explicit variable set.
pub fn load_environment_overrides_from(
    vars: HashMap<String, String>,
) -> Result<Value, SettingsError> {
    environment_overrides(Some(vars))
}

fn environment_overrides(vars: Option<HashMap<String, String>>) -> Result<Value, SettingsError> {
    let source = ENV_LIST_KEYS
        .iter()
        .fold(
            EnvironmentSource::with_prefix(ENV_OVERRIDE_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .list_separator(ENV_LIST_SEPARATOR),
            |source, key| source.with_list_parse_key(key),
        )
        .source(vars);

    let value = Config::builder()
        .add_source(source)
        .build()?
        .try_deserialize::<Value>()?;
    Ok(value)
}

/// Types string overrides after the value found at the same path in `base`.
///
/// Numbers and booleans are parsed, a string over a list is split on `,`.
/// Anything without a typed counterpart in `base`, or that fails to parse,
/// is left as is for schema validation to report.
pub fn coerce_overrides(overrides: Value, base: &Value) -> Value {
    match (overrides, base) {
        (Value::Object(overrides), Value::Object(base)) => Value::Object(
            overrides
                .into_iter()
                .map(|(key, value)| {
                    let value = match base.get(&key) {
                        Some(typed) => coerce_overrides(value, typed),
                        None => value,
                    };
                    (key, value)
                })
                .collect(),
        ),
        (Value::String(raw), typed) => coerce_leaf(raw, typed),
        (Value::Array(items), Value::Array(_)) => Value::Array(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(raw) => {
                        let trimmed = raw.trim();
                        (!trimmed.is_empty()).then(|| Value::String(trimmed.to_string()))
                    }
                    other => Some(other),
                })
                .collect(),
        ),
        (overrides, _) => overrides,
    }
}

fn coerce_leaf(raw: String, typed: &Value) -> Value {
    let trimmed = raw.trim();
    let coerced = match typed {
        Value::Bool(_) => trimmed.parse::<bool>().ok().map(Value::Bool),
        Value::Number(number) if number.is_f64() => trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),
        Value::Number(_) => trimmed
            .parse::<i64>()
            .ok()
            .map(|n| Value::Number(n.into())),
        Value::Array(_) => Some(Value::Array(
            trimmed
                .split(ENV_LIST_SEPARATOR)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect(),
        )),
        _ => None,
    };
    coerced.unwrap_or(Value::String(raw))
}

/// Merges the given profiles without validating the result.
pub fn load_unsafe_settings(profiles: &[String]) -> Result<Value, SettingsError> {
    let folder = settings_folder();
    let layers = profiles
        .iter()
        .map(|profile| load_profile(profile, &folder))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(merge_settings(&layers))
}

/// Loads every layer (profiles, then environment) and validates the result.
pub fn load_active_settings() -> Result<Settings, SettingsError> {
    let base = load_unsafe_settings(&active_profiles())?;
    let overrides = coerce_overrides(load_environment_overrides()?, &base);
    Settings::from_merged(merge_settings(&[base, overrides]))
}
