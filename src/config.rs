use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileConfig {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
    pub output: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    profiles: Option<HashMap<String, ProfileConfig>>,
}

pub fn load_profile(name: &str) -> Result<ProfileConfig, String> {
    let path = config_path()?;
    let profiles = read_profiles(&path)?;

    profiles.get(name).cloned().ok_or_else(|| {
        format!(
            "Profile '{}' not found in config file '{}'.",
            name,
            path.display()
        )
    })
}

/// Parses the config file and checks every profile (or only `profile` when
/// given). Returns the path that was validated.
pub fn validate_config(profile: Option<&str>) -> Result<PathBuf, String> {
    let path = config_path()?;
    let profiles = read_profiles(&path)?;

    match profile {
        Some(name) => {
            let config = profiles.get(name).ok_or_else(|| {
                format!(
                    "Profile '{}' not found in config file '{}'.",
                    name,
                    path.display()
                )
            })?;
            validate_profile(name, config)?;
        }
        None => {
            let mut names = profiles.keys().collect::<Vec<_>>();
            names.sort();
            for name in names {
                validate_profile(name, &profiles[name])?;
            }
        }
    }

    Ok(path)
}

fn validate_profile(name: &str, profile: &ProfileConfig) -> Result<(), String> {
    if let Some(output) = profile.output.as_deref()
        && !matches!(output, "text" | "json")
    {
        return Err(format!(
            "Invalid profile output '{output}' in profile '{name}'. Supported values: text, json."
        ));
    }
    Ok(())
}

fn read_profiles(path: &Path) -> Result<HashMap<String, ProfileConfig>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read config file '{}': {err}", path.display()))?;

    let config: ConfigFile = toml::from_str(&raw)
        .map_err(|err| format!("Failed to parse config file '{}': {err}", path.display()))?;

    config.profiles.ok_or_else(|| {
        format!(
            "Config file '{}' does not contain a [profiles] section.",
            path.display()
        )
    })
}

pub fn config_path() -> Result<PathBuf, String> {
    if let Ok(path) = env::var("PUNSMITH_CONFIG") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed).join("punsmith").join("config.toml"));
        }
    }

    let home = env::var("HOME").map_err(|_| {
        "Cannot resolve config path: set PUNSMITH_CONFIG or HOME/XDG_CONFIG_HOME.".to_string()
    })?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("punsmith")
        .join("config.toml"))
}
