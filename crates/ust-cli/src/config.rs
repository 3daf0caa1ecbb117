// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! `~/.ust/config.json`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ust_verifier::InputPolicy;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolicySetting {
    #[default]
    Exact,
    Truncate,
}

impl PolicySetting {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicySetting::Exact => "exact",
            PolicySetting::Truncate => "truncate",
        }
    }
}

impl From<PolicySetting> for InputPolicy {
    fn from(p: PolicySetting) -> Self {
        match p {
            PolicySetting::Exact => InputPolicy::Exact,
            PolicySetting::Truncate => InputPolicy::Truncate,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub input_policy: PolicySetting,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_policy: PolicySetting::Exact,
            color: true,
        }
    }
}

pub const ALLOWED_KEYS: &[&str] = &["input_policy", "color"];

impl Config {
    /// Apply `key = value`, validating both.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "input_policy" => {
                self.input_policy = match value {
                    "exact" => PolicySetting::Exact,
                    "truncate" => PolicySetting::Truncate,
                    _ => anyhow::bail!("input_policy must be `exact` or `truncate`, got `{value}`"),
                }
            }
            "color" => {
                self.color = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("color must be `true` or `false`, got `{value}`"))?
            }
            _ => anyhow::bail!("unknown config key: {key}"),
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".ust").join("config.json"))
}

pub fn load_config() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

/// Like [`load_from`], but an unreadable or invalid file falls back to
/// defaults with a warning.
pub fn load_or_default(path: &Path) -> Config {
    load_from(path).unwrap_or_else(|e| {
        log::warn!("ignoring config at {}: {e:#}", path.display());
        Config::default()
    })
}

pub fn save_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
