// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;

use crate::config::{config_path, load_config, load_or_default, save_to, ALLOWED_KEYS};
use crate::output;

pub fn set(key: &str, value: &str) -> Result<()> {
    set_at(&config_path()?, key, value)
}

fn set_at(path: &Path, key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut config = load_or_default(path);
    config.set(key, value)?;
    save_to(path, &config)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let config = load_config()?;
    let path = config_path()?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "input_policy": config.input_policy.as_str(),
            "color": config.color,
        }));
    } else {
        output::label("path", &path.display().to_string());
        if !path.exists() {
            output::info("no config file, showing defaults");
        }
        output::label("input_policy", config.input_policy.as_str());
        output::label("color", &config.color.to_string());
    }
    Ok(())
}
