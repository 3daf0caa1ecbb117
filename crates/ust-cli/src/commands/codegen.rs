// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ust_sdk::{ark_vk_points, decode_ark_vk, parse_verifying_key, render_key_points, KeyPoints};

use crate::output;

/// Where the verifying key comes from.
#[derive(Clone, Copy)]
pub enum KeySource<'a> {
    /// `verification_key.json` from snarkjs
    Snarkjs(&'a Path),
    /// compressed arkworks `VerifyingKey<Bn254>`, hex-encoded
    Arkworks(&'a Path),
}

pub fn run(source: KeySource<'_>, name: &str) -> Result<()> {
    if !is_const_ident(name) {
        return Err(output::fail_with_hint(
            &format!("invalid table name: {name}"),
            "use an upper-case Rust identifier such as MY_CIRCUIT_VK",
        ));
    }
    let points = load_points(source)?;
    let rendered = render_key_points(name, &points)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "name": name,
            "public_inputs": points.num_inputs(),
            "source": rendered,
        }));
    } else {
        print!("{rendered}");
    }
    Ok(())
}

fn load_points(source: KeySource<'_>) -> Result<KeyPoints> {
    let (path, hint) = match source {
        KeySource::Snarkjs(path) => (
            path,
            "expected verification_key.json from `snarkjs zkey export verificationkey`",
        ),
        KeySource::Arkworks(path) => (
            path,
            "expected a hex-encoded compressed arkworks VerifyingKey<Bn254>",
        ),
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read verifying key at {}", path.display()))?;
    let points = match source {
        KeySource::Snarkjs(_) => parse_verifying_key(&text).and_then(|vk| vk.points()),
        KeySource::Arkworks(_) => decode_ark_vk(&text).map(|vk| ark_vk_points(&vk)),
    };
    points.map_err(|e| output::fail_with_hint(&format!("invalid verifying key: {e}"), hint))
}

fn is_const_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
