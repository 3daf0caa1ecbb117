// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use ust_sdk::{word_to_hex, SnarkjsVerifyingKey};
use ust_verifier::{G1Point, G2Point, USER_STATE_TRANSITION_VK};

use crate::output;

/// Print the embedded key: snarkjs JSON in `--json` mode, labelled hex words
/// otherwise.
pub fn run() -> Result<()> {
    let vk = &USER_STATE_TRANSITION_VK;
    if output::is_json() {
        output::json_output(serde_json::to_value(SnarkjsVerifyingKey::from_table(vk))?);
        return Ok(());
    }

    output::label("public inputs", &vk.ic.len().to_string());
    output::label("alpha1", &g1(&vk.alpha1));
    output::label("beta2", &g2(&vk.beta2));
    output::label("gamma2", &g2(&vk.gamma2));
    output::label("delta2", &g2(&vk.delta2));
    for (i, p) in vk.ic_points().enumerate() {
        output::label(&format!("ic[{i}]"), &g1(p));
    }
    Ok(())
}

fn g1(p: &G1Point) -> String {
    format!("({}, {})", word_to_hex(&p.x), word_to_hex(&p.y))
}

fn g2(p: &G2Point) -> String {
    format!(
        "([{}, {}], [{}, {}])",
        word_to_hex(&p.x[0]),
        word_to_hex(&p.x[1]),
        word_to_hex(&p.y[0]),
        word_to_hex(&p.y[1])
    )
}
