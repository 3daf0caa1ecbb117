// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ust_sdk::{parse_proof, parse_public_signals};
use ust_verifier::{
    InputPolicy, ProofVerifier, RawProof, VerifierFault, U256, USER_STATE_TRANSITION_INPUTS,
};

use crate::output;

/// How one `ust verify` run ended. Maps onto the process exit code.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
    Fault(VerifierFault),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Accepted => 0,
            Outcome::Rejected => 1,
            Outcome::Fault(_) => 2,
        }
    }
}

pub fn run(proof: &Path, public: &Path, policy: InputPolicy) -> Result<Outcome> {
    let proof_json = fs::read_to_string(proof)
        .with_context(|| format!("cannot read proof at {}", proof.display()))?;
    let public_json = fs::read_to_string(public)
        .with_context(|| format!("cannot read public inputs at {}", public.display()))?;

    let words = parse_proof(&proof_json).map_err(|e| {
        output::fail_with_hint(
            &format!("invalid proof file: {e}"),
            "expected a snarkjs proof.json or an array of 8 words",
        )
    })?;
    let inputs = parse_public_signals(&public_json).map_err(|e| {
        output::fail_with_hint(
            &format!("invalid public inputs: {e}"),
            "expected a JSON array of decimal or 0x-hex strings",
        )
    })?;

    let verifier = ProofVerifier::user_state_transition().with_policy(policy);
    let outcome = check(&verifier, &inputs, &words);
    report(&outcome, inputs.len(), verifier.num_inputs());
    Ok(outcome)
}

fn check(
    verifier: &ProofVerifier<'_, USER_STATE_TRANSITION_INPUTS>,
    inputs: &[U256],
    words: &RawProof,
) -> Outcome {
    match verifier.verify(inputs, words) {
        Ok(true) => Outcome::Accepted,
        Ok(false) => Outcome::Rejected,
        Err(fault) => Outcome::Fault(fault),
    }
}

fn report(outcome: &Outcome, supplied: usize, expected: usize) {
    if output::is_json() {
        let (verdict, fault) = match outcome {
            Outcome::Accepted => ("accepted", None),
            Outcome::Rejected => ("rejected", None),
            Outcome::Fault(f) => ("fault", Some(f.to_string())),
        };
        output::json_output(serde_json::json!({
            "verdict": verdict,
            "fault": fault,
            "public_inputs": supplied,
        }));
        return;
    }
    match outcome {
        Outcome::Accepted => output::success("proof accepted"),
        Outcome::Rejected => output::error_msg("proof rejected"),
        Outcome::Fault(fault) => {
            output::error_msg(&format!("verification fault: {fault}"));
            if matches!(fault, VerifierFault::InputLength { .. }) {
                output::info(&format!(
                    "hint: the circuit takes {expected} public inputs; pass --truncate to ignore extras"
                ));
            }
        }
    }
    if supplied > expected && !matches!(outcome, Outcome::Fault(_)) {
        output::warn(&format!(
            "{} public inputs supplied, {} used",
            supplied, expected
        ));
    }
}
