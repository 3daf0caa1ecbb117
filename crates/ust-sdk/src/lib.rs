// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # ust-sdk
//!
//! Client library for the BN254 user-state-transition verifier.
//!
//! `ust-sdk` turns the formats proofs actually arrive in (snarkjs JSON,
//! arkworks structures, calldata word arrays) into the raw words
//! [`ust_verifier::ProofVerifier`] consumes, and renders verifying keys as
//! Rust tables for new circuits.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`words`] | Decimal / hex ↔ 256-bit word conversion |
//! | [`snarkjs`] | snarkjs `proof.json`, `public.json`, `verification_key.json` |
//! | [`ark`] | arkworks Groth16 structures → words and key tables |
//! | [`codegen`] | `VerifyingKey<N>` → Rust `static` source |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use ust_sdk::snarkjs;
//! use ust_verifier::ProofVerifier;
//!
//! # fn example(proof_json: &str, public_json: &str) -> ust_sdk::SdkResult<()> {
//! let verifier = ProofVerifier::user_state_transition();
//! let accepted = snarkjs::verify_snarkjs(&verifier, proof_json, public_json)?;
//! println!("accepted: {accepted}");
//! # Ok(())
//! # }
//! ```

pub mod ark;
pub mod codegen;
pub mod error;
pub mod snarkjs;
pub mod words;

pub use ark::{
    ark_inputs_to_words, ark_proof_to_words, ark_vk_points, ark_vk_to_table, decode_ark_vk,
    g1_from_ark, g2_from_ark,
};
pub use codegen::{render_key_points, render_vk_table};
pub use error::{SdkError, SdkResult};
pub use snarkjs::{
    parse_proof, parse_public_signals, parse_verifying_key, verify_snarkjs, KeyPoints, SnarkjsProof,
    SnarkjsVerifyingKey,
};
pub use words::{parse_word, parse_words, word_to_decimal, word_to_hex};
