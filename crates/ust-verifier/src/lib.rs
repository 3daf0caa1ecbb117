// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! ust-verifier: Groth16 verification for the user-state-transition circuit
//!
//! The verifying key is a compile-time table ([`USER_STATE_TRANSITION_VK`]);
//! a different circuit gets a different table, never a runtime loader.
//!
//! ```ignore
//! let verifier = ProofVerifier::user_state_transition();
//! match verifier.verify(&public_inputs, &proof_words) {
//!     Ok(true) => { /* accept */ }
//!     Ok(false) => { /* proof does not satisfy the pairing equation */ }
//!     Err(fault) => { /* malformed input or corrupt curve data */ }
//! }
//! ```

mod error;
mod key;
mod user_state_transition;
mod verifier;

pub use error::VerifierFault;
pub use key::VerifyingKey;
pub use user_state_transition::{USER_STATE_TRANSITION_INPUTS, USER_STATE_TRANSITION_VK};
pub use verifier::{InputPolicy, ProofVerifier};

pub use ust_pairing::{ArkBn254, CurveBackend, CurveOp, PairingEngine, PairingFault};
pub use ust_types::{G1Point, G2Point, Proof, RawProof, U256};
