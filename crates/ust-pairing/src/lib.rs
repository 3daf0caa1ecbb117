// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! ust-pairing: pairing engine over BN254
//!
//! [`PairingEngine`] exposes the four operations a Groth16 verifier needs.
//! Curve arithmetic itself is delegated to a [`CurveBackend`]; the default
//! [`ArkBn254`] backend runs on arkworks and mirrors the failure semantics of
//! the EIP-196/197 precompiles.

mod backend;
mod bn254;
mod engine;
mod error;

pub use backend::{CurveBackend, PAIRING_ARITY};
pub use bn254::ArkBn254;
pub use engine::PairingEngine;
pub use error::{CurveOp, PairingFault};
