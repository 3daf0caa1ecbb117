// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ust_pairing::PairingFault;

/// Fatal verification outcome. A proof that is well-formed but wrong is not
/// a fault; it is `Ok(false)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifierFault {
    #[error("expected {expected} public inputs, got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("proof word {index} is not below the base field modulus")]
    ProofWordOutOfRange { index: usize },

    #[error("public input {index} is not below the scalar field modulus")]
    InputOutOfRange { index: usize },

    #[error("curve arithmetic: {0}")]
    Arithmetic(#[from] PairingFault),
}

impl VerifierFault {
    /// Rejected by shape or range checks, before any curve arithmetic ran.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, VerifierFault::Arithmetic(_))
    }
}
