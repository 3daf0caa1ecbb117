// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use core::fmt;

/// Curve primitive that raised a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveOp {
    G1Add,
    G1ScalarMul,
    Pairing,
}

impl fmt::Display for CurveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CurveOp::G1Add => "g1 add",
            CurveOp::G1ScalarMul => "g1 scalar mul",
            CurveOp::Pairing => "pairing",
        })
    }
}

/// A curve primitive refused its operands. Always fatal: a fault is never a
/// verification result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PairingFault {
    #[error("{0}: coordinate is not a base field element")]
    NonCanonical(CurveOp),

    #[error("{0}: point is not on the curve")]
    NotOnCurve(CurveOp),

    #[error("{0}: G2 point is outside the prime-order subgroup")]
    NotInSubgroup(CurveOp),
}

impl PairingFault {
    pub fn op(&self) -> CurveOp {
        match self {
            PairingFault::NonCanonical(op)
            | PairingFault::NotOnCurve(op)
            | PairingFault::NotInSubgroup(op) => *op,
        }
    }
}
