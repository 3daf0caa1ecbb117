// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ust_types::{G1Point, G2Point, U256};

use crate::error::PairingFault;

/// Number of (G1, G2) pairs in a Groth16 pairing check.
pub const PAIRING_ARITY: usize = 4;

/// Host curve primitives: G1 add, G1 scalar multiply and the pairing product.
///
/// Implementations must be pure. Operands that the host would refuse
/// (non-canonical, off-curve, wrong subgroup) are reported as a
/// [`PairingFault`], never silently mapped to a result.
pub trait CurveBackend {
    fn g1_add(&self, p1: &G1Point, p2: &G1Point) -> Result<G1Point, PairingFault>;

    fn g1_mul(&self, p: &G1Point, s: &U256) -> Result<G1Point, PairingFault>;

    /// `true` iff the product of `e(g1, g2)` over all pairs is one in GT.
    fn pairing_product_is_one(
        &self,
        pairs: &[(G1Point, G2Point); PAIRING_ARITY],
    ) -> Result<bool, PairingFault>;
}

impl<B: CurveBackend + ?Sized> CurveBackend for &B {
    fn g1_add(&self, p1: &G1Point, p2: &G1Point) -> Result<G1Point, PairingFault> {
        (**self).g1_add(p1, p2)
    }

    fn g1_mul(&self, p: &G1Point, s: &U256) -> Result<G1Point, PairingFault> {
        (**self).g1_mul(p, s)
    }

    fn pairing_product_is_one(
        &self,
        pairs: &[(G1Point, G2Point); PAIRING_ARITY],
    ) -> Result<bool, PairingFault> {
        (**self).pairing_product_is_one(pairs)
    }
}
