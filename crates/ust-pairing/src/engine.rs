// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_ff::BigInteger;
use ust_types::{G1Point, G2Point, U256, BASE_MODULUS};

use crate::backend::CurveBackend;
use crate::bn254::ArkBn254;
use crate::error::PairingFault;

/// Negation, addition, scalar multiplication and the four-pair pairing
/// check over BN254. Holds no state beyond its (stateless) backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairingEngine<B = ArkBn254> {
    backend: B,
}

impl<B: CurveBackend> PairingEngine<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `-P = (x, q - (y mod q))`; the identity maps to itself.
    ///
    /// Pure word arithmetic, the backend is not consulted. A non-identity
    /// point with `y ≡ 0` yields `y = q`, which no valid curve point has.
    pub fn negate(&self, p: &G1Point) -> G1Point {
        if p.is_identity() {
            return *p;
        }
        let mut y = p.y;
        while y >= BASE_MODULUS {
            y.sub_with_borrow(&BASE_MODULUS);
        }
        let mut neg_y = BASE_MODULUS;
        neg_y.sub_with_borrow(&y);
        G1Point::new(p.x, neg_y)
    }

    pub fn add(&self, p1: &G1Point, p2: &G1Point) -> Result<G1Point, PairingFault> {
        self.backend.g1_add(p1, p2).map_err(|fault| {
            log::debug!("PairingEngine::add: {fault}");
            fault
        })
    }

    pub fn scalar_mul(&self, p: &G1Point, s: &U256) -> Result<G1Point, PairingFault> {
        self.backend.g1_mul(p, s).map_err(|fault| {
            log::debug!("PairingEngine::scalar_mul: {fault}");
            fault
        })
    }

    /// `e(a1,a2)·e(b1,b2)·e(c1,c2)·e(d1,d2) == 1`
    ///
    /// `Ok(false)` is a legitimate "does not hold"; `Err` means the pairing
    /// primitive refused an operand.
    #[allow(clippy::too_many_arguments)]
    pub fn pairing_check(
        &self,
        a1: &G1Point,
        a2: &G2Point,
        b1: &G1Point,
        b2: &G2Point,
        c1: &G1Point,
        c2: &G2Point,
        d1: &G1Point,
        d2: &G2Point,
    ) -> Result<bool, PairingFault> {
        let pairs = [(*a1, *a2), (*b1, *b2), (*c1, *c2), (*d1, *d2)];
        let holds = self.backend.pairing_product_is_one(&pairs).map_err(|fault| {
            log::debug!("PairingEngine::pairing_check: {fault}");
            fault
        })?;
        log::trace!("PairingEngine::pairing_check: <<< {holds}");
        Ok(holds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn254::tests::{g1_generator, g2_generator};
    use proptest::prelude::*;
    use ust_types::SCALAR_MODULUS;

    fn engine() -> PairingEngine {
        PairingEngine::default()
    }

    #[test]
    fn identity_negates_to_itself() {
        assert_eq!(engine().negate(&G1Point::IDENTITY), G1Point::IDENTITY);
    }

    #[test]
    fn negate_generator() {
        let mut expected_y = BASE_MODULUS;
        expected_y.sub_with_borrow(&U256::from(2u64));
        let neg = engine().negate(&g1_generator());
        assert_eq!(neg, G1Point::new(U256::from(1u64), expected_y));
    }

    #[test]
    fn negate_reduces_y_first() {
        let mut y = BASE_MODULUS;
        y.add_with_carry(&U256::from(2u64));
        let neg = engine().negate(&G1Point::new(U256::from(1u64), y));
        assert_eq!(neg, engine().negate(&g1_generator()));
    }

    #[test]
    fn point_plus_negation_is_identity() {
        let e = engine();
        let p = e.scalar_mul(&g1_generator(), &U256::from(1234567u64)).unwrap();
        assert_eq!(e.add(&p, &e.negate(&p)).unwrap(), G1Point::IDENTITY);
    }

    #[test]
    fn pairing_check_is_bilinear_in_g1() {
        // e(aG, H)·e(bG, H)·e(-(a+b)G, H)·e(O, H) = 1
        let e = engine();
        let g = g1_generator();
        let h = g2_generator();
        let a = e.scalar_mul(&g, &U256::from(17u64)).unwrap();
        let b = e.scalar_mul(&g, &U256::from(25u64)).unwrap();
        let sum = e.scalar_mul(&g, &U256::from(42u64)).unwrap();
        let neg_sum = e.negate(&sum);
        assert!(e
            .pairing_check(&a, &h, &b, &h, &neg_sum, &h, &G1Point::IDENTITY, &h)
            .unwrap());
        assert!(!e
            .pairing_check(&a, &h, &b, &h, &sum, &h, &G1Point::IDENTITY, &h)
            .unwrap());
    }

    #[test]
    fn scalar_mul_fault_propagates() {
        let off = G1Point::new(U256::from(2u64), U256::from(2u64));
        assert!(engine().scalar_mul(&off, &SCALAR_MODULUS).is_err());
    }

    proptest! {
        #[test]
        fn double_negation_on_curve_points(k in 1u64..u64::MAX) {
            let e = engine();
            let p = e.scalar_mul(&g1_generator(), &U256::from(k)).unwrap();
            prop_assert_eq!(e.negate(&e.negate(&p)), p);
        }

        #[test]
        fn double_negation_on_canonical_words(
            lo in any::<[u64; 3]>(),
            hi in 0u64..0x30644e72e131a029,
            x in any::<[u64; 4]>(),
        ) {
            let y = U256::new([lo[0], lo[1], lo[2], hi]);
            prop_assume!(y != U256::from(0u64));
            let p = G1Point::new(U256::new(x), y);
            let e = engine();
            prop_assert_eq!(e.negate(&e.negate(&p)), p);
        }
    }
}
