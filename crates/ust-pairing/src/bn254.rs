// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! arkworks-backed BN254 primitives with EIP-196/197 failure semantics
//!
//! - G1/G2 coordinates must be canonical base field words.
//! - `(0, 0)` (all-zero for G2) is the point at infinity.
//! - Every other point must satisfy the curve equation; G2 points must also be
//!   in the order-r subgroup (G1 has cofactor one).

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, PrimeField};
use ust_types::{G1Point, G2Point, U256};

use crate::backend::{CurveBackend, PAIRING_ARITY};
use crate::error::{CurveOp, PairingFault};

/// Stateless BN254 backend on `ark-bn254`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArkBn254;

fn fq(w: &U256, op: CurveOp) -> Result<Fq, PairingFault> {
    Fq::from_bigint(*w).ok_or(PairingFault::NonCanonical(op))
}

fn decode_g1(p: &G1Point, op: CurveOp) -> Result<G1Affine, PairingFault> {
    if p.is_identity() {
        return Ok(G1Affine::identity());
    }
    let point = G1Affine::new_unchecked(fq(&p.x, op)?, fq(&p.y, op)?);
    if !point.is_on_curve() {
        return Err(PairingFault::NotOnCurve(op));
    }
    Ok(point)
}

fn decode_g2(p: &G2Point, op: CurveOp) -> Result<G2Affine, PairingFault> {
    if p.is_identity() {
        return Ok(G2Affine::identity());
    }
    // words are [imaginary, real]; Fq2::new takes (c0 = real, c1 = imaginary)
    let x = Fq2::new(fq(&p.x[1], op)?, fq(&p.x[0], op)?);
    let y = Fq2::new(fq(&p.y[1], op)?, fq(&p.y[0], op)?);
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(PairingFault::NotOnCurve(op));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PairingFault::NotInSubgroup(op));
    }
    Ok(point)
}

fn encode_g1(p: &G1Affine) -> G1Point {
    if p.infinity {
        return G1Point::IDENTITY;
    }
    G1Point::new(p.x.into_bigint(), p.y.into_bigint())
}

impl CurveBackend for ArkBn254 {
    fn g1_add(&self, p1: &G1Point, p2: &G1Point) -> Result<G1Point, PairingFault> {
        let a = decode_g1(p1, CurveOp::G1Add)?;
        let b = decode_g1(p2, CurveOp::G1Add)?;
        Ok(encode_g1(&(a.into_group() + b).into_affine()))
    }

    fn g1_mul(&self, p: &G1Point, s: &U256) -> Result<G1Point, PairingFault> {
        let a = decode_g1(p, CurveOp::G1ScalarMul)?;
        Ok(encode_g1(&a.mul_bigint(*s).into_affine()))
    }

    fn pairing_product_is_one(
        &self,
        pairs: &[(G1Point, G2Point); PAIRING_ARITY],
    ) -> Result<bool, PairingFault> {
        let mut g1 = [G1Affine::identity(); PAIRING_ARITY];
        let mut g2 = [G2Affine::identity(); PAIRING_ARITY];
        for (i, (p, q)) in pairs.iter().enumerate() {
            g1[i] = decode_g1(p, CurveOp::Pairing)?;
            g2[i] = decode_g2(q, CurveOp::Pairing)?;
        }
        Ok(Bn254::multi_pairing(g1, g2).0.is_one())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ark_ff::BigInteger;
    use ust_types::{BASE_MODULUS, SCALAR_MODULUS};

    pub(crate) fn g1_generator() -> G1Point {
        G1Point::new(U256::from(1u64), U256::from(2u64))
    }

    /// EIP-197 G2 generator, `[imaginary, real]` per coordinate.
    pub(crate) fn g2_generator() -> G2Point {
        G2Point::new(
            [
                U256::new([
                    0x97e485b7aef312c2,
                    0xf1aa493335a9e712,
                    0x7260bfb731fb5d25,
                    0x198e9393920d483a,
                ]),
                U256::new([
                    0x46debd5cd992f6ed,
                    0x674322d4f75edadd,
                    0x426a00665e5c4479,
                    0x1800deef121f1e76,
                ]),
            ],
            [
                U256::new([
                    0x55acdadcd122975b,
                    0xbc4b313370b38ef3,
                    0xec9e99ad690c3395,
                    0x090689d0585ff075,
                ]),
                U256::new([
                    0x4ce6cc0166fa7daa,
                    0xe3d1e7690c43d37b,
                    0x4aab71808dcb408f,
                    0x12c85ea5db8c6deb,
                ]),
            ],
        )
    }

    fn neg_g1_generator() -> G1Point {
        let mut y = BASE_MODULUS;
        y.sub_with_borrow(&U256::from(2u64));
        G1Point::new(U256::from(1u64), y)
    }

    #[test]
    fn g2_generator_decodes() {
        assert_eq!(
            decode_g2(&g2_generator(), CurveOp::Pairing).unwrap(),
            G2Affine::generator()
        );
        assert_eq!(
            decode_g1(&g1_generator(), CurveOp::G1Add).unwrap(),
            G1Affine::generator()
        );
    }

    #[test]
    fn add_matches_doubling() {
        let g = g1_generator();
        let sum = ArkBn254.g1_add(&g, &g).unwrap();
        let doubled = ArkBn254.g1_mul(&g, &U256::from(2u64)).unwrap();
        assert_eq!(sum, doubled);
    }

    #[test]
    fn add_identity_and_inverse() {
        let g = g1_generator();
        assert_eq!(ArkBn254.g1_add(&g, &G1Point::IDENTITY).unwrap(), g);
        assert_eq!(ArkBn254.g1_add(&G1Point::IDENTITY, &g).unwrap(), g);
        assert_eq!(
            ArkBn254.g1_add(&g, &neg_g1_generator()).unwrap(),
            G1Point::IDENTITY
        );
    }

    #[test]
    fn mul_by_group_order_is_identity() {
        let g = g1_generator();
        assert_eq!(ArkBn254.g1_mul(&g, &SCALAR_MODULUS).unwrap(), G1Point::IDENTITY);
        assert_eq!(
            ArkBn254.g1_mul(&g, &U256::from(0u64)).unwrap(),
            G1Point::IDENTITY
        );
    }

    #[test]
    fn mul_accepts_unreduced_scalar() {
        let mut s = SCALAR_MODULUS;
        s.add_with_carry(&U256::from(1u64));
        let g = g1_generator();
        assert_eq!(ArkBn254.g1_mul(&g, &s).unwrap(), g);
    }

    #[test]
    fn off_curve_point_faults() {
        let bad = G1Point::new(U256::from(1u64), U256::from(3u64));
        assert_eq!(
            ArkBn254.g1_add(&bad, &g1_generator()),
            Err(PairingFault::NotOnCurve(CurveOp::G1Add))
        );
        assert_eq!(
            ArkBn254.g1_mul(&bad, &U256::from(5u64)),
            Err(PairingFault::NotOnCurve(CurveOp::G1ScalarMul))
        );
    }

    #[test]
    fn non_canonical_coordinate_faults() {
        // (1, 2 + q) is the generator only after reduction
        let mut y = BASE_MODULUS;
        y.add_with_carry(&U256::from(2u64));
        let p = G1Point::new(U256::from(1u64), y);
        assert_eq!(
            ArkBn254.g1_mul(&p, &U256::from(1u64)),
            Err(PairingFault::NonCanonical(CurveOp::G1ScalarMul))
        );
    }

    #[test]
    fn pairing_cancels_inverse_pair() {
        let g1 = g1_generator();
        let g2 = g2_generator();
        let pairs = [
            (g1, g2),
            (neg_g1_generator(), g2),
            (G1Point::IDENTITY, g2),
            (g1, G2Point::IDENTITY),
        ];
        assert!(ArkBn254.pairing_product_is_one(&pairs).unwrap());
    }

    #[test]
    fn pairing_detects_imbalance() {
        let g1 = g1_generator();
        let g2 = g2_generator();
        let pairs = [
            (g1, g2),
            (g1, g2),
            (neg_g1_generator(), g2),
            (G1Point::IDENTITY, G2Point::IDENTITY),
        ];
        assert!(!ArkBn254.pairing_product_is_one(&pairs).unwrap());
    }

    #[test]
    fn pairing_rejects_malformed_g2() {
        let g1 = g1_generator();
        let mut swapped = g2_generator();
        swapped.x.swap(0, 1);
        let pairs = [
            (g1, swapped),
            (G1Point::IDENTITY, G2Point::IDENTITY),
            (G1Point::IDENTITY, G2Point::IDENTITY),
            (G1Point::IDENTITY, G2Point::IDENTITY),
        ];
        assert_eq!(
            ArkBn254.pairing_product_is_one(&pairs),
            Err(PairingFault::NotOnCurve(CurveOp::Pairing))
        );

        let mut wide = g2_generator();
        wide.y[0] = BASE_MODULUS;
        let pairs = [
            (g1, wide),
            (G1Point::IDENTITY, G2Point::IDENTITY),
            (G1Point::IDENTITY, G2Point::IDENTITY),
            (G1Point::IDENTITY, G2Point::IDENTITY),
        ];
        assert_eq!(
            ArkBn254.pairing_product_is_one(&pairs),
            Err(PairingFault::NonCanonical(CurveOp::Pairing))
        );
    }
}
