// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! arkworks → verifier words.
//!
//! Converts Groth16 structures produced with `ark-groth16` over BN254 into
//! the raw word layout the verifier consumes.
//!
//! # Coordinate order
//!
//! - **G1**: `(x, y)` as canonical integers; infinity becomes `(0, 0)`.
//! - **G2**: each Fq2 coordinate is written `[c1, c0]` (EIP-197), the
//!   reverse of arkworks' `Fq2 { c0, c1 }`.
//! - **Fr**: canonical integer, never Montgomery form.

use ark_bn254::{Bn254, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::PrimeField;
use ark_serialize::CanonicalDeserialize;
use ust_types::{G1Point, G2Point, RawProof, U256};
use ust_verifier::VerifyingKey;

use crate::error::{SdkError, SdkResult};
use crate::snarkjs::KeyPoints;

pub fn g1_from_ark(p: &G1Affine) -> G1Point {
    if p.infinity {
        return G1Point::IDENTITY;
    }
    G1Point::new(p.x.into_bigint(), p.y.into_bigint())
}

fn fq2_words(c: &Fq2) -> [U256; 2] {
    [c.c1.into_bigint(), c.c0.into_bigint()]
}

pub fn g2_from_ark(p: &G2Affine) -> G2Point {
    if p.infinity {
        return G2Point::IDENTITY;
    }
    G2Point::new(fq2_words(&p.x), fq2_words(&p.y))
}

/// `[Ax, Ay, Bx1, Bx0, By1, By0, Cx, Cy]`
pub fn ark_proof_to_words(proof: &ark_groth16::Proof<Bn254>) -> RawProof {
    ust_types::Proof {
        a: g1_from_ark(&proof.a),
        b: g2_from_ark(&proof.b),
        c: g1_from_ark(&proof.c),
    }
    .to_words()
}

pub fn ark_inputs_to_words(inputs: &[Fr]) -> Vec<U256> {
    inputs.iter().map(|f| f.into_bigint()).collect()
}

/// Convert an arkworks verifying key into a table for `N` public inputs.
///
/// `gamma_abc_g1` must hold exactly `N + 1` points.
pub fn ark_vk_to_table<const N: usize>(
    vk: &ark_groth16::VerifyingKey<Bn254>,
) -> SdkResult<VerifyingKey<N>> {
    let ic = &vk.gamma_abc_g1;
    if ic.len() != N + 1 {
        return Err(SdkError::shape("gamma_abc_g1", N + 1, ic.len()));
    }
    Ok(VerifyingKey {
        alpha1: g1_from_ark(&vk.alpha_g1),
        beta2: g2_from_ark(&vk.beta_g2),
        gamma2: g2_from_ark(&vk.gamma_g2),
        delta2: g2_from_ark(&vk.delta_g2),
        ic0: g1_from_ark(&ic[0]),
        ic: core::array::from_fn(|i| g1_from_ark(&ic[i + 1])),
    })
}

/// Key points with the input count taken from `gamma_abc_g1`.
pub fn ark_vk_points(vk: &ark_groth16::VerifyingKey<Bn254>) -> KeyPoints {
    KeyPoints {
        alpha1: g1_from_ark(&vk.alpha_g1),
        beta2: g2_from_ark(&vk.beta_g2),
        gamma2: g2_from_ark(&vk.gamma_g2),
        delta2: g2_from_ark(&vk.delta_g2),
        ic: vk.gamma_abc_g1.iter().map(g1_from_ark).collect(),
    }
}

/// Decode a compressed, hex-encoded arkworks verifying key.
pub fn decode_ark_vk(hex_str: &str) -> SdkResult<ark_groth16::VerifyingKey<Bn254>> {
    let bytes = hex::decode(hex_str.trim().trim_start_matches("0x"))
        .map_err(|e| SdkError::Ark(format!("hex: {e}")))?;
    ark_groth16::VerifyingKey::<Bn254>::deserialize_compressed(&bytes[..])
        .map_err(|e| SdkError::Ark(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;
    use ark_ff::UniformRand;
    use ark_serialize::CanonicalSerialize;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generators_use_eip197_layout() {
        let g1 = g1_from_ark(&G1Affine::generator());
        assert_eq!(g1, G1Point::new(U256::from(1u64), U256::from(2u64)));

        let g2 = g2_from_ark(&G2Affine::generator());
        let gen = G2Affine::generator();
        assert_eq!(g2.x[0], gen.x.c1.into_bigint());
        assert_eq!(g2.x[1], gen.x.c0.into_bigint());
        assert_eq!(g2.y[0], gen.y.c1.into_bigint());
    }

    #[test]
    fn infinity_is_zero_words() {
        assert_eq!(g1_from_ark(&G1Affine::identity()), G1Point::IDENTITY);
        assert_eq!(g2_from_ark(&G2Affine::identity()), G2Point::IDENTITY);
    }

    #[test]
    fn inputs_are_canonical_integers() {
        let mut rng = StdRng::seed_from_u64(42);
        let f = Fr::rand(&mut rng);
        let words = ark_inputs_to_words(&[Fr::from(7u64), f]);
        assert_eq!(words[0], U256::from(7u64));
        assert_eq!(Fr::from_bigint(words[1]), Some(f));
    }

    #[test]
    fn proof_words_follow_positional_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let proof = ark_groth16::Proof::<Bn254> {
            a: (G1Affine::generator() * Fr::rand(&mut rng)).into(),
            b: (G2Affine::generator() * Fr::rand(&mut rng)).into(),
            c: (G1Affine::generator() * Fr::rand(&mut rng)).into(),
        };
        let w = ark_proof_to_words(&proof);
        assert_eq!(w[0], proof.a.x.into_bigint());
        assert_eq!(w[1], proof.a.y.into_bigint());
        assert_eq!(w[2], proof.b.x.c1.into_bigint());
        assert_eq!(w[3], proof.b.x.c0.into_bigint());
        assert_eq!(w[4], proof.b.y.c1.into_bigint());
        assert_eq!(w[5], proof.b.y.c0.into_bigint());
        assert_eq!(w[6], proof.c.x.into_bigint());
        assert_eq!(w[7], proof.c.y.into_bigint());
    }

    #[test]
    fn decode_compressed_vk() {
        let mut rng = StdRng::seed_from_u64(3);
        let g1 = |rng: &mut StdRng| -> G1Affine { (G1Affine::generator() * Fr::rand(rng)).into() };
        let g2 = |rng: &mut StdRng| -> G2Affine { (G2Affine::generator() * Fr::rand(rng)).into() };
        let vk = ark_groth16::VerifyingKey::<Bn254> {
            alpha_g1: g1(&mut rng),
            beta_g2: g2(&mut rng),
            gamma_g2: g2(&mut rng),
            delta_g2: g2(&mut rng),
            gamma_abc_g1: vec![g1(&mut rng), g1(&mut rng)],
        };
        let mut bytes = Vec::new();
        vk.serialize_compressed(&mut bytes).unwrap();
        let decoded = decode_ark_vk(&format!("0x{}\n", hex::encode(&bytes))).unwrap();
        assert_eq!(decoded, vk);

        let points = ark_vk_points(&decoded);
        assert_eq!(points.num_inputs(), 1);
        assert_eq!(points.ic[1], g1_from_ark(&vk.gamma_abc_g1[1]));

        assert!(matches!(decode_ark_vk("zz"), Err(SdkError::Ark(_))));
        assert!(matches!(decode_ark_vk("00"), Err(SdkError::Ark(_))));
    }
}
