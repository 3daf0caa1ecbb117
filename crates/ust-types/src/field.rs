// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! 256-bit words and the two BN254 moduli.
//!
//! Point coordinates live in the base field `Q`, public inputs in the scalar
//! field `R`. The moduli differ in their low 128 bits, so a value can be a
//! valid coordinate and still be rejected as an input.

use ark_ff::BigInt;

/// Unsigned 256-bit word, four little-endian `u64` limbs.
pub type U256 = BigInt<4>;

pub const ZERO: U256 = BigInt::new([0, 0, 0, 0]);

/// BN254 base field modulus (q)
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const BASE_MODULUS: U256 = BigInt::new([
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// BN254 scalar field modulus (r), the order of G1 and G2
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const SCALAR_MODULUS: U256 = BigInt::new([
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// `true` iff `w < q`.
pub fn is_base_field(w: &U256) -> bool {
    *w < BASE_MODULUS
}

/// `true` iff `w < r`.
pub fn is_scalar_field(w: &U256) -> bool {
    *w < SCALAR_MODULUS
}
