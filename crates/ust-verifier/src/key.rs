// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use core::iter;

use ust_types::{G1Point, G2Point};

/// Groth16 verifying key for a circuit with `N` public inputs.
///
/// The IC basis has `N + 1` points: `ic0` is the constant term and `ic[i]`
/// is weighted by public input `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyingKey<const N: usize> {
    pub alpha1: G1Point,
    pub beta2: G2Point,
    pub gamma2: G2Point,
    pub delta2: G2Point,
    pub ic0: G1Point,
    pub ic: [G1Point; N],
}

impl<const N: usize> VerifyingKey<N> {
    pub const NUM_INPUTS: usize = N;

    /// IC[0..=N] in order.
    pub fn ic_points(&self) -> impl Iterator<Item = &G1Point> {
        iter::once(&self.ic0).chain(self.ic.iter())
    }
}
