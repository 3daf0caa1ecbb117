// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use crate::field::{U256, ZERO};

/// Affine G1 point as two base field words. `(0, 0)` is the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct G1Point {
    pub x: U256,
    pub y: U256,
}

impl G1Point {
    pub const IDENTITY: G1Point = G1Point { x: ZERO, y: ZERO };

    pub const fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        self.x == ZERO && self.y == ZERO
    }
}

/// Affine G2 point over Fq2.
///
/// Each coordinate pair is in EIP-197 order: `[imaginary, real]`, i.e.
/// `x = x[0]·u + x[1]`. All-zero words encode the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct G2Point {
    pub x: [U256; 2],
    pub y: [U256; 2],
}

impl G2Point {
    pub const IDENTITY: G2Point = G2Point {
        x: [ZERO, ZERO],
        y: [ZERO, ZERO],
    };

    pub const fn new(x: [U256; 2], y: [U256; 2]) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(|w| *w == ZERO)
    }
}
