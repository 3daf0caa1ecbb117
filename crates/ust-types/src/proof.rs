// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 proof and its 8-word wire layout
//! `[A.x, A.y, B.x[0], B.x[1], B.y[0], B.y[1], C.x, C.y]`.

use crate::field::U256;
use crate::point::{G1Point, G2Point};

pub const PROOF_WORDS: usize = 8;

/// Proof as supplied by the caller, before decoding.
pub type RawProof = [U256; PROOF_WORDS];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

impl Proof {
    pub fn from_words(w: &RawProof) -> Self {
        Self {
            a: G1Point::new(w[0], w[1]),
            b: G2Point::new([w[2], w[3]], [w[4], w[5]]),
            c: G1Point::new(w[6], w[7]),
        }
    }

    pub fn to_words(&self) -> RawProof {
        [
            self.a.x, self.a.y, self.b.x[0], self.b.x[1], self.b.y[0], self.b.y[1], self.c.x,
            self.c.y,
        ]
    }
}
