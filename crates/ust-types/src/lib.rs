// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

#![cfg_attr(not(feature = "std"), no_std)]

pub mod field;
pub mod point;
pub mod proof;

pub use field::{is_base_field, is_scalar_field, U256, BASE_MODULUS, SCALAR_MODULUS, ZERO};
pub use point::{G1Point, G2Point};
pub use proof::{Proof, RawProof, PROOF_WORDS};
