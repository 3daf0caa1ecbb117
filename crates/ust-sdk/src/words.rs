// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Text ↔ 256-bit word conversion.
//!
//! snarkjs and most Ethereum tooling print field elements as decimal strings;
//! calldata dumps use `0x` hex. Both parse into the same [`U256`].

use ark_ff::BigInteger;
use num_bigint::BigUint;
use ust_types::U256;

use crate::error::{SdkError, SdkResult};

/// Parse a decimal or `0x`-prefixed big-endian hex string into a word.
///
/// The value is not reduced: range checks against q or r belong to the
/// verifier, which reports them as faults.
pub fn parse_word(s: &str) -> SdkResult<U256> {
    let s = s.trim();
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return parse_hex(s, digits);
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SdkError::InvalidWord(s.to_string()));
    }
    let value = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| SdkError::InvalidWord(s.to_string()))?;
    U256::try_from(value).map_err(|_| SdkError::WordTooLarge(s.to_string()))
}

fn parse_hex(original: &str, digits: &str) -> SdkResult<U256> {
    if digits.is_empty() {
        return Err(SdkError::InvalidWord(original.to_string()));
    }
    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };
    let bytes = hex::decode(digits).map_err(|_| SdkError::InvalidWord(original.to_string()))?;

    // leading zero bytes do not count against the width
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let bytes = &bytes[first..];
    if bytes.len() > 32 {
        return Err(SdkError::WordTooLarge(original.to_string()));
    }

    // BE bytes → LE u64 limbs
    let mut be = [0u8; 32];
    be[32 - bytes.len()..].copy_from_slice(bytes);
    let mut limbs = [0u64; 4];
    for (i, chunk) in be.rchunks_exact(8).enumerate() {
        let mut limb = [0u8; 8];
        limb.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(limb);
    }
    Ok(U256::new(limbs))
}

/// Parse every string in `items`, failing on the first bad one.
pub fn parse_words<S: AsRef<str>>(items: &[S]) -> SdkResult<Vec<U256>> {
    items.iter().map(|s| parse_word(s.as_ref())).collect()
}

pub fn word_to_decimal(w: &U256) -> String {
    BigUint::from(*w).to_str_radix(10)
}

/// `0x` followed by 64 hex digits.
pub fn word_to_hex(w: &U256) -> String {
    format!("0x{}", hex::encode(w.to_bytes_be()))
}
