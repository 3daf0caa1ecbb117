// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for SDK parsing and conversion.

use ust_verifier::VerifierFault;

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("invalid word {0:?}: expected decimal or 0x-prefixed hex")]
    InvalidWord(String),

    #[error("word {0} does not fit in 256 bits")]
    WordTooLarge(String),

    #[error("{what}: expected {expected} elements, got {actual}")]
    Shape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported {field}: {value}")]
    Unsupported { field: &'static str, value: String },

    #[error("arkworks: {0}")]
    Ark(String),

    #[error(transparent)]
    Verifier(#[from] VerifierFault),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SdkError {
    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        SdkError::Shape {
            what,
            expected,
            actual,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
