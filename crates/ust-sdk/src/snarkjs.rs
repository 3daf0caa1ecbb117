// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs JSON import.
//!
//! snarkjs prints points in projective form with decimal coordinates and
//! orders each Fq2 coefficient pair `[c0, c1]` (real first). The verifier
//! takes EIP-197 order `[c1, c0]`, so every G2 pair is swapped on the way in.
//!
//! A proof file may also be a plain JSON array of the 8 calldata words.

use serde::{Deserialize, Serialize};
use ust_types::{G1Point, G2Point, Proof, RawProof, U256, PROOF_WORDS};
use ust_verifier::{CurveBackend, ProofVerifier, VerifyingKey};

use crate::error::{SdkError, SdkResult};
use crate::words::{parse_word, parse_words, word_to_decimal};

/// `proof.json` as written by `snarkjs groth16 prove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnarkjsProof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

impl SnarkjsProof {
    pub fn to_proof(&self) -> SdkResult<Proof> {
        check_header(self.protocol.as_deref(), self.curve.as_deref())?;
        Ok(Proof {
            a: g1_from_json(&self.pi_a)?,
            b: g2_from_json(&self.pi_b)?,
            c: g1_from_json(&self.pi_c)?,
        })
    }

    pub fn to_words(&self) -> SdkResult<RawProof> {
        Ok(self.to_proof()?.to_words())
    }

    /// Inverse of [`to_proof`](Self::to_proof), for exporting fixtures.
    pub fn from_proof(proof: &Proof) -> Self {
        SnarkjsProof {
            pi_a: g1_to_json(&proof.a),
            pi_b: g2_to_json(&proof.b),
            pi_c: g1_to_json(&proof.c),
            protocol: Some("groth16".to_string()),
            curve: Some("bn128".to_string()),
        }
    }
}

/// `verification_key.json` as written by `snarkjs zkey export verificationkey`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnarkjsVerifyingKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    pub vk_alpha_1: Vec<String>,
    pub vk_beta_2: Vec<Vec<String>>,
    pub vk_gamma_2: Vec<Vec<String>>,
    pub vk_delta_2: Vec<Vec<String>>,
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<String>>,
}

/// Decoded key points with a runtime input count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPoints {
    pub alpha1: G1Point,
    pub beta2: G2Point,
    pub gamma2: G2Point,
    pub delta2: G2Point,
    /// `IC[0..=n_public]`, constant term first.
    pub ic: Vec<G1Point>,
}

impl KeyPoints {
    pub fn num_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }
}

impl SnarkjsVerifyingKey {
    /// Decode every point, checking `IC` against `nPublic`.
    pub fn points(&self) -> SdkResult<KeyPoints> {
        check_header(self.protocol.as_deref(), self.curve.as_deref())?;
        // IC holds the constant term plus one point per public input
        if self.ic.len().checked_sub(1) != Some(self.n_public) {
            return Err(SdkError::shape(
                "IC",
                self.n_public.saturating_add(1),
                self.ic.len(),
            ));
        }
        Ok(KeyPoints {
            alpha1: g1_from_json(&self.vk_alpha_1)?,
            beta2: g2_from_json(&self.vk_beta_2)?,
            gamma2: g2_from_json(&self.vk_gamma_2)?,
            delta2: g2_from_json(&self.vk_delta_2)?,
            ic: self
                .ic
                .iter()
                .map(|p| g1_from_json(p))
                .collect::<SdkResult<_>>()?,
        })
    }

    /// Convert to a key table, requiring exactly `N` public inputs.
    pub fn to_table<const N: usize>(&self) -> SdkResult<VerifyingKey<N>> {
        if self.n_public != N {
            return Err(SdkError::shape("nPublic", N, self.n_public));
        }
        let points = self.points()?;
        let rest: [G1Point; N] = points.ic[1..]
            .try_into()
            .map_err(|_| SdkError::shape("IC", N + 1, points.ic.len()))?;
        Ok(VerifyingKey {
            alpha1: points.alpha1,
            beta2: points.beta2,
            gamma2: points.gamma2,
            delta2: points.delta2,
            ic0: points.ic[0],
            ic: rest,
        })
    }

    pub fn from_table<const N: usize>(vk: &VerifyingKey<N>) -> Self {
        SnarkjsVerifyingKey {
            protocol: Some("groth16".to_string()),
            curve: Some("bn128".to_string()),
            n_public: N,
            vk_alpha_1: g1_to_json(&vk.alpha1),
            vk_beta_2: g2_to_json(&vk.beta2),
            vk_gamma_2: g2_to_json(&vk.gamma2),
            vk_delta_2: g2_to_json(&vk.delta2),
            ic: vk.ic_points().map(g1_to_json).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProofFile {
    Snarkjs(SnarkjsProof),
    Calldata(Vec<String>),
}

/// Parse a proof file: a snarkjs proof object or an array of 8 words.
pub fn parse_proof(json: &str) -> SdkResult<RawProof> {
    match serde_json::from_str::<ProofFile>(json)? {
        ProofFile::Snarkjs(proof) => proof.to_words(),
        ProofFile::Calldata(items) => {
            let words = parse_words(&items)?;
            let len = words.len();
            words
                .try_into()
                .map_err(|_| SdkError::shape("proof words", PROOF_WORDS, len))
        }
    }
}

/// Parse `public.json`: an array of decimal or hex strings.
pub fn parse_public_signals(json: &str) -> SdkResult<Vec<U256>> {
    let items: Vec<String> = serde_json::from_str(json)?;
    parse_words(&items)
}

pub fn parse_verifying_key(json: &str) -> SdkResult<SnarkjsVerifyingKey> {
    Ok(serde_json::from_str(json)?)
}

/// Parse both files and run the verifier.
///
/// Parsing problems come back as SDK errors; a verifier fault comes back as
/// [`SdkError::Verifier`]. `Ok(false)` is a clean rejection.
pub fn verify_snarkjs<B: CurveBackend, const N: usize>(
    verifier: &ProofVerifier<'_, N, B>,
    proof_json: &str,
    public_json: &str,
) -> SdkResult<bool> {
    let proof = parse_proof(proof_json)?;
    let inputs = parse_public_signals(public_json)?;
    log::debug!("verify_snarkjs: {} public signals", inputs.len());
    Ok(verifier.verify(&inputs, &proof)?)
}

fn check_header(protocol: Option<&str>, curve: Option<&str>) -> SdkResult<()> {
    if let Some(p) = protocol {
        if p != "groth16" {
            return Err(SdkError::Unsupported {
                field: "protocol",
                value: p.to_string(),
            });
        }
    }
    if let Some(c) = curve {
        if c != "bn128" && c != "bn254" {
            return Err(SdkError::Unsupported {
                field: "curve",
                value: c.to_string(),
            });
        }
    }
    Ok(())
}

fn is_zero(s: &str) -> SdkResult<bool> {
    Ok(parse_word(s)? == U256::from(0u64))
}

fn is_one(s: &str) -> SdkResult<bool> {
    Ok(parse_word(s)? == U256::from(1u64))
}

/// `[x, y]` or `[x, y, z]` with `z ∈ {0, 1}`; `z = 0` is the point at infinity.
fn g1_from_json(p: &[String]) -> SdkResult<G1Point> {
    match p {
        [x, y] => Ok(G1Point::new(parse_word(x)?, parse_word(y)?)),
        [_, _, z] if is_zero(z)? => Ok(G1Point::IDENTITY),
        [x, y, z] if is_one(z)? => Ok(G1Point::new(parse_word(x)?, parse_word(y)?)),
        [_, _, z] => Err(SdkError::Unsupported {
            field: "G1 z coordinate",
            value: z.clone(),
        }),
        _ => Err(SdkError::shape("G1 point", 3, p.len())),
    }
}

fn fq2_from_json(c: &[String]) -> SdkResult<[U256; 2]> {
    match c {
        [c0, c1] => Ok([parse_word(c1)?, parse_word(c0)?]),
        _ => Err(SdkError::shape("Fq2 element", 2, c.len())),
    }
}

/// `[[x.c0, x.c1], [y.c0, y.c1], z?]` with `z ∈ {[0,0], [1,0]}`.
fn g2_from_json(p: &[Vec<String>]) -> SdkResult<G2Point> {
    let (x, y) = match p {
        [x, y] => (x, y),
        [x, y, z] => {
            let z = fq2_from_json(z)?;
            if z == [U256::from(0u64); 2] {
                return Ok(G2Point::IDENTITY);
            }
            if z != [U256::from(0u64), U256::from(1u64)] {
                return Err(SdkError::Unsupported {
                    field: "G2 z coordinate",
                    value: format!("{z:?}"),
                });
            }
            (x, y)
        }
        _ => return Err(SdkError::shape("G2 point", 3, p.len())),
    };
    Ok(G2Point::new(fq2_from_json(x)?, fq2_from_json(y)?))
}

fn g1_to_json(p: &G1Point) -> Vec<String> {
    if p.is_identity() {
        return vec!["0".into(), "1".into(), "0".into()];
    }
    vec![word_to_decimal(&p.x), word_to_decimal(&p.y), "1".into()]
}

fn g2_to_json(p: &G2Point) -> Vec<Vec<String>> {
    let pair = |c: &[U256; 2]| vec![word_to_decimal(&c[1]), word_to_decimal(&c[0])];
    if p.is_identity() {
        return vec![
            vec!["0".into(), "0".into()],
            vec!["1".into(), "0".into()],
            vec!["0".into(), "0".into()],
        ];
    }
    vec![pair(&p.x), pair(&p.y), vec!["1".into(), "0".into()]]
}
