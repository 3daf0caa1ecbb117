// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verification over a fixed verifying key
//!
//! Algorithm:
//! 1. Decode `[Ax, Ay, Bx0, Bx1, By0, By1, Cx, Cy]` into `(A, B, C)`
//! 2. Every proof word must be `< q`, every public input `< r`
//! 3. vk_x = IC[0] + Σ input[i]·IC[i+1]
//! 4. Check: e(-A,B) * e(alpha,beta) * e(vk_x,gamma) * e(C,delta) == 1
//!
//! Steps 1–2 finish before any curve arithmetic runs.

use ust_pairing::{ArkBn254, CurveBackend, PairingEngine};
use ust_types::{is_base_field, is_scalar_field, G1Point, Proof, RawProof, U256};

use crate::error::VerifierFault;
use crate::key::VerifyingKey;
use crate::user_state_transition::{USER_STATE_TRANSITION_INPUTS, USER_STATE_TRANSITION_VK};

/// How [`ProofVerifier::verify`] treats a public-input slice whose length is
/// not exactly `N`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Any length other than `N` is a fault.
    #[default]
    Exact,
    /// Verify the first `N` words and ignore the rest. Fewer than `N` is
    /// still a fault.
    Truncate,
}

/// Accept/reject decisions for `(inputs, proof)` against one verifying key.
#[derive(Clone, Copy, Debug)]
pub struct ProofVerifier<'k, const N: usize, B = ArkBn254> {
    vk: &'k VerifyingKey<N>,
    engine: PairingEngine<B>,
    policy: InputPolicy,
}

impl ProofVerifier<'static, USER_STATE_TRANSITION_INPUTS> {
    /// Verifier for the embedded user-state-transition key.
    pub fn user_state_transition() -> Self {
        Self::new(&USER_STATE_TRANSITION_VK)
    }
}

impl<'k, const N: usize> ProofVerifier<'k, N> {
    pub fn new(vk: &'k VerifyingKey<N>) -> Self {
        Self::with_backend(vk, ArkBn254)
    }
}

impl<'k, const N: usize, B: CurveBackend> ProofVerifier<'k, N, B> {
    pub fn with_backend(vk: &'k VerifyingKey<N>, backend: B) -> Self {
        Self {
            vk,
            engine: PairingEngine::new(backend),
            policy: InputPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn vk(&self) -> &'k VerifyingKey<N> {
        self.vk
    }

    pub fn engine(&self) -> &PairingEngine<B> {
        &self.engine
    }

    pub fn num_inputs(&self) -> usize {
        N
    }

    /// Verify raw words as supplied by a caller.
    pub fn verify(&self, input: &[U256], proof: &RawProof) -> Result<bool, VerifierFault> {
        log::trace!("ProofVerifier::verify: >>> inputs: {}", input.len());
        let proof = Proof::from_words(proof);
        let input = self.select_inputs(input)?;
        let res = self.verify_proof(input, &proof);
        log::trace!("ProofVerifier::verify: <<< res: {:?}", res);
        res
    }

    /// Verify an already-decoded proof. Range checks still apply.
    pub fn verify_proof(&self, input: &[U256; N], proof: &Proof) -> Result<bool, VerifierFault> {
        check_proof_words(&proof.to_words())?;
        check_inputs(input)?;

        let vk_x = self.linear_combination(input)?;
        let neg_a = self.engine.negate(&proof.a);
        let holds = self.engine.pairing_check(
            &neg_a,
            &proof.b,
            &self.vk.alpha1,
            &self.vk.beta2,
            &vk_x,
            &self.vk.gamma2,
            &proof.c,
            &self.vk.delta2,
        )?;
        if !holds {
            log::debug!("ProofVerifier::verify_proof: pairing equation does not hold");
        }
        Ok(holds)
    }

    /// `IC[0] + Σ input[i]·IC[i+1]` after range-checking `input`.
    pub fn compute_vk_x(&self, input: &[U256; N]) -> Result<G1Point, VerifierFault> {
        check_inputs(input)?;
        self.linear_combination(input)
    }

    fn linear_combination(&self, input: &[U256; N]) -> Result<G1Point, VerifierFault> {
        let mut vk_x = self.engine.add(&G1Point::IDENTITY, &self.vk.ic0)?;
        for (point, scalar) in self.vk.ic.iter().zip(input.iter()) {
            let term = self.engine.scalar_mul(point, scalar)?;
            vk_x = self.engine.add(&vk_x, &term)?;
        }
        Ok(vk_x)
    }

    fn select_inputs<'a>(&self, input: &'a [U256]) -> Result<&'a [U256; N], VerifierFault> {
        let head = match self.policy {
            InputPolicy::Exact if input.len() != N => None,
            _ => input.get(..N),
        };
        let fault = VerifierFault::InputLength {
            expected: N,
            actual: input.len(),
        };
        let head: &[U256; N] = head
            .and_then(|s| <&[U256; N]>::try_from(s).ok())
            .ok_or_else(|| {
                log::debug!("ProofVerifier::verify: {fault}");
                fault
            })?;
        if input.len() > N {
            log::warn!(
                "ProofVerifier::verify: ignoring {} trailing input words",
                input.len() - N
            );
        }
        Ok(head)
    }
}

fn check_proof_words(words: &RawProof) -> Result<(), VerifierFault> {
    for (index, word) in words.iter().enumerate() {
        if !is_base_field(word) {
            log::debug!("proof word {index} >= q");
            return Err(VerifierFault::ProofWordOutOfRange { index });
        }
    }
    Ok(())
}

fn check_inputs(input: &[U256]) -> Result<(), VerifierFault> {
    for (index, word) in input.iter().enumerate() {
        if !is_scalar_field(word) {
            log::debug!("public input {index} >= r");
            return Err(VerifierFault::InputOutOfRange { index });
        }
    }
    Ok(())
}
