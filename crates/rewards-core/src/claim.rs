use bulletproofs::{LinearProof, RangeProof};
use curve25519_dalek::ristretto::CompressedRistretto;

use crate::error::ProofError;
use crate::gens::{ProofGens, REWARD_RANGE_BITS};
use crate::linear::{self, LinearCommitments};
use crate::policy::{PolicyVector, StateVector};
use crate::range;

/// A complete rewards claim proof.
///
/// The range proof shows the claimed reward is a valid 64-bit value under
/// the commitment; the linear proof shows the committed state vector
/// satisfies `<state, policy> = reward` for the public policy.
#[derive(Clone)]
pub struct RewardsProof {
    pub range_proof: RangeProof,
    pub range_commitment: CompressedRistretto,
    pub linear_proof: LinearProof,
    pub linear_commitments: LinearCommitments,
}

/// Builds the proof pair for a claimed reward.
///
/// `reward` must equal `<state, policy>` or verification will fail; callers
/// normally derive it via [`PolicyVector::expected_reward`].
pub fn prove_reward(
    gens: &ProofGens,
    reward: u64,
    state: &StateVector,
    policy: &PolicyVector,
) -> Result<RewardsProof, ProofError> {
    if state.len() != policy.len() {
        return Err(ProofError::LengthMismatch {
            state: state.len(),
            policy: policy.len(),
        });
    }

    let (range_proof, range_commitment) = range::prove(gens, reward, REWARD_RANGE_BITS)?;
    let (linear_proof, linear_commitments) =
        linear::prove(gens, state.to_scalars(), policy.to_scalars())?;

    Ok(RewardsProof {
        range_proof,
        range_commitment,
        linear_proof,
        linear_commitments,
    })
}

/// Verifies both component proofs against the public policy.
pub fn verify_reward(gens: &ProofGens, proof: &RewardsProof, policy: &PolicyVector) -> bool {
    range::verify(
        gens,
        &proof.range_proof,
        &proof.range_commitment,
        REWARD_RANGE_BITS,
    ) && linear::verify(
        &proof.linear_proof,
        policy.to_scalars(),
        &proof.linear_commitments,
    )
}
