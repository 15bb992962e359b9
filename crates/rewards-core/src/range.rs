use bulletproofs::RangeProof;
use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;

use crate::error::ProofError;
use crate::gens::ProofGens;

const RANGE_TRANSCRIPT_LABEL: &[u8] = b"rewards range proof";

/// Proves `0 <= value < 2^bits` under a fresh Pedersen commitment.
///
/// Returns the proof together with the commitment to `value`.
pub fn prove(
    gens: &ProofGens,
    value: u64,
    bits: usize,
) -> Result<(RangeProof, CompressedRistretto), ProofError> {
    let mut rng = rand::thread_rng();
    let blinding = Scalar::random(&mut rng);

    let mut transcript = Transcript::new(RANGE_TRANSCRIPT_LABEL);
    let (proof, commitment) = RangeProof::prove_single(
        &gens.bulletproof,
        &gens.pedersen,
        &mut transcript,
        value,
        &blinding,
        bits,
    )?;
    Ok((proof, commitment))
}

/// Verifies a range proof against its commitment.
pub fn verify(
    gens: &ProofGens,
    proof: &RangeProof,
    commitment: &CompressedRistretto,
    bits: usize,
) -> bool {
    let mut transcript = Transcript::new(RANGE_TRANSCRIPT_LABEL);
    proof
        .verify_single(
            &gens.bulletproof,
            &gens.pedersen,
            &mut transcript,
            commitment,
            bits,
        )
        .is_ok()
}

/// Verifies a batch of independent range proofs; all must pass.
pub fn verify_batch(
    gens: &ProofGens,
    proofs: &[(RangeProof, CompressedRistretto)],
    bits: usize,
) -> bool {
    proofs
        .iter()
        .all(|(proof, commitment)| verify(gens, proof, commitment, bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::{setup, REWARD_RANGE_BITS};

    #[test]
    fn proves_and_verifies_a_reward_in_range() {
        let gens = setup(64);
        let (proof, commitment) = prove(&gens, 254, REWARD_RANGE_BITS).unwrap();
        assert!(verify(&gens, &proof, &commitment, REWARD_RANGE_BITS));
    }

    #[test]
    fn rejects_value_exceeding_the_range() {
        let gens = setup(64);
        // 300 does not fit in 8 bits: either proving fails or the proof
        // must not verify.
        match prove(&gens, 300, 8) {
            Err(_) => {}
            Ok((proof, commitment)) => assert!(!verify(&gens, &proof, &commitment, 8)),
        }
    }

    #[test]
    fn rejects_commitment_swap() {
        let gens = setup(64);
        let (proof, _) = prove(&gens, 100, REWARD_RANGE_BITS).unwrap();
        let (_, other_commitment) = prove(&gens, 101, REWARD_RANGE_BITS).unwrap();
        assert!(!verify(&gens, &proof, &other_commitment, REWARD_RANGE_BITS));
    }

    #[test]
    fn batch_fails_if_any_proof_fails() {
        let gens = setup(64);
        let good = prove(&gens, 12, REWARD_RANGE_BITS).unwrap();
        let (bad_proof, _) = prove(&gens, 13, REWARD_RANGE_BITS).unwrap();
        let (_, unrelated_commitment) = prove(&gens, 14, REWARD_RANGE_BITS).unwrap();

        assert!(verify_batch(&gens, &[good.clone()], REWARD_RANGE_BITS));
        assert!(!verify_batch(
            &gens,
            &[good, (bad_proof, unrelated_commitment)],
            REWARD_RANGE_BITS
        ));
    }
}
