use bulletproofs::{LinearProof, RangeProof};
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use serde::{Deserialize, Serialize};

use crate::claim::RewardsProof;
use crate::error::ProofError;
use crate::linear::LinearCommitments;

/// Wire encoding of a [`RewardsProof`].
///
/// Points travel as compressed 32-byte encodings and the component proofs
/// as their canonical byte strings, so a bundle can cross a JSON or sqlite
/// boundary and be reconstructed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsProofBytes {
    pub range_proof: Vec<u8>,
    pub range_commitment: [u8; 32],
    pub linear_proof: Vec<u8>,
    pub linear_g: Vec<[u8; 32]>,
    pub linear_f: [u8; 32],
    pub linear_b: [u8; 32],
    pub linear_c: [u8; 32],
}

impl RewardsProofBytes {
    pub fn encode(proof: &RewardsProof) -> Self {
        Self {
            range_proof: proof.range_proof.to_bytes(),
            range_commitment: proof.range_commitment.to_bytes(),
            linear_proof: proof.linear_proof.to_bytes(),
            linear_g: proof
                .linear_commitments
                .g_vec
                .iter()
                .map(|point| point.compress().to_bytes())
                .collect(),
            linear_f: proof.linear_commitments.f.compress().to_bytes(),
            linear_b: proof.linear_commitments.b.compress().to_bytes(),
            linear_c: proof.linear_commitments.c.to_bytes(),
        }
    }

    /// Reconstructs the in-memory proof; never panics on malformed input.
    pub fn decode(&self) -> Result<RewardsProof, ProofError> {
        let range_proof = RangeProof::from_bytes(&self.range_proof)
            .map_err(|_| ProofError::Malformed("range proof bytes"))?;
        let linear_proof = LinearProof::from_bytes(&self.linear_proof)
            .map_err(|_| ProofError::Malformed("linear proof bytes"))?;

        let g_vec = self
            .linear_g
            .iter()
            .map(|bytes| decompress_point(*bytes, "linear generator point"))
            .collect::<Result<Vec<_>, _>>()?;
        let f = decompress_point(self.linear_f, "linear F point")?;
        let b = decompress_point(self.linear_b, "linear B point")?;

        Ok(RewardsProof {
            range_proof,
            range_commitment: CompressedRistretto(self.range_commitment),
            linear_proof,
            linear_commitments: LinearCommitments {
                g_vec,
                f,
                b,
                c: CompressedRistretto(self.linear_c),
            },
        })
    }
}

fn decompress_point(
    bytes: [u8; 32],
    what: &'static str,
) -> Result<RistrettoPoint, ProofError> {
    CompressedRistretto(bytes)
        .decompress()
        .ok_or(ProofError::Malformed(what))
}
