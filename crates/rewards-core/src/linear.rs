use bulletproofs::LinearProof;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::VartimeMultiscalarMul;
use merlin::Transcript;

use core::iter;

use crate::error::ProofError;
use crate::gens::ProofGens;

const LINEAR_TRANSCRIPT_LABEL: &[u8] = b"rewards linear proof";

/// Commitment material a verifier needs alongside a [`LinearProof`].
#[derive(Clone)]
pub struct LinearCommitments {
    pub g_vec: Vec<RistrettoPoint>,
    pub f: RistrettoPoint,
    pub b: RistrettoPoint,
    pub c: CompressedRistretto,
}

/// Proves knowledge of a private vector `a` with `<a, b> = c` for the
/// public vector `b`, without revealing `a`.
pub fn prove(
    gens: &ProofGens,
    private: Vec<Scalar>,
    public: Vec<Scalar>,
) -> Result<(LinearProof, LinearCommitments), ProofError> {
    let n = private.len();
    let mut rng = rand::thread_rng();
    let blinding = Scalar::random(&mut rng);

    let g_vec: Vec<RistrettoPoint> = gens.bulletproof.share(0).G(n).cloned().collect();
    let f = gens.pedersen.B;
    let b = gens.pedersen.B_blinding;

    // C = <a, G> + r * B + <a, b> * F
    let result_inner_product = inner_product(&private, &public);
    let c = RistrettoPoint::vartime_multiscalar_mul(
        private
            .iter()
            .chain(iter::once(&blinding))
            .chain(iter::once(&result_inner_product)),
        g_vec.iter().chain(iter::once(&b)).chain(iter::once(&f)),
    )
    .compress();

    let mut transcript = Transcript::new(LINEAR_TRANSCRIPT_LABEL);
    let proof = LinearProof::create(
        &mut transcript,
        &mut rng,
        &c,
        blinding,
        private,
        public,
        g_vec.clone(),
        &f,
        &b,
    )?;

    Ok((proof, LinearCommitments { g_vec, f, b, c }))
}

/// Verifies a linear proof against the public vector and commitments.
pub fn verify(proof: &LinearProof, public: Vec<Scalar>, commitments: &LinearCommitments) -> bool {
    let mut transcript = Transcript::new(LINEAR_TRANSCRIPT_LABEL);
    proof
        .verify(
            &mut transcript,
            &commitments.c,
            &commitments.g_vec,
            &commitments.f,
            &commitments.b,
            public,
        )
        .is_ok()
}

fn inner_product(a: &[Scalar], b: &[Scalar]) -> Scalar {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
