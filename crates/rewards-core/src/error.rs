use thiserror::Error;

/// Errors surfaced while building, encoding or decoding rewards proofs.
///
/// Verification itself is deliberately boolean: a proof that decodes but
/// does not check out is a rejected claim, not an error.
#[derive(Error, Debug)]
pub enum ProofError {
    #[error("incentive catalog size must be a nonzero power of two, got {0}")]
    InvalidCatalogSize(usize),

    #[error("state vector length {state} does not match policy length {policy}")]
    LengthMismatch { state: usize, policy: usize },

    #[error("reward computation overflowed u64")]
    RewardOverflow,

    #[error("proof construction failed: {0}")]
    Bulletproof(#[from] bulletproofs::ProofError),

    #[error("malformed proof encoding: {0}")]
    Malformed(&'static str),
}
