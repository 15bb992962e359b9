use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("verification ledger is not initialized")]
    NotInitialized,

    #[error("verification ledger is already initialized")]
    AlreadyInitialized,

    #[error("claim {0} was already recorded")]
    DuplicateClaim(String),

    #[error("malformed rewards proof: {0}")]
    MalformedProof(#[from] rewards_core::ProofError),

    #[error("invalid policy: {0}")]
    Policy(String),

    #[error("storage error: {0}")]
    Storage(#[from] tokio_rusqlite::Error),

    #[error("verifier task failed: {0}")]
    VerifierTask(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
