use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewardsSdkError {
    #[error("failed to construct rewards proof: {0}")]
    Proof(#[from] rewards_core::ProofError),

    #[error("prover task failed: {0}")]
    ProverTask(String),

    #[error("failed to load hex file: {0}")]
    HexFile(String),
}

pub type Result<T> = std::result::Result<T, RewardsSdkError>;
