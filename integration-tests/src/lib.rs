//! End-to-end flows across the prover SDK, the claim engine and the
//! verifier server.

pub use claim_engine::{ClaimEngine, EngineError};
pub use rewards_core::policy::{PolicyVector, StateVector};
pub use rewards_sdk::{DatabaseLocation, RewardsProver};
pub use verifier_server::VerifierServer;

#[cfg(test)]
mod claim_flow_test;
