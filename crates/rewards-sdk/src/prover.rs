use rewards_core::gens::{self, ProofGens};
use rewards_core::policy::{PolicyVector, StateVector};
use rewards_core::wire::RewardsProofBytes;
use rewards_core::{claim, verify_reward};

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::{Result, RewardsSdkError};
use crate::format_duration;

/// Produces rewards claims without blocking the async executor.
///
/// Proof construction is CPU-intensive, so it runs on a dedicated blocking
/// thread via `spawn_blocking`.
pub struct RewardsProver {
    gens: Arc<ProofGens>,
    catalog_size: usize,
}

/// A finished claim: the claimed reward, its wire-encoded proof bundle and
/// how long proving took.
#[derive(Debug, Clone)]
pub struct ProvedClaim {
    pub reward: u64,
    pub proof: RewardsProofBytes,
    pub duration: Duration,
}

impl RewardsProver {
    pub fn new(catalog_size: usize) -> Self {
        Self {
            gens: Arc::new(gens::setup(catalog_size)),
            catalog_size,
        }
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    pub fn gens(&self) -> Arc<ProofGens> {
        self.gens.clone()
    }

    /// Derives the reward from `<state, policy>` and proves the claim.
    pub async fn prove_claim(
        &self,
        state: StateVector,
        policy: PolicyVector,
    ) -> Result<ProvedClaim> {
        let gens = self.gens.clone();

        let proved = tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let reward = policy.expected_reward(&state)?;
            let proof = claim::prove_reward(&gens, reward, &state, &policy)?;
            Ok::<ProvedClaim, RewardsSdkError>(ProvedClaim {
                reward,
                proof: RewardsProofBytes::encode(&proof),
                duration: start.elapsed(),
            })
        })
        .await
        .map_err(|e| RewardsSdkError::ProverTask(e.to_string()))??;

        tracing::info!(
            reward = proved.reward,
            "Completed rewards proof in {}",
            format_duration(proved.duration)
        );
        Ok(proved)
    }

    /// Local sanity check that a bundle verifies against a policy.
    pub fn check_bundle(&self, bundle: &RewardsProofBytes, policy: &PolicyVector) -> Result<bool> {
        let proof = bundle.decode()?;
        Ok(verify_reward(&self.gens, &proof, policy))
    }
}
