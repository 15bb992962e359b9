use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

use crate::error::ProofError;

/// Public per-incentive reward weights.
///
/// The length is the incentive catalog size and must be a nonzero power of
/// two: the linear proof operates on power-of-two vector lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyVector(Vec<u64>);

/// Private interaction counters, one per catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateVector(Vec<u64>);

impl PolicyVector {
    pub fn new(weights: Vec<u64>) -> Result<Self, ProofError> {
        validate_catalog_size(weights.len())?;
        Ok(Self(weights))
    }

    /// Policy where every catalog entry carries the same weight.
    pub fn uniform(catalog_size: usize, weight: u64) -> Result<Self, ProofError> {
        Self::new(vec![weight; catalog_size])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn weights(&self) -> &[u64] {
        &self.0
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        self.0.iter().copied().map(Scalar::from).collect()
    }

    /// Computes `<state, policy>` with checked arithmetic.
    pub fn expected_reward(&self, state: &StateVector) -> Result<u64, ProofError> {
        if state.len() != self.len() {
            return Err(ProofError::LengthMismatch {
                state: state.len(),
                policy: self.len(),
            });
        }
        self.0
            .iter()
            .zip(state.counters())
            .try_fold(0u64, |acc, (weight, counter)| {
                weight
                    .checked_mul(*counter)
                    .and_then(|term| acc.checked_add(term))
                    .ok_or(ProofError::RewardOverflow)
            })
    }
}

impl StateVector {
    pub fn new(counters: Vec<u64>) -> Result<Self, ProofError> {
        validate_catalog_size(counters.len())?;
        Ok(Self(counters))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn counters(&self) -> &[u64] {
        &self.0
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        self.0.iter().copied().map(Scalar::from).collect()
    }
}

fn validate_catalog_size(len: usize) -> Result<(), ProofError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(ProofError::InvalidCatalogSize(len));
    }
    Ok(())
}
