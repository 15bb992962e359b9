//! Proof construction and verification primitives for rewards claims.
//!
//! A rewards claim asserts that a reward value equals the inner product of a
//! private interaction-state vector with a public policy vector, without
//! revealing either the reward or the state. The claim is backed by two
//! Bulletproofs primitives sharing one generator set: a 64-bit range proof
//! over the reward and a linear proof over the inner product.

#![allow(clippy::too_many_arguments)]

pub mod claim;
pub mod error;
pub mod gens;
pub mod linear;
pub mod policy;
pub mod range;
pub mod wire;

pub use claim::{prove_reward, verify_reward, RewardsProof};
pub use error::ProofError;
pub use gens::{setup, ProofGens, REWARD_RANGE_BITS};
pub use policy::{PolicyVector, StateVector};
pub use wire::RewardsProofBytes;
