//! Persistent verification ledger for rewards claims.
//!
//! The engine owns the two externally visible operations of the verifier:
//! `initialize`, which commits a reward policy as the ledger genesis, and
//! `verify_rewards_proof`, which checks a submitted proof bundle against
//! that policy and records the outcome.

pub mod db;
pub mod engine;
pub mod error;
pub mod models;

pub use engine::ClaimEngine;
pub use error::EngineError;
pub use models::{ClaimRecord, ClaimStatus, LedgerGenesis};
