use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Verified,
    Rejected,
}

/// One verified-or-rejected claim submission, as persisted in the ledger.
///
/// Mirrors the on-chain verification state: who submitted, when, and
/// whether the proof checked out. The reward commitment is kept so a
/// verified claim can later be settled against its committed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub claim_id: [u8; 32],
    pub author: String,
    pub reward_commitment: [u8; 32],
    pub verified: bool,
    pub timestamp: i64,
}

impl ClaimRecord {
    pub fn status(&self) -> ClaimStatus {
        if self.verified {
            ClaimStatus::Verified
        } else {
            ClaimStatus::Rejected
        }
    }
}

/// Ledger genesis row written by `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerGenesis {
    pub policy_digest: [u8; 32],
    pub signature: String,
    pub timestamp: i64,
}
