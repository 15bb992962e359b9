use rewards_core::gens::{self, ProofGens};
use rewards_core::policy::PolicyVector;
use rewards_core::wire::RewardsProofBytes;
use rewards_core::{verify_reward, RewardsProof};
use rewards_sdk::{to_hex_string, DatabaseLocation};
use sha2::{Digest, Sha256};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;
use tokio_rusqlite::Connection;
use tracing::info;

use crate::db::{
    get_claim_by_id, get_claims_for_author, get_genesis, insert_claim, insert_genesis,
    setup_claims_database,
};
use crate::error::{EngineError, Result};
use crate::models::{ClaimRecord, LedgerGenesis};

/// Policy and generators of an initialized ledger.
struct LedgerState {
    policy: PolicyVector,
    gens: Arc<ProofGens>,
    genesis: LedgerGenesis,
}

/// Verification ledger engine.
///
/// Owns the claims database and the committed policy. Proof verification
/// runs on the blocking thread pool so the async executor is never stalled
/// by curve arithmetic.
pub struct ClaimEngine {
    connection: Arc<Connection>,
    ledger: RwLock<Option<LedgerState>>,
}

impl ClaimEngine {
    /// Opens (or creates) the claims database and loads an existing ledger
    /// genesis if one was committed in a previous run.
    pub async fn seed(database_location: &DatabaseLocation) -> Result<Self> {
        let connection = Arc::new(match database_location.clone() {
            DatabaseLocation::InMemory => Connection::open_in_memory().await?,
            DatabaseLocation::Directory(path) => {
                Connection::open(claims_database_path(path)).await?
            }
        });

        setup_claims_database(&connection).await?;

        let ledger = match get_genesis(&connection).await? {
            Some((genesis, policy_json)) => {
                let policy: PolicyVector = serde_json::from_str(&policy_json)
                    .map_err(|e| EngineError::Policy(e.to_string()))?;
                let gens = Arc::new(gens::setup(policy.len()));
                info!(
                    catalog_size = policy.len(),
                    signature = %genesis.signature,
                    "Loaded existing ledger genesis"
                );
                Some(LedgerState {
                    policy,
                    gens,
                    genesis,
                })
            }
            None => None,
        };

        Ok(Self {
            connection,
            ledger: RwLock::new(ledger),
        })
    }

    pub fn is_initialized(&self) -> bool {
        // Used on startup paths only; the async lock is uncontended there.
        self.ledger.try_read().map(|l| l.is_some()).unwrap_or(false)
    }

    /// Commits the reward policy as the ledger genesis.
    ///
    /// Returns the opaque genesis signature. Initializing twice is an
    /// error, including across restarts of a directory-backed ledger.
    pub async fn initialize(&self, policy: PolicyVector) -> Result<String> {
        let mut ledger = self.ledger.write().await;
        if ledger.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }

        let policy_json =
            serde_json::to_string(&policy).map_err(|e| EngineError::Policy(e.to_string()))?;
        let policy_digest: [u8; 32] = Sha256::digest(policy_json.as_bytes()).into();
        let timestamp = unix_timestamp();

        let mut hasher = Sha256::new();
        hasher.update(policy_digest);
        hasher.update(timestamp.to_le_bytes());
        let signature = to_hex_string(&hasher.finalize());

        let genesis = LedgerGenesis {
            policy_digest,
            signature: signature.clone(),
            timestamp,
        };

        if !insert_genesis(&self.connection, genesis.clone(), policy_json).await? {
            return Err(EngineError::AlreadyInitialized);
        }

        info!(
            catalog_size = policy.len(),
            signature = %signature,
            "Ledger initialized"
        );

        let gens = Arc::new(gens::setup(policy.len()));
        *ledger = Some(LedgerState {
            policy,
            gens,
            genesis,
        });
        Ok(signature)
    }

    /// Verifies a submitted proof bundle and records the outcome.
    ///
    /// A proof that decodes but fails verification is still persisted with
    /// `verified = false`; resubmitting the same claim is an error.
    pub async fn verify_rewards_proof(
        &self,
        author: &str,
        bundle: RewardsProofBytes,
    ) -> Result<ClaimRecord> {
        let (policy, gens) = {
            let ledger = self.ledger.read().await;
            let state = ledger.as_ref().ok_or(EngineError::NotInitialized)?;
            (state.policy.clone(), state.gens.clone())
        };

        let proof = bundle.decode()?;
        let claim_id = claim_id(author, &bundle);

        let verified = verify_on_blocking_thread(gens, proof, policy).await?;
        let record = ClaimRecord {
            claim_id,
            author: author.to_string(),
            reward_commitment: bundle.range_commitment,
            verified,
            timestamp: unix_timestamp(),
        };

        if !insert_claim(&self.connection, record.clone()).await? {
            return Err(EngineError::DuplicateClaim(to_hex_string(&claim_id)));
        }

        info!(
            author,
            verified,
            claim_id = %to_hex_string(&claim_id),
            "Recorded rewards claim"
        );
        Ok(record)
    }

    pub async fn get_claims_for_author(
        &self,
        author: &str,
        page: u32,
        page_size: Option<u32>,
    ) -> Result<Vec<ClaimRecord>> {
        let page_size = page_size.unwrap_or(50);
        get_claims_for_author(&self.connection, author.to_string(), page, page_size).await
    }

    pub async fn get_claim_by_id(&self, claim_id: [u8; 32]) -> Result<Option<ClaimRecord>> {
        get_claim_by_id(&self.connection, claim_id).await
    }

    pub async fn policy(&self) -> Result<PolicyVector> {
        let ledger = self.ledger.read().await;
        ledger
            .as_ref()
            .map(|state| state.policy.clone())
            .ok_or(EngineError::NotInitialized)
    }

    pub async fn genesis(&self) -> Result<LedgerGenesis> {
        let ledger = self.ledger.read().await;
        ledger
            .as_ref()
            .map(|state| state.genesis.clone())
            .ok_or(EngineError::NotInitialized)
    }
}

/// Claim ids commit to the author and both proof commitments, so one
/// bundle cannot be replayed nor credited to a different author.
fn claim_id(author: &str, bundle: &RewardsProofBytes) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(author.as_bytes());
    hasher.update(bundle.range_commitment);
    hasher.update(bundle.linear_c);
    hasher.finalize().into()
}

async fn verify_on_blocking_thread(
    gens: Arc<ProofGens>,
    proof: RewardsProof,
    policy: PolicyVector,
) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_reward(&gens, &proof, &policy))
        .await
        .map_err(|e| EngineError::VerifierTask(e.to_string()))
}

fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn claims_database_path(directory: String) -> String {
    let path = PathBuf::from(directory);
    let claims_db_path = path.join("claims.db");
    claims_db_path.to_string_lossy().to_string()
}
