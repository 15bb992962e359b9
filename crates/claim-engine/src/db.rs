use tokio_rusqlite::{params, Connection};

use crate::error::Result;
use crate::models::{ClaimRecord, LedgerGenesis};

/// Run initial table creation / migrations on an existing
/// `tokio_rusqlite::Connection`.
pub async fn setup_claims_database(conn: &Connection) -> Result<()> {
    let schema = r#"
        CREATE TABLE IF NOT EXISTS ledger_genesis (
            id             INTEGER   PRIMARY KEY CHECK (id = 0),
            policy_digest  BLOB(32)  NOT NULL,
            policy_json    TEXT      NOT NULL,
            signature      TEXT      NOT NULL,
            created_at     INTEGER   NOT NULL
        );

        CREATE TABLE IF NOT EXISTS claims (
            claim_id           BLOB(32)  PRIMARY KEY,
            author             TEXT      NOT NULL,
            reward_commitment  BLOB(32)  NOT NULL,
            verified           INTEGER   NOT NULL,
            created_at         INTEGER   NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_claims_author ON claims(author);
    "#;

    conn.call(move |conn| {
        conn.execute_batch(schema)?;
        Ok(())
    })
    .await?;
    Ok(())
}

/// Writes the genesis row. Returns `false` if the ledger already has one.
pub async fn insert_genesis(
    conn: &Connection,
    genesis: LedgerGenesis,
    policy_json: String,
) -> Result<bool> {
    let inserted = conn
        .call(move |conn| {
            let existing: i64 =
                conn.query_row("SELECT COUNT(*) FROM ledger_genesis", [], |row| row.get(0))?;
            if existing > 0 {
                return Ok(false);
            }
            conn.execute(
                "INSERT INTO ledger_genesis (id, policy_digest, policy_json, signature, created_at)
                 VALUES (0, ?1, ?2, ?3, ?4)",
                params![
                    genesis.policy_digest.to_vec(),
                    policy_json,
                    genesis.signature,
                    genesis.timestamp
                ],
            )?;
            Ok(true)
        })
        .await?;
    Ok(inserted)
}

/// Reads the genesis row plus the stored policy JSON, if initialized.
pub async fn get_genesis(conn: &Connection) -> Result<Option<(LedgerGenesis, String)>> {
    let genesis = conn
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT policy_digest, policy_json, signature, created_at FROM ledger_genesis",
            )?;
            let mut rows = stmt.query([])?;

            if let Some(row) = rows.next()? {
                let policy_digest = blob_32(row.get(0)?, "policy_digest")?;
                let policy_json: String = row.get(1)?;
                let signature: String = row.get(2)?;
                let timestamp: i64 = row.get(3)?;
                Ok(Some((
                    LedgerGenesis {
                        policy_digest,
                        signature,
                        timestamp,
                    },
                    policy_json,
                )))
            } else {
                Ok(None)
            }
        })
        .await?;
    Ok(genesis)
}

/// Persists a claim record. Returns `false` if the claim id already exists.
pub async fn insert_claim(conn: &Connection, record: ClaimRecord) -> Result<bool> {
    let inserted = conn
        .call(move |conn| {
            let existing: i64 = conn.query_row(
                "SELECT COUNT(*) FROM claims WHERE claim_id = ?1",
                params![record.claim_id.to_vec()],
                |row| row.get(0),
            )?;
            if existing > 0 {
                return Ok(false);
            }
            conn.execute(
                "INSERT INTO claims (claim_id, author, reward_commitment, verified, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.claim_id.to_vec(),
                    record.author,
                    record.reward_commitment.to_vec(),
                    record.verified,
                    record.timestamp
                ],
            )?;
            Ok(true)
        })
        .await?;
    Ok(inserted)
}

/// Claims submitted by one author, newest first, paged.
pub async fn get_claims_for_author(
    conn: &Connection,
    author: String,
    page: u32,
    page_size: u32,
) -> Result<Vec<ClaimRecord>> {
    let records = conn
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT claim_id, author, reward_commitment, verified, created_at
                 FROM claims
                 WHERE author = ?1
                 ORDER BY created_at DESC, claim_id DESC
                 LIMIT ?2 OFFSET ?3",
            )?;
            // Widen before multiplying: the page number is caller-supplied
            // and u32 arithmetic would overflow on hostile input.
            let offset = (page as i64) * (page_size as i64);
            let mut rows = stmt.query(params![author, page_size, offset])?;

            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                let claim_id = blob_32(row.get(0)?, "claim_id")?;
                let author: String = row.get(1)?;
                let reward_commitment = blob_32(row.get(2)?, "reward_commitment")?;
                let verified: bool = row.get(3)?;
                let timestamp: i64 = row.get(4)?;
                records.push(ClaimRecord {
                    claim_id,
                    author,
                    reward_commitment,
                    verified,
                    timestamp,
                });
            }
            Ok(records)
        })
        .await?;
    Ok(records)
}

pub async fn get_claim_by_id(conn: &Connection, claim_id: [u8; 32]) -> Result<Option<ClaimRecord>> {
    let record = conn
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT claim_id, author, reward_commitment, verified, created_at
                 FROM claims
                 WHERE claim_id = ?1",
            )?;
            let mut rows = stmt.query(params![claim_id.to_vec()])?;

            if let Some(row) = rows.next()? {
                let claim_id = blob_32(row.get(0)?, "claim_id")?;
                let author: String = row.get(1)?;
                let reward_commitment = blob_32(row.get(2)?, "reward_commitment")?;
                let verified: bool = row.get(3)?;
                let timestamp: i64 = row.get(4)?;
                Ok(Some(ClaimRecord {
                    claim_id,
                    author,
                    reward_commitment,
                    verified,
                    timestamp,
                }))
            } else {
                Ok(None)
            }
        })
        .await?;
    Ok(record)
}

fn blob_32(
    bytes: Vec<u8>,
    column: &'static str,
) -> std::result::Result<[u8; 32], tokio_rusqlite::Error> {
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| tokio_rusqlite::Error::Other(format!("Invalid {column} length").into()))
}
