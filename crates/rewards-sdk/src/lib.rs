//! Client-side helpers for producing rewards claims: async proof
//! generation on the blocking thread pool plus small utilities shared by
//! the engine and server binaries.

pub mod errors;
pub mod prover;

pub use errors::{Result, RewardsSdkError};
pub use prover::{ProvedClaim, RewardsProver};

use std::fmt::Write;
use std::str::FromStr;

/// Reads a hex-encoded file into raw bytes.
pub fn load_hex_bytes(file: &str) -> Result<Vec<u8>> {
    let hex_string = std::fs::read_to_string(file)
        .map_err(|e| RewardsSdkError::HexFile(format!("{file}: {e}")))?;
    hex::decode(hex_string.trim()).map_err(|e| RewardsSdkError::HexFile(format!("{file}: {e}")))
}

pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Where to store the database (in-memory or on disk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    InMemory,
    Directory(String),
}

impl FromStr for DatabaseLocation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "memory" => Ok(DatabaseLocation::InMemory),
            s => Ok(DatabaseLocation::Directory(s.to_string())),
        }
    }
}

/// Format a `Duration` for pretty printing in results.
pub fn format_duration(duration: std::time::Duration) -> String {
    if duration.as_secs() == 0 {
        return format!("{} ms", duration.as_millis());
    }
    if duration.as_secs() < 60 {
        return format!("{:.2} s", duration.as_secs_f64());
    }
    if duration.as_secs() < 3600 {
        return format!("{:.2} min", duration.as_secs_f64() / 60.0);
    }
    format!("{:.2} h", duration.as_secs_f64() / 3600.0)
}
