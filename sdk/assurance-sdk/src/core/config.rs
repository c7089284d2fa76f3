use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::constants::{
    DEFAULT_COMMITMENT, DEFAULT_KEYPAIR_PATH, DEFAULT_PROGRAM_ID, DEFAULT_RPC_URL,
};
use crate::error::{AssuranceSdkError, Result};

pub const RPC_URL_VAR: &str = "RPC_URL";
pub const KEYPAIR_PATH_VAR: &str = "KEYPAIR_PATH";
pub const PROGRAM_ID_VAR: &str = "ASSURANCE_PROGRAM_ID";
pub const COMMITMENT_VAR: &str = "ASSURANCE_COMMITMENT";

/// Where to connect, who pays, and which program to target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    /// Base58 program address
    pub program_id: String,
    /// One of `processed`, `confirmed`, `finalized`
    pub commitment: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            keypair_path: default_keypair_path(std::env::var_os("HOME").map(PathBuf::from)),
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `RPC_URL`, `KEYPAIR_PATH`, `ASSURANCE_PROGRAM_ID` and
    /// `ASSURANCE_COMMITMENT`, falling back to defaults for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: lookup(RPC_URL_VAR).unwrap_or(defaults.rpc_url),
            keypair_path: lookup(KEYPAIR_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.keypair_path),
            program_id: lookup(PROGRAM_ID_VAR).unwrap_or(defaults.program_id),
            commitment: lookup(COMMITMENT_VAR).unwrap_or(defaults.commitment),
        }
    }

    pub fn program_id(&self) -> Result<Pubkey> {
        Pubkey::from_str(&self.program_id).map_err(|e| {
            AssuranceSdkError::Config(format!("invalid program id {}: {}", self.program_id, e))
        })
    }

    pub fn commitment_config(&self) -> Result<CommitmentConfig> {
        match self.commitment.as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(AssuranceSdkError::Config(format!(
                "unknown commitment level: {}",
                other
            ))),
        }
    }

    pub fn load_keypair(&self) -> Result<Keypair> {
        load_keypair(&self.keypair_path)
    }
}

fn default_keypair_path(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| PathBuf::from(".")).join(DEFAULT_KEYPAIR_PATH)
}

/// Loads a keypair from the JSON byte-array format written by `solana-keygen`.
pub fn load_keypair(path: &Path) -> Result<Keypair> {
    read_keypair_file(path).map_err(|e| {
        AssuranceSdkError::Config(format!("failed to read keypair {}: {}", path.display(), e))
    })
}
