use solana_sdk::pubkey::{Pubkey, PubkeyError};
use thiserror::Error;

/// SDK-specific error types for Bank Assurance operations
#[derive(Debug, Error)]
pub enum AssuranceSdkError {
    /// Connection or RPC error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Program address derivation failed
    #[error("Address derivation failed: {0}")]
    Derivation(#[from] PubkeyError),

    /// Text does not fit its fixed-width field (strict builders only)
    #[error("Field `{field}` is {len} bytes, limit is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Builder was asked to build without a required value
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Wallet adapter refused or failed
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, AssuranceSdkError>;
