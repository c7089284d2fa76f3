use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AssuranceSdkError, Result};

/// Abstraction over whatever holds the user's key.
/// This allows the SDK to work with:
/// 1. Local Keypairs (Backend/CLI)
/// 2. Browser wallet adapters, which sign on request and may be disconnected
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Address of the connected account, `None` while disconnected.
    fn pubkey(&self) -> Option<Pubkey>;

    fn is_connected(&self) -> bool {
        self.pubkey().is_some()
    }

    async fn connect(&self) -> Result<Pubkey>;

    async fn disconnect(&self) -> Result<()>;

    /// Adds this wallet's signature using the transaction's recent blockhash.
    async fn sign_transaction(&self, tx: &mut Transaction) -> Result<()>;

    /// Signs every transaction in `txs`; a disconnected wallet signs none.
    async fn sign_all_transactions(&self, txs: &mut [Transaction]) -> Result<()>;
}

/// Wallet adapter over a local keypair.
pub struct KeypairWallet {
    keypair: Keypair,
    connected: AtomicBool,
}

impl KeypairWallet {
    /// Starts disconnected, like a freshly detected browser wallet.
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(false),
        }
    }

    /// Starts already connected.
    pub fn connected(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(true),
        }
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(AssuranceSdkError::Wallet("wallet not connected".to_string()))
        }
    }

    fn sign_with_keypair(&self, tx: &mut Transaction) -> Result<()> {
        let blockhash = tx.message.recent_blockhash;
        tx.try_partial_sign(&[&self.keypair], blockhash)
            .map_err(|e| AssuranceSdkError::Wallet(e.to_string()))
    }
}

#[async_trait]
impl WalletAdapter for KeypairWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        self.connected
            .load(Ordering::Acquire)
            .then(|| self.keypair.pubkey())
    }

    async fn connect(&self) -> Result<Pubkey> {
        self.connected.store(true, Ordering::Release);
        log::debug!("wallet connected: {}", self.keypair.pubkey());
        Ok(self.keypair.pubkey())
    }

    async fn disconnect(&self) -> Result<()> {
        self.connected.store(false, Ordering::Release);
        log::debug!("wallet disconnected: {}", self.keypair.pubkey());
        Ok(())
    }

    async fn sign_transaction(&self, tx: &mut Transaction) -> Result<()> {
        self.ensure_connected()?;
        self.sign_with_keypair(tx)
    }

    async fn sign_all_transactions(&self, txs: &mut [Transaction]) -> Result<()> {
        self.ensure_connected()?;
        for tx in txs.iter_mut() {
            self.sign_with_keypair(tx)?;
        }
        log::debug!("wallet {} signed {} transaction(s)", self.keypair.pubkey(), txs.len());
        Ok(())
    }
}
