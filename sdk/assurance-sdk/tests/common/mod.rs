#![allow(dead_code)]

use assurance_sdk::core::connection::SolConnection;
use async_trait::async_trait;
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory ledger: fixed blockhash, a seeded account map and a log of
/// everything submitted.
pub struct MockConnection {
    pub blockhash: Hash,
    accounts: Arc<Mutex<HashMap<Pubkey, Account>>>,
    sent: Arc<Mutex<Vec<Transaction>>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            accounts: Arc::new(Mutex::new(HashMap::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn insert_account(&self, address: Pubkey, owner: Pubkey) {
        let account = Account {
            lamports: 1_000_000,
            data: Vec::new(),
            owner,
            executable: false,
            rent_epoch: 0,
        };
        self.accounts.lock().await.insert(address, account);
    }

    pub async fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        tx.verify()?;
        let signature = *tx.signatures.first().ok_or("No signature")?;
        self.sent.lock().await.push(tx.clone());
        Ok(signature)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        Ok(self.accounts.lock().await.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        Ok(self.blockhash)
    }
}

/// Connection whose every call fails, for error-path tests.
pub struct OfflineConnection;

#[async_trait]
impl SolConnection for OfflineConnection {
    async fn send_transaction(
        &self,
        _tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        Err("connection refused".into())
    }

    async fn get_account(
        &self,
        _pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        Err("connection refused".into())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        Err("connection refused".into())
    }
}
