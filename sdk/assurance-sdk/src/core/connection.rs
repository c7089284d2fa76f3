use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;

use crate::core::config::ClientConfig;
use crate::error::Result;

/// The ledger operations the SDK needs. Implemented over RPC below and by
/// in-process test harnesses.
#[async_trait]
pub trait SolConnection: Send + Sync {
    /// Submits a signed transaction and waits for confirmation.
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> std::result::Result<Signature, Box<dyn Error + Send + Sync>>;
    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> std::result::Result<Option<Account>, Box<dyn Error + Send + Sync>>;
    async fn get_latest_blockhash(
        &self,
    ) -> std::result::Result<Hash, Box<dyn Error + Send + Sync>>;
}

/// `SolConnection` backed by the nonblocking JSON-RPC client.
pub struct RpcConnection {
    client: RpcClient,
}

impl RpcConnection {
    pub fn new(rpc_url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url.into(), commitment),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(config.rpc_url.clone(), config.commitment_config()?))
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> std::result::Result<Signature, Box<dyn Error + Send + Sync>> {
        Ok(self.client.send_and_confirm_transaction(tx).await?)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> std::result::Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(
        &self,
    ) -> std::result::Result<Hash, Box<dyn Error + Send + Sync>> {
        Ok(self.client.get_latest_blockhash().await?)
    }
}
