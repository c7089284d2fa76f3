use crate::basic::actions::{
    CreateProfileBuilder, FileClaimBuilder, MakePaymentBuilder, ProcessClaimBuilder,
    PurchasePolicyBuilder,
};
use crate::core::config::ClientConfig;
use crate::core::connection::SolConnection;
use crate::core::constants::DEFAULT_PROGRAM_ID;
use crate::core::signer::WalletAdapter;
use crate::error::{AssuranceSdkError, Result};
use crate::utils;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::transaction::Transaction;

/// Entry point for building Bank Assurance transactions on behalf of one payer.
#[derive(Debug, Clone)]
pub struct AssuranceClient {
    /// Program ID of the Bank Assurance contract
    pub program_id: Pubkey,

    /// Fee payer and default signer for every instruction
    pub payer: Pubkey,
}

impl AssuranceClient {
    pub const DEFAULT_PROGRAM_ID: Pubkey = DEFAULT_PROGRAM_ID;

    /// Client for the default program ID
    pub fn new(payer: Pubkey) -> Self {
        Self::with_program_id(Self::DEFAULT_PROGRAM_ID, payer)
    }

    pub fn with_program_id(program_id: Pubkey, payer: Pubkey) -> Self {
        Self { program_id, payer }
    }

    /// Client for the program ID named in `config`
    pub fn from_config(config: &ClientConfig, payer: Pubkey) -> Result<Self> {
        Ok(Self::with_program_id(config.program_id()?, payer))
    }

    /// Client for whichever account `wallet` is connected to
    pub fn for_wallet(program_id: Pubkey, wallet: &impl WalletAdapter) -> Result<Self> {
        let payer = wallet
            .pubkey()
            .ok_or_else(|| AssuranceSdkError::Wallet("wallet not connected".to_string()))?;
        Ok(Self::with_program_id(program_id, payer))
    }

    /// Profile PDA of the payer
    pub fn profile_address(&self) -> Result<Pubkey> {
        Ok(utils::derive_profile_pda(&self.program_id, &self.payer)?.0)
    }

    /// Whether the payer's profile account exists on-chain
    pub async fn profile_exists(&self, connection: &impl SolConnection) -> Result<bool> {
        let address = self.profile_address()?;
        let account = connection
            .get_account(&address)
            .await
            .map_err(|e| AssuranceSdkError::Connection(e.to_string()))?;
        Ok(account.is_some())
    }

    pub fn create_profile(&self) -> CreateProfileBuilder<'_> {
        CreateProfileBuilder::new(self)
    }

    pub fn purchase_policy(&self) -> PurchasePolicyBuilder<'_> {
        PurchasePolicyBuilder::new(self)
    }

    pub fn file_claim(&self) -> FileClaimBuilder<'_> {
        FileClaimBuilder::new(self)
    }

    pub fn process_claim(&self) -> ProcessClaimBuilder<'_> {
        ProcessClaimBuilder::new(self)
    }

    pub fn make_payment(&self) -> MakePaymentBuilder<'_> {
        MakePaymentBuilder::new(self)
    }
}

/// Unsigned transaction over `instructions` with a fresh blockhash.
pub async fn build_transaction(
    connection: &impl SolConnection,
    payer: &Pubkey,
    instructions: &[Instruction],
) -> Result<Transaction> {
    let recent_blockhash = connection
        .get_latest_blockhash()
        .await
        .map_err(|e| AssuranceSdkError::Connection(e.to_string()))?;

    let mut tx = Transaction::new_unsigned(Message::new(instructions, Some(payer)));
    tx.message.recent_blockhash = recent_blockhash;
    Ok(tx)
}

/// Builds, signs with `wallet` (which also pays fees) plus any `co_signers`,
/// and submits.
///
/// Every signer the instructions require must be the wallet or one of
/// `co_signers`; otherwise nothing is signed or sent.
pub async fn send_instructions(
    connection: &impl SolConnection,
    wallet: &impl WalletAdapter,
    instructions: &[Instruction],
    co_signers: &[&dyn Signer],
) -> Result<Signature> {
    let payer = wallet
        .pubkey()
        .ok_or_else(|| AssuranceSdkError::Wallet("wallet not connected".to_string()))?;

    let mut tx = build_transaction(connection, &payer, instructions).await?;
    ensure_signers(&tx, &payer, co_signers)?;

    if !co_signers.is_empty() {
        let blockhash = tx.message.recent_blockhash;
        tx.try_partial_sign(co_signers, blockhash)
            .map_err(|e| AssuranceSdkError::Wallet(e.to_string()))?;
    }
    wallet.sign_transaction(&mut tx).await?;

    let signature = connection
        .send_transaction(&tx)
        .await
        .map_err(|e| AssuranceSdkError::Connection(e.to_string()))?;

    log::info!(
        "submitted {} instruction(s) from {}: {}",
        instructions.len(),
        payer,
        signature
    );
    Ok(signature)
}

fn ensure_signers(tx: &Transaction, payer: &Pubkey, co_signers: &[&dyn Signer]) -> Result<()> {
    let required = usize::from(tx.message.header.num_required_signatures);
    for key in tx.message.account_keys.iter().take(required) {
        if key == payer || co_signers.iter().any(|signer| signer.pubkey() == *key) {
            continue;
        }
        return Err(AssuranceSdkError::Wallet(format!(
            "no signer supplied for {}",
            key
        )));
    }
    Ok(())
}
