//! Fluent builders for each program instruction.
//!
//! Builders cut oversize text the same way the raw encoders do, logging a
//! warning. Call `strict(true)` to get `FieldTooLong` instead.

use crate::advanced::instructions;
use crate::basic::client::{self, AssuranceClient};
use crate::core::connection::SolConnection;
use crate::core::signer::WalletAdapter;
use crate::error::{AssuranceSdkError, Result};
use crate::types::{ClaimDecision, PreparedInstruction};
use crate::utils;
use assurance_state::{fits, DESCRIPTION_LEN, EMAIL_LEN, NAME_LEN, PRODUCT_ID_LEN};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::transaction::Transaction;

fn check_text(field: &'static str, text: &str, max: usize, strict: bool) -> Result<()> {
    if fits(text, max) {
        return Ok(());
    }
    if strict {
        return Err(AssuranceSdkError::FieldTooLong {
            field,
            len: text.len(),
            max,
        });
    }
    log::warn!(
        "{} is {} bytes, truncating to the {}-byte field",
        field,
        text.len(),
        max
    );
    Ok(())
}

fn required<T: Clone>(value: &Option<T>, field: &'static str) -> Result<T> {
    value.clone().ok_or(AssuranceSdkError::MissingField(field))
}

async fn send_prepared(
    client: &AssuranceClient,
    connection: &impl SolConnection,
    wallet: &impl WalletAdapter,
    prepared: PreparedInstruction,
    co_signers: &[&dyn Signer],
) -> Result<(Signature, PreparedInstruction)> {
    let wallet_key = wallet
        .pubkey()
        .ok_or_else(|| AssuranceSdkError::Wallet("wallet not connected".to_string()))?;
    if wallet_key != client.payer {
        return Err(AssuranceSdkError::Wallet(format!(
            "wallet {} is not the client payer {}",
            wallet_key, client.payer
        )));
    }

    let signature = client::send_instructions(
        connection,
        wallet,
        &[prepared.instruction.clone()],
        co_signers,
    )
    .await?;
    Ok((signature, prepared))
}

pub struct CreateProfileBuilder<'a> {
    client: &'a AssuranceClient,
    name: Option<String>,
    email: Option<String>,
    strict: bool,
}

impl<'a> CreateProfileBuilder<'a> {
    pub fn new(client: &'a AssuranceClient) -> Self {
        Self {
            client,
            name: None,
            email: None,
            strict: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build_instruction(&self) -> Result<PreparedInstruction> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        check_text("name", &name, NAME_LEN, self.strict)?;
        check_text("email", &email, EMAIL_LEN, self.strict)?;

        let instruction = instructions::create_profile(
            &self.client.program_id,
            &self.client.payer,
            &name,
            &email,
        )?;
        let address = instruction.accounts[1].pubkey;
        log::debug!("create_profile: profile PDA {}", address);

        Ok(PreparedInstruction {
            instruction,
            address,
            record_id: None,
        })
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let prepared = self.build_instruction()?;
        client::build_transaction(connection, &self.client.payer, &[prepared.instruction]).await
    }

    pub async fn send(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
    ) -> Result<(Signature, PreparedInstruction)> {
        self.send_with_signers(connection, wallet, &[]).await
    }

    /// Like `send`, with extra signers for accounts other than the payer.
    pub async fn send_with_signers(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
        co_signers: &[&dyn Signer],
    ) -> Result<(Signature, PreparedInstruction)> {
        let prepared = self.build_instruction()?;
        send_prepared(self.client, connection, wallet, prepared, co_signers).await
    }
}

pub struct PurchasePolicyBuilder<'a> {
    client: &'a AssuranceClient,
    policy_id: Option<String>,
    product_id: Option<String>,
    coverage_amount: Option<f64>,
    premium: Option<f64>,
    duration_months: Option<u32>,
    strict: bool,
}

impl<'a> PurchasePolicyBuilder<'a> {
    pub fn new(client: &'a AssuranceClient) -> Self {
        Self {
            client,
            policy_id: None,
            product_id: None,
            coverage_amount: None,
            premium: None,
            duration_months: None,
            strict: false,
        }
    }

    /// Seed for the policy PDA. A random short id is generated per build when
    /// unset; read it back from `PreparedInstruction::record_id`.
    pub fn with_policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    pub fn with_product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn with_coverage(mut self, coverage_amount: f64) -> Self {
        self.coverage_amount = Some(coverage_amount);
        self
    }

    pub fn with_premium(mut self, premium: f64) -> Self {
        self.premium = Some(premium);
        self
    }

    pub fn with_duration_months(mut self, duration_months: u32) -> Self {
        self.duration_months = Some(duration_months);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build_instruction(&self) -> Result<PreparedInstruction> {
        let product_id = required(&self.product_id, "product_id")?;
        let coverage_amount = required(&self.coverage_amount, "coverage_amount")?;
        let premium = required(&self.premium, "premium")?;
        let duration_months = required(&self.duration_months, "duration_months")?;
        check_text("product_id", &product_id, PRODUCT_ID_LEN, self.strict)?;

        let policy_id = self
            .policy_id
            .clone()
            .unwrap_or_else(utils::generate_record_id);
        let policy_id = utils::policy_seed(&policy_id).to_string();

        let instruction = instructions::purchase_policy(
            &self.client.program_id,
            &self.client.payer,
            &policy_id,
            &product_id,
            coverage_amount,
            premium,
            duration_months,
        )?;
        let address = instruction.accounts[1].pubkey;
        log::debug!("purchase_policy: policy {} at {}", policy_id, address);

        Ok(PreparedInstruction {
            instruction,
            address,
            record_id: Some(policy_id),
        })
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let prepared = self.build_instruction()?;
        client::build_transaction(connection, &self.client.payer, &[prepared.instruction]).await
    }

    pub async fn send(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
    ) -> Result<(Signature, PreparedInstruction)> {
        self.send_with_signers(connection, wallet, &[]).await
    }

    /// Like `send`, with extra signers for accounts other than the payer.
    pub async fn send_with_signers(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
        co_signers: &[&dyn Signer],
    ) -> Result<(Signature, PreparedInstruction)> {
        let prepared = self.build_instruction()?;
        send_prepared(self.client, connection, wallet, prepared, co_signers).await
    }
}

pub struct FileClaimBuilder<'a> {
    client: &'a AssuranceClient,
    policy_id: Option<String>,
    claim_id: Option<String>,
    amount: Option<f64>,
    description: Option<String>,
    strict: bool,
}

impl<'a> FileClaimBuilder<'a> {
    pub fn new(client: &'a AssuranceClient) -> Self {
        Self {
            client,
            policy_id: None,
            claim_id: None,
            amount: None,
            description: None,
            strict: false,
        }
    }

    pub fn with_policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    /// Seed for the claim PDA, generated per build when unset.
    pub fn with_claim_id(mut self, claim_id: impl Into<String>) -> Self {
        self.claim_id = Some(claim_id.into());
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build_instruction(&self) -> Result<PreparedInstruction> {
        let policy_id = required(&self.policy_id, "policy_id")?;
        let amount = required(&self.amount, "amount")?;
        let description = required(&self.description, "description")?;
        check_text("description", &description, DESCRIPTION_LEN, self.strict)?;

        let claim_id = self
            .claim_id
            .clone()
            .unwrap_or_else(utils::generate_record_id);

        let instruction = instructions::file_claim(
            &self.client.program_id,
            &self.client.payer,
            &policy_id,
            &claim_id,
            amount,
            &description,
        )?;
        let address = instruction.accounts[2].pubkey;
        log::debug!("file_claim: claim {} at {}", claim_id, address);

        Ok(PreparedInstruction {
            instruction,
            address,
            record_id: Some(claim_id),
        })
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let prepared = self.build_instruction()?;
        client::build_transaction(connection, &self.client.payer, &[prepared.instruction]).await
    }

    pub async fn send(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
    ) -> Result<(Signature, PreparedInstruction)> {
        self.send_with_signers(connection, wallet, &[]).await
    }

    /// Like `send`, with extra signers for accounts other than the payer.
    pub async fn send_with_signers(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
        co_signers: &[&dyn Signer],
    ) -> Result<(Signature, PreparedInstruction)> {
        let prepared = self.build_instruction()?;
        send_prepared(self.client, connection, wallet, prepared, co_signers).await
    }
}

pub struct ProcessClaimBuilder<'a> {
    client: &'a AssuranceClient,
    authority: Option<Pubkey>,
    claim_id: Option<String>,
    decision: Option<ClaimDecision>,
}

impl<'a> ProcessClaimBuilder<'a> {
    pub fn new(client: &'a AssuranceClient) -> Self {
        Self {
            client,
            authority: None,
            claim_id: None,
            decision: None,
        }
    }

    /// Signing authority; defaults to the client's payer.
    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_claim_id(mut self, claim_id: impl Into<String>) -> Self {
        self.claim_id = Some(claim_id.into());
        self
    }

    pub fn with_decision(mut self, decision: ClaimDecision) -> Self {
        self.decision = Some(decision);
        self
    }

    pub fn approve(self) -> Self {
        self.with_decision(ClaimDecision::Approve)
    }

    pub fn reject(self) -> Self {
        self.with_decision(ClaimDecision::Reject)
    }

    pub fn build_instruction(&self) -> Result<PreparedInstruction> {
        let claim_id = required(&self.claim_id, "claim_id")?;
        let decision = required(&self.decision, "decision")?;
        let authority = self.authority.unwrap_or(self.client.payer);

        let instruction = instructions::process_claim(
            &self.client.program_id,
            &authority,
            &claim_id,
            decision.is_approved(),
        )?;
        let address = instruction.accounts[1].pubkey;
        log::debug!("process_claim: {:?} claim {} at {}", decision, claim_id, address);

        Ok(PreparedInstruction {
            instruction,
            address,
            record_id: Some(claim_id),
        })
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let prepared = self.build_instruction()?;
        client::build_transaction(connection, &self.client.payer, &[prepared.instruction]).await
    }

    pub async fn send(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
    ) -> Result<(Signature, PreparedInstruction)> {
        self.send_with_signers(connection, wallet, &[]).await
    }

    /// Like `send`, with extra signers for accounts other than the payer.
    pub async fn send_with_signers(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
        co_signers: &[&dyn Signer],
    ) -> Result<(Signature, PreparedInstruction)> {
        let prepared = self.build_instruction()?;
        send_prepared(self.client, connection, wallet, prepared, co_signers).await
    }
}

pub struct MakePaymentBuilder<'a> {
    client: &'a AssuranceClient,
    policy_id: Option<String>,
    amount: Option<f64>,
}

impl<'a> MakePaymentBuilder<'a> {
    pub fn new(client: &'a AssuranceClient) -> Self {
        Self {
            client,
            policy_id: None,
            amount: None,
        }
    }

    pub fn with_policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn build_instruction(&self) -> Result<PreparedInstruction> {
        let policy_id = required(&self.policy_id, "policy_id")?;
        let amount = required(&self.amount, "amount")?;

        let instruction = instructions::make_payment(
            &self.client.program_id,
            &self.client.payer,
            &policy_id,
            amount,
        )?;
        let address = instruction.accounts[1].pubkey;
        let policy_id = utils::policy_seed(&policy_id).to_string();
        log::debug!("make_payment: policy {} at {}", policy_id, address);

        Ok(PreparedInstruction {
            instruction,
            address,
            record_id: Some(policy_id),
        })
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let prepared = self.build_instruction()?;
        client::build_transaction(connection, &self.client.payer, &[prepared.instruction]).await
    }

    pub async fn send(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
    ) -> Result<(Signature, PreparedInstruction)> {
        self.send_with_signers(connection, wallet, &[]).await
    }

    /// Like `send`, with extra signers for accounts other than the payer.
    pub async fn send_with_signers(
        &self,
        connection: &impl SolConnection,
        wallet: &impl WalletAdapter,
        co_signers: &[&dyn Signer],
    ) -> Result<(Signature, PreparedInstruction)> {
        let prepared = self.build_instruction()?;
        send_prepared(self.client, connection, wallet, prepared, co_signers).await
    }
}
