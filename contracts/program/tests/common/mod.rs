#![allow(dead_code)]

use assurance_program::instruction::AssuranceInstruction;
use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_program,
    transaction::{Transaction, TransactionError},
};

pub struct TestContext {
    pub svm: LiteSVM,
    pub payer: Keypair,
    pub program_id: Pubkey,
}

pub fn setup_test() -> TestContext {
    let payer = Keypair::new();
    let mut svm = LiteSVM::new();

    svm.airdrop(&payer.pubkey(), 10_000_000_000)
        .expect("Failed to airdrop");

    let program_id = load_program(&mut svm);

    TestContext {
        svm,
        payer,
        program_id,
    }
}

fn load_program(svm: &mut LiteSVM) -> Pubkey {
    let program_id = Pubkey::new_unique();

    // Built by `cargo build-sbf` into the workspace target directory
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/deploy/assurance_program.so"
    );
    svm.add_program_from_file(program_id, path)
        .expect("Failed to load program");

    program_id
}

impl TestContext {
    pub fn profile_pda(&self, owner: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[b"profile", owner.as_ref()], &self.program_id).0
    }

    pub fn policy_pda(&self, policy_id: &str) -> Pubkey {
        Pubkey::find_program_address(&[b"policy", policy_id.as_bytes()], &self.program_id).0
    }

    pub fn claim_pda(&self, claim_id: &str) -> Pubkey {
        Pubkey::find_program_address(&[b"claim", claim_id.as_bytes()], &self.program_id).0
    }

    /// Packs `instruction` for the loaded program with `accounts` in order.
    pub fn instruction(
        &self,
        instruction: &AssuranceInstruction,
        accounts: Vec<AccountMeta>,
    ) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts,
            data: instruction.pack(),
        }
    }

    /// Signs with the payer plus `extra_signers` and submits.
    pub fn send(&mut self, ix: Instruction, extra_signers: &[&Keypair]) -> TransactionResult {
        let mut signers: Vec<&Keypair> = vec![&self.payer];
        signers.extend_from_slice(extra_signers);
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.payer.pubkey()),
            &signers,
            self.svm.latest_blockhash(),
        );
        self.svm.send_transaction(tx)
    }
}

pub fn system_program_meta() -> AccountMeta {
    AccountMeta::new_readonly(system_program::id(), false)
}

/// Asserts the transaction failed in its first instruction with `expected`.
pub fn assert_instruction_error(result: TransactionResult, expected: InstructionError) {
    match result {
        Ok(meta) => panic!("transaction succeeded, logs: {:?}", meta.logs),
        Err(failed) => assert_eq!(
            failed.err,
            TransactionError::InstructionError(0, expected),
            "logs: {:?}",
            failed.meta.logs
        ),
    }
}

/// Asserts success and that some program log line contains `needle`.
pub fn assert_logged(result: TransactionResult, needle: &str) {
    match result {
        Ok(meta) => assert!(
            meta.logs.iter().any(|line| line.contains(needle)),
            "missing {:?} in logs: {:?}",
            needle,
            meta.logs
        ),
        Err(failed) => panic!(
            "transaction failed: {:?}, logs: {:?}",
            failed.err, failed.meta.logs
        ),
    }
}
