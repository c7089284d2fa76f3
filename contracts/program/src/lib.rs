//! Bank Assurance Program - Main Entry Point
//!
//! Profile registration, policy purchase, claim filing, claim adjudication
//! and premium payment over fixed-width instruction payloads.

extern crate alloc;

pub mod actions;
pub mod error;
pub mod instruction;
pub mod processor;

use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};
use pinocchio_pubkey::declare_id;

declare_id!("BankAssurance111111111111111111111111111111");

#[cfg(not(feature = "no-entrypoint"))]
pinocchio::entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    processor::process_instruction(program_id, accounts, instruction_data)
}
