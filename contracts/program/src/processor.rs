//! Instruction Processor
//!
//! Thin dispatcher that routes instructions to individual handlers.

use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::actions;
use crate::instruction::AssuranceInstruction;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = AssuranceInstruction::unpack(instruction_data).map_err(|e| {
        msg!(
            "Unsupported instruction (discriminator {:?}, {} bytes)",
            instruction_data.first(),
            instruction_data.len()
        );
        e
    })?;
    match instruction {
        AssuranceInstruction::CreateProfile { name, email } => {
            actions::process_create_profile(program_id, accounts, name, email)
        },

        AssuranceInstruction::PurchasePolicy {
            product_id,
            coverage_amount,
            premium,
            duration_months,
        } => actions::process_purchase_policy(
            program_id,
            accounts,
            product_id,
            coverage_amount,
            premium,
            duration_months,
        ),

        AssuranceInstruction::FileClaim {
            amount,
            description,
        } => actions::process_file_claim(program_id, accounts, amount, description),

        AssuranceInstruction::ProcessClaim { approved } => {
            actions::process_process_claim(program_id, accounts, approved)
        },

        AssuranceInstruction::MakePayment { amount } => {
            actions::process_make_payment(program_id, accounts, amount)
        },
    }
}
