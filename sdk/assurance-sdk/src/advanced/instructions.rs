//! Raw instruction constructors.
//!
//! Each function derives the target PDA, packs the fixed-width payload and
//! returns a ready `Instruction`. Text fields longer than their width are
//! cut without error; use the builders in `basic::actions` for strict
//! length checks. The only failure is address derivation.

use assurance_program::instruction::AssuranceInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::error::Result;
use crate::utils::{derive_claim_pda, derive_policy_pda, derive_profile_pda};

pub fn create_profile(
    program_id: &Pubkey,
    payer: &Pubkey,
    name: &str,
    email: &str,
) -> Result<Instruction> {
    let (profile_pda, _) = derive_profile_pda(program_id, payer)?;

    let instruction = AssuranceInstruction::CreateProfile {
        name: name.to_string(),
        email: email.to_string(),
    };

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(profile_pda, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    })
}

pub fn purchase_policy(
    program_id: &Pubkey,
    payer: &Pubkey,
    policy_id: &str,
    product_id: &str,
    coverage_amount: f64,
    premium: f64,
    duration_months: u32,
) -> Result<Instruction> {
    let (policy_pda, _) = derive_policy_pda(program_id, policy_id)?;

    let instruction = AssuranceInstruction::PurchasePolicy {
        product_id: product_id.to_string(),
        coverage_amount,
        premium,
        duration_months,
    };

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(policy_pda, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    })
}

pub fn file_claim(
    program_id: &Pubkey,
    payer: &Pubkey,
    policy_id: &str,
    claim_id: &str,
    amount: f64,
    description: &str,
) -> Result<Instruction> {
    let (claim_pda, _) = derive_claim_pda(program_id, claim_id)?;
    let (policy_pda, _) = derive_policy_pda(program_id, policy_id)?;

    let instruction = AssuranceInstruction::FileClaim {
        amount,
        description: description.to_string(),
    };

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(policy_pda, false),
        AccountMeta::new(claim_pda, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    })
}

/// Approve or reject a claim. `authority` signs but pays nothing, so it is
/// not marked writable and no system program is passed.
pub fn process_claim(
    program_id: &Pubkey,
    authority: &Pubkey,
    claim_id: &str,
    approved: bool,
) -> Result<Instruction> {
    let (claim_pda, _) = derive_claim_pda(program_id, claim_id)?;

    let instruction = AssuranceInstruction::ProcessClaim { approved };

    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(claim_pda, false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    })
}

pub fn make_payment(
    program_id: &Pubkey,
    payer: &Pubkey,
    policy_id: &str,
    amount: f64,
) -> Result<Instruction> {
    let (policy_pda, _) = derive_policy_pda(program_id, policy_id)?;

    let instruction = AssuranceInstruction::MakePayment { amount };

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(policy_pda, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    })
}
