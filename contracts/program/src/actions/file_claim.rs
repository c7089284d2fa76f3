//! FileClaim instruction handler

use alloc::string::String;
use assurance_assertions::{check_signer, check_system_program, check_writable};
use assurance_state::Claim;
use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::actions::{current_timestamp, next_account};
use crate::error::AssuranceError;

pub fn process_file_claim(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: f64,
    description: String,
) -> ProgramResult {
    let mut account_info_iter = accounts.iter();
    let payer_account = next_account(&mut account_info_iter)?;
    let policy_account = next_account(&mut account_info_iter)?;
    let claim_account = next_account(&mut account_info_iter)?;
    let system_program = next_account(&mut account_info_iter)?;

    check_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(policy_account, AssuranceError::AccountNotWritable)?;
    check_writable(claim_account, AssuranceError::AccountNotWritable)?;
    check_system_program(system_program, AssuranceError::InvalidSystemProgram)?;

    let now = current_timestamp()?;
    let claim = Claim::file(
        *claim_account.key(),
        *policy_account.key(),
        amount,
        description,
        now,
    );

    msg!(
        "Filed claim for amount {} ({})",
        claim.amount,
        claim.status.as_str()
    );

    Ok(())
}
