//! ProcessClaim instruction handler

use assurance_assertions::{check_signer, check_writable};
use assurance_state::ClaimStatus;
use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::actions::next_account;
use crate::error::AssuranceError;

pub fn process_process_claim(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    approved: bool,
) -> ProgramResult {
    let mut account_info_iter = accounts.iter();
    let authority_account = next_account(&mut account_info_iter)?;
    let claim_account = next_account(&mut account_info_iter)?;

    check_signer(authority_account, ProgramError::MissingRequiredSignature)?;
    check_writable(claim_account, AssuranceError::AccountNotWritable)?;

    let status = ClaimStatus::from_decision(approved);

    msg!("Claim {:?} {}", claim_account.key(), status.as_str());

    Ok(())
}
