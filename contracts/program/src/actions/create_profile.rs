//! CreateProfile instruction handler

use alloc::string::String;
use assurance_assertions::{check_any_pda, check_signer, check_system_program, check_writable};
use assurance_state::{seeds, UserProfile};
use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::actions::next_account;
use crate::error::AssuranceError;

pub fn process_create_profile(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    name: String,
    email: String,
) -> ProgramResult {
    let mut account_info_iter = accounts.iter();
    let payer_account = next_account(&mut account_info_iter)?;
    let profile_account = next_account(&mut account_info_iter)?;
    let system_program = next_account(&mut account_info_iter)?;

    check_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(profile_account, AssuranceError::AccountNotWritable)?;
    check_system_program(system_program, AssuranceError::InvalidSystemProgram)?;

    // Profiles are keyed by owner, so the address is checkable on-chain.
    check_any_pda(
        &[seeds::PROFILE, payer_account.key().as_ref()],
        profile_account.key(),
        program_id,
        AssuranceError::InvalidProfileAddress,
    )?;

    let profile = UserProfile::new(name, email);

    msg!("Created profile for {}", profile.name);

    Ok(())
}
