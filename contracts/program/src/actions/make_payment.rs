//! MakePayment instruction handler

use assurance_assertions::{check_signer, check_system_program, check_writable};
use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::actions::next_account;
use crate::error::AssuranceError;

pub fn process_make_payment(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: f64,
) -> ProgramResult {
    let mut account_info_iter = accounts.iter();
    let payer_account = next_account(&mut account_info_iter)?;
    let policy_account = next_account(&mut account_info_iter)?;
    let system_program = next_account(&mut account_info_iter)?;

    check_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(policy_account, AssuranceError::AccountNotWritable)?;
    check_system_program(system_program, AssuranceError::InvalidSystemProgram)?;

    msg!(
        "Payment of {} processed for policy {:?}",
        amount,
        policy_account.key()
    );

    Ok(())
}
