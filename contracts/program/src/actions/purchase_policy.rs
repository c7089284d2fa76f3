//! PurchasePolicy instruction handler

use alloc::string::String;
use assurance_assertions::{check_signer, check_system_program, check_writable};
use assurance_state::Policy;
use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::actions::{current_timestamp, next_account};
use crate::error::AssuranceError;

pub fn process_purchase_policy(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    product_id: String,
    coverage_amount: f64,
    premium: f64,
    duration_months: u32,
) -> ProgramResult {
    let mut account_info_iter = accounts.iter();
    let payer_account = next_account(&mut account_info_iter)?;
    let policy_account = next_account(&mut account_info_iter)?;
    let system_program = next_account(&mut account_info_iter)?;

    check_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(policy_account, AssuranceError::AccountNotWritable)?;
    check_system_program(system_program, AssuranceError::InvalidSystemProgram)?;

    let now = current_timestamp()?;
    let policy = Policy::new(
        *policy_account.key(),
        *payer_account.key(),
        product_id,
        coverage_amount,
        premium,
        duration_months,
        now,
    );

    msg!(
        "Created policy for product {} (coverage {}, premium {}, ends {})",
        policy.product_id,
        policy.coverage_amount,
        policy.premium,
        policy.end_date
    );

    Ok(())
}
