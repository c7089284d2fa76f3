pub mod create_profile;
pub mod file_claim;
pub mod make_payment;
pub mod process_claim;
pub mod purchase_policy;

pub use create_profile::*;
pub use file_claim::*;
pub use make_payment::*;
pub use process_claim::*;
pub use purchase_policy::*;

use core::slice::Iter;
use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
};

/// Pulls the next account reference or fails with `NotEnoughAccountKeys`.
#[inline]
pub fn next_account<'a>(
    account_info_iter: &mut Iter<'a, AccountInfo>,
) -> Result<&'a AccountInfo, ProgramError> {
    account_info_iter
        .next()
        .ok_or(ProgramError::NotEnoughAccountKeys)
}

/// Cluster unix time, clamped at zero.
pub fn current_timestamp() -> Result<u64, ProgramError> {
    let clock = Clock::get()?;
    Ok(u64::try_from(clock.unix_timestamp).unwrap_or(0))
}
