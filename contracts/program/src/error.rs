//! Bank Assurance Error Types

use pinocchio::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssuranceError {
    #[error("Account must be writable")]
    AccountNotWritable,

    #[error("Expected the system program")]
    InvalidSystemProgram,

    #[error("Profile account does not match its PDA")]
    InvalidProfileAddress,
}

impl From<AssuranceError> for ProgramError {
    fn from(e: AssuranceError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
