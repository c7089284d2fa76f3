use pinocchio::program_error::ProgramError;

/// Error types related to record construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssuranceStateError {
    /// A fixed-width region is shorter than its declared width
    FieldTooShort = 1000,
}

impl From<AssuranceStateError> for ProgramError {
    fn from(e: AssuranceStateError) -> Self {
        ProgramError::Custom(e as u32 + 2000)
    }
}
