//! Bank Assurance Instruction Definitions
//!
//! Every instruction is a flat buffer: one discriminator byte followed by a
//! fixed-width payload. Text is space-padded or cut to its field width,
//! amounts are `f64` little-endian and durations `u32` little-endian. There
//! is no length prefix, version byte or checksum.

use alloc::string::String;
use alloc::vec::Vec;

use assurance_state::{
    read_field, write_padded, DESCRIPTION_LEN, EMAIL_LEN, NAME_LEN, PRODUCT_ID_LEN,
};
use pinocchio::program_error::ProgramError;

/// Instruction discriminators (byte 0 of every payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InstructionDiscriminator {
    CreateProfile = 0,
    PurchasePolicy = 1,
    FileClaim = 2,
    ProcessClaim = 3,
    MakePayment = 4,
}

impl InstructionDiscriminator {
    /// Bytes following the discriminator.
    pub const fn payload_len(self) -> usize {
        match self {
            InstructionDiscriminator::CreateProfile => NAME_LEN + EMAIL_LEN,
            InstructionDiscriminator::PurchasePolicy => PRODUCT_ID_LEN + 8 + 8 + 4,
            InstructionDiscriminator::FileClaim => 8 + DESCRIPTION_LEN,
            InstructionDiscriminator::ProcessClaim => 1,
            InstructionDiscriminator::MakePayment => 8,
        }
    }

    /// Total encoded length including the discriminator.
    pub const fn packed_len(self) -> usize {
        1 + self.payload_len()
    }
}

impl TryFrom<u8> for InstructionDiscriminator {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionDiscriminator::CreateProfile),
            1 => Ok(InstructionDiscriminator::PurchasePolicy),
            2 => Ok(InstructionDiscriminator::FileClaim),
            3 => Ok(InstructionDiscriminator::ProcessClaim),
            4 => Ok(InstructionDiscriminator::MakePayment),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Absolute byte offsets inside a packed instruction.
pub mod layout {
    use assurance_state::{NAME_LEN, PRODUCT_ID_LEN};

    pub const DISCRIMINATOR: usize = 0;

    pub const PROFILE_NAME: usize = 1;
    pub const PROFILE_EMAIL: usize = PROFILE_NAME + NAME_LEN;

    pub const POLICY_PRODUCT_ID: usize = 1;
    pub const POLICY_COVERAGE: usize = POLICY_PRODUCT_ID + PRODUCT_ID_LEN;
    pub const POLICY_PREMIUM: usize = POLICY_COVERAGE + 8;
    pub const POLICY_DURATION: usize = POLICY_PREMIUM + 8;

    pub const CLAIM_AMOUNT: usize = 1;
    pub const CLAIM_DESCRIPTION: usize = CLAIM_AMOUNT + 8;

    pub const DECISION_APPROVED: usize = 1;

    pub const PAYMENT_AMOUNT: usize = 1;
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssuranceInstruction {
    /// Register a policy holder profile
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Profile PDA: ["profile", payer]
    /// 2. `[]` System program
    CreateProfile { name: String, email: String },

    /// Buy coverage for a product
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Policy PDA: ["policy", policy_id]
    /// 2. `[]` System program
    PurchasePolicy {
        product_id: String,
        coverage_amount: f64,
        premium: f64,
        duration_months: u32,
    },

    /// File a claim against a policy
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Policy PDA: ["policy", policy_id]
    /// 2. `[writable]` Claim PDA: ["claim", claim_id]
    /// 3. `[]` System program
    FileClaim { amount: f64, description: String },

    /// Approve or reject a filed claim
    ///
    /// Accounts:
    /// 0. `[signer]` Claim processing authority
    /// 1. `[writable]` Claim PDA
    ProcessClaim { approved: bool },

    /// Pay a premium installment
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Policy PDA
    /// 2. `[]` System program
    MakePayment { amount: f64 },
}

impl AssuranceInstruction {
    pub fn discriminator(&self) -> InstructionDiscriminator {
        match self {
            AssuranceInstruction::CreateProfile { .. } => InstructionDiscriminator::CreateProfile,
            AssuranceInstruction::PurchasePolicy { .. } => InstructionDiscriminator::PurchasePolicy,
            AssuranceInstruction::FileClaim { .. } => InstructionDiscriminator::FileClaim,
            AssuranceInstruction::ProcessClaim { .. } => InstructionDiscriminator::ProcessClaim,
            AssuranceInstruction::MakePayment { .. } => InstructionDiscriminator::MakePayment,
        }
    }

    /// Serializes into the fixed-width wire layout.
    ///
    /// Text longer than its field is cut silently; callers that care check
    /// with [`assurance_state::fits`] first.
    pub fn pack(&self) -> Vec<u8> {
        let discriminator = self.discriminator();
        let mut data = alloc::vec![0u8; discriminator.packed_len()];
        data[layout::DISCRIMINATOR] = discriminator as u8;

        match self {
            AssuranceInstruction::CreateProfile { name, email } => {
                write_padded(
                    &mut data[layout::PROFILE_NAME..layout::PROFILE_NAME + NAME_LEN],
                    name,
                );
                write_padded(
                    &mut data[layout::PROFILE_EMAIL..layout::PROFILE_EMAIL + EMAIL_LEN],
                    email,
                );
            },
            AssuranceInstruction::PurchasePolicy {
                product_id,
                coverage_amount,
                premium,
                duration_months,
            } => {
                write_padded(
                    &mut data[layout::POLICY_PRODUCT_ID..layout::POLICY_COVERAGE],
                    product_id,
                );
                put(&mut data, layout::POLICY_COVERAGE, &coverage_amount.to_le_bytes());
                put(&mut data, layout::POLICY_PREMIUM, &premium.to_le_bytes());
                put(&mut data, layout::POLICY_DURATION, &duration_months.to_le_bytes());
            },
            AssuranceInstruction::FileClaim {
                amount,
                description,
            } => {
                put(&mut data, layout::CLAIM_AMOUNT, &amount.to_le_bytes());
                write_padded(
                    &mut data
                        [layout::CLAIM_DESCRIPTION..layout::CLAIM_DESCRIPTION + DESCRIPTION_LEN],
                    description,
                );
            },
            AssuranceInstruction::ProcessClaim { approved } => {
                data[layout::DECISION_APPROVED] = u8::from(*approved);
            },
            AssuranceInstruction::MakePayment { amount } => {
                put(&mut data, layout::PAYMENT_AMOUNT, &amount.to_le_bytes());
            },
        }

        data
    }

    /// Parses a packed instruction.
    ///
    /// Bytes past the fixed payload are ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&tag, _) = input
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;
        let discriminator = InstructionDiscriminator::try_from(tag)?;
        if input.len() < discriminator.packed_len() {
            return Err(ProgramError::InvalidInstructionData);
        }

        let instruction = match discriminator {
            InstructionDiscriminator::CreateProfile => AssuranceInstruction::CreateProfile {
                name: read_field(input, layout::PROFILE_NAME, NAME_LEN)?,
                email: read_field(input, layout::PROFILE_EMAIL, EMAIL_LEN)?,
            },
            InstructionDiscriminator::PurchasePolicy => AssuranceInstruction::PurchasePolicy {
                product_id: read_field(input, layout::POLICY_PRODUCT_ID, PRODUCT_ID_LEN)?,
                coverage_amount: f64::from_le_bytes(take(input, layout::POLICY_COVERAGE)?),
                premium: f64::from_le_bytes(take(input, layout::POLICY_PREMIUM)?),
                duration_months: u32::from_le_bytes(take(input, layout::POLICY_DURATION)?),
            },
            InstructionDiscriminator::FileClaim => AssuranceInstruction::FileClaim {
                amount: f64::from_le_bytes(take(input, layout::CLAIM_AMOUNT)?),
                description: read_field(input, layout::CLAIM_DESCRIPTION, DESCRIPTION_LEN)?,
            },
            InstructionDiscriminator::ProcessClaim => AssuranceInstruction::ProcessClaim {
                approved: input[layout::DECISION_APPROVED] > 0,
            },
            InstructionDiscriminator::MakePayment => AssuranceInstruction::MakePayment {
                amount: f64::from_le_bytes(take(input, layout::PAYMENT_AMOUNT)?),
            },
        };

        Ok(instruction)
    }
}

#[inline]
fn put(data: &mut [u8], offset: usize, bytes: &[u8]) {
    data[offset..offset + bytes.len()].copy_from_slice(bytes);
}

#[inline]
fn take<const N: usize>(input: &[u8], offset: usize) -> Result<[u8; N], ProgramError> {
    input
        .get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(ProgramError::InvalidInstructionData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn packed_lengths_match_layout() {
        assert_eq!(InstructionDiscriminator::CreateProfile.packed_len(), 129);
        assert_eq!(InstructionDiscriminator::PurchasePolicy.packed_len(), 53);
        assert_eq!(InstructionDiscriminator::FileClaim.packed_len(), 137);
        assert_eq!(InstructionDiscriminator::ProcessClaim.packed_len(), 2);
        assert_eq!(InstructionDiscriminator::MakePayment.packed_len(), 9);
    }

    #[test]
    fn create_profile_layout() {
        let data = AssuranceInstruction::CreateProfile {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        }
        .pack();

        assert_eq!(data.len(), 129);
        assert_eq!(data[0], 0);
        assert_eq!(&data[1..9], b"John Doe");
        assert!(data[9..65].iter().all(|b| *b == b' '));
        assert_eq!(&data[65..85], b"john.doe@example.com");
        assert!(data[85..129].iter().all(|b| *b == b' '));
    }

    #[test]
    fn purchase_policy_layout() {
        let data = AssuranceInstruction::PurchasePolicy {
            product_id: "auto-premium".to_string(),
            coverage_amount: 25_000.0,
            premium: 1234.56,
            duration_months: 12,
        }
        .pack();

        assert_eq!(data.len(), 53);
        assert_eq!(data[0], 1);
        assert_eq!(&data[1..13], b"auto-premium");
        assert_eq!(f64::from_le_bytes(data[33..41].try_into().unwrap()), 25_000.0);
        assert_eq!(
            f64::from_le_bytes(data[41..49].try_into().unwrap()).to_bits(),
            1234.56f64.to_bits()
        );
        assert_eq!(u32::from_le_bytes(data[49..53].try_into().unwrap()), 12);
    }

    #[test]
    fn oversized_description_is_cut() {
        let description = "x".repeat(200);
        let data = AssuranceInstruction::FileClaim {
            amount: 10.0,
            description: description.clone(),
        }
        .pack();

        assert_eq!(data.len(), 137);
        assert_eq!(&data[9..137], &description.as_bytes()[..128]);
    }

    #[test]
    fn make_payment_layout() {
        let data = AssuranceInstruction::MakePayment { amount: 250.5 }.pack();
        assert_eq!(data.len(), 9);
        assert_eq!(data[0], 4);
        assert_eq!(f64::from_le_bytes(data[1..9].try_into().unwrap()), 250.5);
    }

    #[test]
    fn process_claim_decision_byte() {
        let approve = AssuranceInstruction::ProcessClaim { approved: true }.pack();
        assert_eq!(approve, [3, 1]);
        assert_eq!(
            AssuranceInstruction::unpack(&[3, 7]).unwrap(),
            AssuranceInstruction::ProcessClaim { approved: true }
        );
        assert_eq!(
            AssuranceInstruction::unpack(&[3, 0]).unwrap(),
            AssuranceInstruction::ProcessClaim { approved: false }
        );
    }

    #[test]
    fn unpack_recovers_fields() {
        let original = AssuranceInstruction::PurchasePolicy {
            product_id: "home-basic".to_string(),
            coverage_amount: 300_000.25,
            premium: 89.99,
            duration_months: 24,
        };
        assert_eq!(AssuranceInstruction::unpack(&original.pack()).unwrap(), original);

        let claim = AssuranceInstruction::FileClaim {
            amount: 1234.56,
            description: "Broken window after storm".to_string(),
        };
        assert_eq!(AssuranceInstruction::unpack(&claim.pack()).unwrap(), claim);
    }

    #[test]
    fn unpack_ignores_trailing_bytes() {
        let mut data = AssuranceInstruction::MakePayment { amount: 5.0 }.pack();
        data.extend_from_slice(&[9, 9, 9]);
        assert_eq!(
            AssuranceInstruction::unpack(&data).unwrap(),
            AssuranceInstruction::MakePayment { amount: 5.0 }
        );
    }

    #[test]
    fn unpack_rejects_malformed_input() {
        assert_eq!(
            AssuranceInstruction::unpack(&[]),
            Err(ProgramError::InvalidInstructionData)
        );
        assert_eq!(
            AssuranceInstruction::unpack(&[5, 0, 0]),
            Err(ProgramError::InvalidInstructionData)
        );
        assert_eq!(
            AssuranceInstruction::unpack(&[4, 0, 0, 0]),
            Err(ProgramError::InvalidInstructionData)
        );
        assert_eq!(
            AssuranceInstruction::unpack(&[0; 100]),
            Err(ProgramError::InvalidInstructionData)
        );
    }
}
