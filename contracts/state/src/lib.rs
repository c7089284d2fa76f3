//! Bank Assurance State Module
//!
//! Record types, fixed-width field widths and PDA seed namespaces shared by
//! the on-chain program and the client SDK.

pub mod error;
pub mod records;
pub mod text;

pub use error::AssuranceStateError;
pub use records::{policy_end_date, Claim, ClaimStatus, Policy, UserProfile};
pub use text::{fits, padded, read_field, read_padded, write_padded, PADDING_BYTE};

/// Width of the profile name field.
pub const NAME_LEN: usize = 64;
/// Width of the profile email field.
pub const EMAIL_LEN: usize = 64;
/// Width of the product identifier field.
pub const PRODUCT_ID_LEN: usize = 32;
/// Width of the claim description field.
pub const DESCRIPTION_LEN: usize = 128;

/// Longest single seed accepted by PDA derivation.
pub const MAX_SEED_LEN: usize = 32;
/// Length of generated policy and claim identifiers.
pub const SHORT_ID_LEN: usize = 8;

/// Policy terms are counted in 30-day months.
pub const SECONDS_PER_MONTH: u64 = 30 * 24 * 60 * 60;

/// PDA seed namespaces.
pub mod seeds {
    /// `["profile", owner]`
    pub const PROFILE: &[u8] = b"profile";
    /// `["policy", policy_id]`
    pub const POLICY: &[u8] = b"policy";
    /// `["claim", claim_id]`
    pub const CLAIM: &[u8] = b"claim";
}
