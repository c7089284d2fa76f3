use assurance_state::{seeds, MAX_SEED_LEN, SHORT_ID_LEN};
use solana_sdk::pubkey::{Pubkey, PubkeyError, MAX_SEEDS};
use solana_sdk::signature::{Keypair, Signer};

use crate::error::{AssuranceSdkError, Result};

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

/// `find_program_address` with seed limits checked up front, so bad seeds
/// come back as an error instead of a panic.
pub fn find_pda(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    if seeds.len() >= MAX_SEEDS {
        return Err(PubkeyError::MaxSeedLengthExceeded.into());
    }
    if seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(PubkeyError::MaxSeedLengthExceeded.into());
    }
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(AssuranceSdkError::Derivation(PubkeyError::InvalidSeeds))
}

/// Derive the profile PDA owned by `owner`
pub fn derive_profile_pda(program_id: &Pubkey, owner: &Pubkey) -> Result<(Pubkey, u8)> {
    find_pda(&[seeds::PROFILE, owner.as_ref()], program_id)
}

/// Derive the policy PDA; `policy_id` is cut to the seed limit first
pub fn derive_policy_pda(program_id: &Pubkey, policy_id: &str) -> Result<(Pubkey, u8)> {
    find_pda(
        &[seeds::POLICY, policy_seed(policy_id).as_bytes()],
        program_id,
    )
}

/// Derive the claim PDA; `claim_id` is used as-is
pub fn derive_claim_pda(program_id: &Pubkey, claim_id: &str) -> Result<(Pubkey, u8)> {
    find_pda(&[seeds::CLAIM, claim_id.as_bytes()], program_id)
}

/// Longest prefix of `policy_id` that fits in one seed, on a char boundary.
pub fn policy_seed(policy_id: &str) -> &str {
    if policy_id.len() <= MAX_SEED_LEN {
        return policy_id;
    }
    let mut end = MAX_SEED_LEN;
    while !policy_id.is_char_boundary(end) {
        end -= 1;
    }
    &policy_id[..end]
}

//=============================================================================
// Record Identifiers
//=============================================================================

/// Fresh policy/claim identifier: the first characters of a random base58
/// address.
pub fn generate_record_id() -> String {
    Keypair::new()
        .pubkey()
        .to_string()
        .chars()
        .take(SHORT_ID_LEN)
        .collect()
}
