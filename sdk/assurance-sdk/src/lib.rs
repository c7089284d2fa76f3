pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::client::{build_transaction, send_instructions, AssuranceClient};
pub use crate::core::config::{load_keypair, ClientConfig};
pub use crate::core::connection::{RpcConnection, SolConnection};
pub use crate::core::signer::{KeypairWallet, WalletAdapter};
pub use crate::error::{AssuranceSdkError, Result};
pub use crate::types::{ClaimDecision, PreparedInstruction};
pub use crate::utils::{
    derive_claim_pda, derive_policy_pda, derive_profile_pda, generate_record_id, policy_seed,
};

pub mod state {
    pub use assurance_program::instruction::{AssuranceInstruction, InstructionDiscriminator};
    pub use assurance_state::{
        seeds, Claim, ClaimStatus, Policy, UserProfile, DESCRIPTION_LEN, EMAIL_LEN, NAME_LEN,
        PRODUCT_ID_LEN,
    };
}
