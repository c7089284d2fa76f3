use solana_sdk::pubkey::Pubkey;

// Placeholder program ID; override through `ClientConfig` for a real deployment
pub const DEFAULT_PROGRAM_ID: Pubkey = Pubkey::new_from_array(assurance_program::ID);

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Relative to `$HOME`.
pub const DEFAULT_KEYPAIR_PATH: &str = ".config/solana/id.json";
