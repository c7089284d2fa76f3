// Example: Registering a customer profile
//
// This example demonstrates how to:
// 1. Load connection settings from the environment
// 2. Check whether the payer already has a profile
// 3. Build, sign and submit a CreateProfile transaction

use assurance_sdk::{AssuranceClient, ClientConfig, KeypairWallet, RpcConnection, WalletAdapter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 1. RPC_URL, KEYPAIR_PATH, ASSURANCE_PROGRAM_ID, ASSURANCE_COMMITMENT
    let config = ClientConfig::from_env();
    let connection = RpcConnection::from_config(&config)?;
    let wallet = KeypairWallet::new(config.load_keypair()?);
    let payer = wallet.connect().await?;

    let client = AssuranceClient::from_config(&config, payer)?;
    println!("Profile address: {}", client.profile_address()?);

    // 2. One profile per payer
    if client.profile_exists(&connection).await? {
        println!("Profile already exists, nothing to do");
        return Ok(());
    }

    // 3. Submit
    let (signature, _) = client
        .create_profile()
        .with_name("John Doe")
        .with_email("john.doe@example.com")
        .strict(true)
        .send(&connection, &wallet)
        .await?;

    println!("Profile created: {}", signature);
    Ok(())
}
