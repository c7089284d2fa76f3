// Example: Buying a policy, paying a premium and filing a claim
//
// This example demonstrates how to:
// 1. Purchase a policy and keep its generated id
// 2. Pay a premium against that policy
// 3. File a claim and have it reviewed

use assurance_sdk::{AssuranceClient, ClientConfig, KeypairWallet, RpcConnection, WalletAdapter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ClientConfig::from_env();
    let connection = RpcConnection::from_config(&config)?;
    let wallet = KeypairWallet::connected(config.load_keypair()?);
    let payer = wallet.pubkey().ok_or("wallet not connected")?;
    let client = AssuranceClient::from_config(&config, payer)?;

    // 1. Purchase. The policy id is the PDA seed; later calls need it.
    let (signature, policy) = client
        .purchase_policy()
        .with_product("HOME-BASIC")
        .with_coverage(250_000.0)
        .with_premium(120.0)
        .with_duration_months(12)
        .send(&connection, &wallet)
        .await?;
    let policy_id = policy.record_id.ok_or("purchase returned no policy id")?;
    println!("Policy {} at {} ({})", policy_id, policy.address, signature);

    // 2. First premium
    let (signature, _) = client
        .make_payment()
        .with_policy_id(policy_id.as_str())
        .with_amount(120.0)
        .send(&connection, &wallet)
        .await?;
    println!("Premium paid: {}", signature);

    // 3. Claim, then review it with the same key
    let (signature, claim) = client
        .file_claim()
        .with_policy_id(policy_id.as_str())
        .with_amount(4_800.0)
        .with_description("Storm damage to roof")
        .send(&connection, &wallet)
        .await?;
    let claim_id = claim.record_id.ok_or("filing returned no claim id")?;
    println!("Claim {} at {} ({})", claim_id, claim.address, signature);

    let (signature, _) = client
        .process_claim()
        .with_claim_id(claim_id)
        .approve()
        .send(&connection, &wallet)
        .await?;
    println!("Claim approved: {}", signature);

    Ok(())
}
