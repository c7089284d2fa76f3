use assurance_sdk::state::AssuranceInstruction;
use assurance_sdk::{
    derive_claim_pda, derive_policy_pda, derive_profile_pda, AssuranceClient, AssuranceSdkError,
    ClaimDecision,
};
use solana_sdk::pubkey::{Pubkey, PubkeyError};
use solana_sdk::signature::{Keypair, Signer};

mod common;
use common::{MockConnection, OfflineConnection};

fn client() -> AssuranceClient {
    AssuranceClient::with_program_id(Pubkey::new_unique(), Pubkey::new_unique())
}

#[test_log::test]
fn test_create_profile_targets_payer_profile() {
    let client = client();

    let prepared = client
        .create_profile()
        .with_name("John Doe")
        .with_email("john.doe@example.com")
        .build_instruction()
        .unwrap();

    let (expected, _) = derive_profile_pda(&client.program_id, &client.payer).unwrap();
    assert_eq!(prepared.address, expected);
    assert_eq!(client.profile_address().unwrap(), expected);
    assert!(prepared.record_id.is_none());
    assert_eq!(prepared.instruction.data.len(), 129);
}

#[test_log::test]
fn test_missing_fields_are_reported() {
    let client = client();

    let err = client
        .create_profile()
        .with_email("a@b.c")
        .build_instruction()
        .unwrap_err();
    assert!(matches!(err, AssuranceSdkError::MissingField("name")));

    let err = client
        .purchase_policy()
        .with_product("LIFE")
        .with_coverage(1000.0)
        .with_premium(10.0)
        .build_instruction()
        .unwrap_err();
    assert!(matches!(err, AssuranceSdkError::MissingField("duration_months")));

    let err = client.process_claim().with_claim_id("CLM1").build_instruction().unwrap_err();
    assert!(matches!(err, AssuranceSdkError::MissingField("decision")));

    let err = client.make_payment().with_amount(5.0).build_instruction().unwrap_err();
    assert!(matches!(err, AssuranceSdkError::MissingField("policy_id")));
}

#[test_log::test]
fn test_strict_builders_reject_long_text() {
    let client = client();
    let long_name = "N".repeat(65);

    let err = client
        .create_profile()
        .with_name(long_name.clone())
        .with_email("a@b.c")
        .strict(true)
        .build_instruction()
        .unwrap_err();
    assert!(matches!(
        err,
        AssuranceSdkError::FieldTooLong {
            field: "name",
            len: 65,
            max: 64
        }
    ));

    let err = client
        .file_claim()
        .with_policy_id("POL1")
        .with_amount(1.0)
        .with_description("d".repeat(129))
        .strict(true)
        .build_instruction()
        .unwrap_err();
    assert!(matches!(
        err,
        AssuranceSdkError::FieldTooLong {
            field: "description",
            ..
        }
    ));

    // Lenient mode truncates instead
    let prepared = client
        .create_profile()
        .with_name(long_name)
        .with_email("a@b.c")
        .build_instruction()
        .unwrap();
    assert_eq!(&prepared.instruction.data[1..65], "N".repeat(64).as_bytes());
}

#[test_log::test]
fn test_purchase_policy_generates_record_id() {
    let client = client();
    let builder = client
        .purchase_policy()
        .with_product("HOME-BASIC")
        .with_coverage(50_000.0)
        .with_premium(120.0)
        .with_duration_months(12);

    let first = builder.build_instruction().unwrap();
    let second = builder.build_instruction().unwrap();

    let policy_id = first.record_id.clone().unwrap();
    assert_eq!(policy_id.len(), 8);
    assert_ne!(first.record_id, second.record_id);

    let (expected, _) = derive_policy_pda(&client.program_id, &policy_id).unwrap();
    assert_eq!(first.address, expected);
    assert_eq!(first.instruction.accounts[1].pubkey, expected);
}

#[test_log::test]
fn test_long_policy_id_is_truncated() {
    let client = client();
    let long_id = "p".repeat(40);

    let prepared = client
        .make_payment()
        .with_policy_id(long_id)
        .with_amount(250.5)
        .build_instruction()
        .unwrap();

    assert_eq!(prepared.record_id.as_deref(), Some("p".repeat(32).as_str()));
    let (expected, _) = derive_policy_pda(&client.program_id, &"p".repeat(32)).unwrap();
    assert_eq!(prepared.address, expected);
}

#[test_log::test]
fn test_oversized_claim_id_fails_derivation() {
    let client = client();

    let err = client
        .file_claim()
        .with_policy_id("POL1")
        .with_claim_id("c".repeat(33))
        .with_amount(10.0)
        .with_description("Broken window")
        .build_instruction()
        .unwrap_err();

    assert!(matches!(
        err,
        AssuranceSdkError::Derivation(PubkeyError::MaxSeedLengthExceeded)
    ));
}

#[test_log::test]
fn test_file_claim_uses_policy_and_generated_claim() {
    let client = client();

    let prepared = client
        .file_claim()
        .with_policy_id("POL1")
        .with_amount(750.25)
        .with_description("Hail damage")
        .build_instruction()
        .unwrap();

    let claim_id = prepared.record_id.clone().unwrap();
    let (claim_pda, _) = derive_claim_pda(&client.program_id, &claim_id).unwrap();
    let (policy_pda, _) = derive_policy_pda(&client.program_id, "POL1").unwrap();
    assert_eq!(prepared.address, claim_pda);
    assert_eq!(prepared.instruction.accounts[1].pubkey, policy_pda);
    assert_eq!(prepared.instruction.accounts[2].pubkey, claim_pda);
}

#[test_log::test]
fn test_process_claim_authority_and_decision() {
    let client = client();
    let reviewer = Pubkey::new_unique();

    let prepared = client
        .process_claim()
        .with_claim_id("CLM1")
        .with_authority(reviewer)
        .reject()
        .build_instruction()
        .unwrap();

    assert_eq!(prepared.instruction.accounts[0].pubkey, reviewer);
    assert!(prepared.instruction.accounts[0].is_signer);
    assert_eq!(
        AssuranceInstruction::unpack(&prepared.instruction.data).unwrap(),
        AssuranceInstruction::ProcessClaim { approved: false }
    );

    let prepared = client
        .process_claim()
        .with_claim_id("CLM1")
        .with_decision(ClaimDecision::from(true))
        .build_instruction()
        .unwrap();
    assert_eq!(prepared.instruction.accounts[0].pubkey, client.payer);
    assert_eq!(prepared.instruction.data, vec![3, 1]);
}

#[test_log::test(tokio::test)]
async fn test_build_transaction_uses_latest_blockhash() {
    let connection = MockConnection::new();
    let payer = Keypair::new();
    let client = AssuranceClient::new(payer.pubkey());

    let tx = client
        .make_payment()
        .with_policy_id("POL1")
        .with_amount(99.5)
        .build_transaction(&connection)
        .await
        .unwrap();

    assert_eq!(tx.message.recent_blockhash, connection.blockhash);
    assert_eq!(tx.message.account_keys[0], payer.pubkey());
    assert_eq!(tx.message.instructions.len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_build_transaction_surfaces_connection_errors() {
    let client = client();

    let err = client
        .create_profile()
        .with_name("Jane")
        .with_email("jane@example.com")
        .build_transaction(&OfflineConnection)
        .await
        .unwrap_err();

    assert!(matches!(err, AssuranceSdkError::Connection(_)));
}
