use ferry_pda_sdk::{
    decode_invoke_state, derive_seed, find_derived_address,
    instructions::{invoke_with_setup, CreateDerivedAccount, Invoke},
};
use solana_pubkey::{pubkey, Pubkey};

fn create_request(program_id: Pubkey) -> CreateDerivedAccount {
    let seeds = derive_seed("hello_world").to_vec();
    let (derived_address, nonce) = find_derived_address("hello_world", &program_id);
    CreateDerivedAccount {
        payer: Pubkey::new_unique(),
        seeds,
        nonce,
        derived_address,
        space: 100,
        program_id,
    }
}

#[test]
fn create_account_payload_layout() {
    let program_id = Pubkey::new_unique();
    let request = create_request(program_id);
    let ix = request.instruction().unwrap();

    assert_eq!(ix.program_id, program_id);
    // tag, u32 seed length, 32 seed bytes, nonce, u16 space
    assert_eq!(ix.data.len(), 1 + 4 + 32 + 1 + 2);
    assert_eq!(ix.data[0], 0);
    assert_eq!(ix.data[1..5], 32u32.to_le_bytes());
    assert_eq!(&ix.data[5..37], request.seeds.as_slice());
    assert_eq!(ix.data[37], request.nonce);
    assert_eq!(ix.data[38..40], 100u16.to_le_bytes());
}

#[test]
fn create_account_references() {
    let program_id = Pubkey::new_unique();
    let request = create_request(program_id);
    let ix = request.instruction().unwrap();

    assert_eq!(ix.accounts.len(), 4);
    assert_eq!(ix.accounts[0].pubkey, request.payer);
    assert!(ix.accounts[0].is_signer && !ix.accounts[0].is_writable);
    assert_eq!(ix.accounts[1].pubkey, request.derived_address);
    assert!(!ix.accounts[1].is_signer && ix.accounts[1].is_writable);
    assert_eq!(
        ix.accounts[2].pubkey,
        pubkey!("SysvarRent111111111111111111111111111111111")
    );
    assert_eq!(ix.accounts[3].pubkey, Pubkey::new_from_array([0; 32]));
}

#[test]
fn invoke_is_a_single_tag_byte_against_the_derived_account() {
    let program_id = Pubkey::new_unique();
    let derived_address = Pubkey::new_unique();
    let ix = Invoke {
        derived_address,
        program_id,
    }
    .instruction()
    .unwrap();

    assert_eq!(ix.data, [1]);
    assert_eq!(ix.accounts.len(), 1);
    assert_eq!(ix.accounts[0].pubkey, derived_address);
    assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
}

#[test]
fn invoke_with_setup_prepends_create_only_when_absent() {
    let program_id = Pubkey::new_unique();
    let request = create_request(program_id);

    let existing = invoke_with_setup(&request, true).unwrap();
    assert_eq!(existing.len(), 1);
    assert_eq!(existing[0].data, [1]);

    let fresh = invoke_with_setup(&request, false).unwrap();
    assert_eq!(fresh.len(), 2);
    assert_eq!(fresh[0].data[0], 0);
    assert_eq!(fresh[1].data, [1]);
    assert_eq!(fresh[1], existing[0]);
}

#[test]
fn invoke_state_round_trips_negative_timestamps() {
    let mut data = Vec::new();
    data.extend_from_slice(&42u64.to_le_bytes());
    data.extend_from_slice(&(-1i64).to_le_bytes());
    let state = decode_invoke_state(&data).unwrap();
    assert_eq!(state.count, 42);
    assert_eq!(state.timestamp, -1);

    let mut data = Vec::new();
    data.extend_from_slice(&7u64.to_le_bytes());
    data.extend_from_slice(&1_650_000_000i64.to_le_bytes());
    let state = decode_invoke_state(&data).unwrap();
    assert_eq!(state.timestamp, 1_650_000_000);
}

#[test]
fn invoke_state_requires_full_record() {
    let data = [0u8; 15];
    assert!(decode_invoke_state(&data).is_err());
}
