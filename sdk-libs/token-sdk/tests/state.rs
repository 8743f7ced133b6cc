use ferry_layout::LayoutError;
use ferry_token_sdk::{decode_token_account, decode_token_mint, TokenSdkError};
use solana_pubkey::Pubkey;

struct TokenAccountBlob {
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
    delegate_option: u32,
    delegate: [u8; 32],
    state: u8,
    is_native_option: u32,
    is_native: u64,
    delegated_amount: u64,
    close_authority_option: u32,
    close_authority: [u8; 32],
}

impl TokenAccountBlob {
    fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(165);
        data.extend_from_slice(self.mint.as_ref());
        data.extend_from_slice(self.owner.as_ref());
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.delegate_option.to_le_bytes());
        data.extend_from_slice(&self.delegate);
        data.push(self.state);
        data.extend_from_slice(&self.is_native_option.to_le_bytes());
        data.extend_from_slice(&self.is_native.to_le_bytes());
        data.extend_from_slice(&self.delegated_amount.to_le_bytes());
        data.extend_from_slice(&self.close_authority_option.to_le_bytes());
        data.extend_from_slice(&self.close_authority);
        assert_eq!(data.len(), 165);
        data
    }
}

fn plain_account() -> TokenAccountBlob {
    TokenAccountBlob {
        mint: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        amount: 1_000,
        delegate_option: 0,
        delegate: [0; 32],
        state: 1,
        is_native_option: 0,
        is_native: 0,
        delegated_amount: 0,
        close_authority_option: 0,
        close_authority: [0; 32],
    }
}

#[test]
fn absent_delegate_nulls_the_slot_regardless_of_garbage() {
    let mut blob = plain_account();
    // Garbage in the value slots must not leak through a zero flag.
    blob.delegate = [0xAB; 32];
    blob.delegated_amount = 0xDEAD_BEEF;
    blob.close_authority = [0xCD; 32];

    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert_eq!(info.delegate, None);
    assert_eq!(info.delegated_amount, 0);
    assert_eq!(info.close_authority, None);
    assert_eq!(info.amount, 1_000);
    assert_eq!(info.mint, blob.mint);
    assert_eq!(info.owner, blob.owner);
}

#[test]
fn present_delegate_exposes_slot_contents() {
    let delegate = Pubkey::new_unique();
    let mut blob = plain_account();
    blob.delegate_option = 1;
    blob.delegate = delegate.to_bytes();
    blob.delegated_amount = 250;

    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert_eq!(info.delegate, Some(delegate));
    assert_eq!(info.delegated_amount, 250);
}

#[test]
fn state_byte_sentinels() {
    let mut blob = plain_account();

    blob.state = 0;
    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert!(!info.is_initialized);
    assert!(!info.is_frozen);

    blob.state = 1;
    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert!(info.is_initialized);
    assert!(!info.is_frozen);

    blob.state = 2;
    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert!(info.is_initialized);
    assert!(info.is_frozen);
}

#[test]
fn native_flag_gates_the_rent_reserve() {
    let mut blob = plain_account();
    blob.is_native_option = 1;
    blob.is_native = 2_039_280;

    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert!(info.is_native);
    assert_eq!(info.rent_exempt_reserve, Some(2_039_280));

    blob.is_native_option = 0;
    let info = decode_token_account(&blob.to_bytes()).unwrap();
    assert!(!info.is_native);
    assert_eq!(info.rent_exempt_reserve, None);
}

#[test]
fn trailing_bytes_are_tolerated() {
    let mut data = plain_account().to_bytes();
    data.extend_from_slice(&[0xFF; 10]);
    assert!(decode_token_account(&data).is_ok());
}

#[test]
fn short_account_blob_is_truncated_input() {
    let data = plain_account().to_bytes();
    let err = decode_token_account(&data[..150]).unwrap_err();
    assert!(matches!(
        err,
        TokenSdkError::Layout(LayoutError::TruncatedInput { .. })
    ));
}

fn mint_blob(
    mint_authority: Option<Pubkey>,
    supply: u64,
    decimals: u8,
    initialized: bool,
    freeze_authority: Option<Pubkey>,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(82);
    data.extend_from_slice(&u32::from(mint_authority.is_some()).to_le_bytes());
    data.extend_from_slice(mint_authority.unwrap_or_default().as_ref());
    data.extend_from_slice(&supply.to_le_bytes());
    data.push(decimals);
    data.push(initialized as u8);
    data.extend_from_slice(&u32::from(freeze_authority.is_some()).to_le_bytes());
    data.extend_from_slice(freeze_authority.unwrap_or_default().as_ref());
    assert_eq!(data.len(), 82);
    data
}

#[test]
fn mint_decodes_present_freeze_authority_exactly() {
    let freeze_authority = Pubkey::new_unique();
    let info =
        decode_token_mint(&mint_blob(None, 21_000_000, 8, true, Some(freeze_authority))).unwrap();
    assert_eq!(info.freeze_authority, Some(freeze_authority));
    assert_eq!(info.mint_authority, None);
    assert_eq!(info.supply, 21_000_000);
    assert_eq!(info.decimals, 8);
    assert!(info.is_initialized);
}

#[test]
fn mint_absent_authorities_are_none() {
    let info = decode_token_mint(&mint_blob(None, 0, 0, false, None)).unwrap();
    assert_eq!(info.mint_authority, None);
    assert_eq!(info.freeze_authority, None);
    assert!(!info.is_initialized);
}

#[test]
fn short_mint_blob_is_truncated_input() {
    let data = mint_blob(None, 1, 1, true, None);
    let err = decode_token_mint(&data[..40]).unwrap_err();
    assert!(matches!(
        err,
        TokenSdkError::Layout(LayoutError::TruncatedInput { .. })
    ));
}
