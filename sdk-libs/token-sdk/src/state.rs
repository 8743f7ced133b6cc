//! Schema-driven views over persisted token program account state.
//!
//! The raw layouts use 4-byte presence flags with always-present value
//! slots, so the flag and the slot are separate plain fields here; the
//! semantic pass below is what turns flag/slot pairs into `Option`s and
//! the `state` byte into booleans. Raw integers never leak to callers.

use ferry_layout::{Field, FieldKind, Schema};
use solana_pubkey::Pubkey;

use crate::error::Result;

/// 165-byte SPL token account record.
const TOKEN_ACCOUNT: Schema = Schema::new(&[
    Field::new("mint", FieldKind::Pubkey),
    Field::new("owner", FieldKind::Pubkey),
    Field::new("amount", FieldKind::U64),
    Field::new("delegate_option", FieldKind::U32),
    Field::new("delegate", FieldKind::Pubkey),
    Field::new("state", FieldKind::U8),
    Field::new("is_native_option", FieldKind::U32),
    Field::new("is_native", FieldKind::U64),
    Field::new("delegated_amount", FieldKind::U64),
    Field::new("close_authority_option", FieldKind::U32),
    Field::new("close_authority", FieldKind::Pubkey),
]);

/// 82-byte SPL token mint record.
const TOKEN_MINT: Schema = Schema::new(&[
    Field::new("mint_authority_option", FieldKind::U32),
    Field::new("mint_authority", FieldKind::Pubkey),
    Field::new("supply", FieldKind::U64),
    Field::new("decimals", FieldKind::U8),
    Field::new("is_initialized", FieldKind::U8),
    Field::new("freeze_authority_option", FieldKind::U32),
    Field::new("freeze_authority", FieldKind::Pubkey),
]);

const STATE_FROZEN: u64 = 2;

/// Typed view over a token account blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAccountInfo {
    /// Address the blob was fetched from; filled in by the caller, never
    /// part of the account data itself.
    pub address: Option<Pubkey>,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    /// Zero whenever `delegate` is absent.
    pub delegated_amount: u64,
    pub is_initialized: bool,
    pub is_frozen: bool,
    pub is_native: bool,
    /// Present only for native-wrapped accounts.
    pub rent_exempt_reserve: Option<u64>,
    pub close_authority: Option<Pubkey>,
}

/// Typed view over a mint blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMintInfo {
    /// Address the blob was fetched from; filled in by the caller.
    pub address: Option<Pubkey>,
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
}

/// Decodes a raw token account blob. Blobs longer than the record are
/// accepted, shorter ones fail with `TruncatedInput`.
pub fn decode_token_account(data: &[u8]) -> Result<TokenAccountInfo> {
    let record = TOKEN_ACCOUNT.decode(data)?;
    let has_delegate = record.uint("delegate_option")? != 0;
    let is_native = record.uint("is_native_option")? == 1;
    let has_close_authority = record.uint("close_authority_option")? != 0;
    let state = record.uint("state")?;
    Ok(TokenAccountInfo {
        address: None,
        mint: record.pubkey("mint")?,
        owner: record.pubkey("owner")?,
        amount: record.uint("amount")?,
        delegate: if has_delegate {
            Some(record.pubkey("delegate")?)
        } else {
            None
        },
        delegated_amount: if has_delegate {
            record.uint("delegated_amount")?
        } else {
            0
        },
        is_initialized: state != 0,
        is_frozen: state == STATE_FROZEN,
        is_native,
        rent_exempt_reserve: if is_native {
            Some(record.uint("is_native")?)
        } else {
            None
        },
        close_authority: if has_close_authority {
            Some(record.pubkey("close_authority")?)
        } else {
            None
        },
    })
}

/// Decodes a raw mint blob.
pub fn decode_token_mint(data: &[u8]) -> Result<TokenMintInfo> {
    let record = TOKEN_MINT.decode(data)?;
    let has_mint_authority = record.uint("mint_authority_option")? != 0;
    let has_freeze_authority = record.uint("freeze_authority_option")? != 0;
    Ok(TokenMintInfo {
        address: None,
        supply: record.uint("supply")?,
        decimals: record.uint("decimals")? as u8,
        is_initialized: record.uint("is_initialized")? != 0,
        mint_authority: if has_mint_authority {
            Some(record.pubkey("mint_authority")?)
        } else {
            None
        },
        freeze_authority: if has_freeze_authority {
            Some(record.pubkey("freeze_authority")?)
        } else {
            None
        },
    })
}
