use solana_pubkey::{pubkey, Pubkey};

pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);

pub const SYSVAR_RENT_ID: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

/// Allocation span of an SPL token account, in bytes.
pub const TOKEN_ACCOUNT_SPAN: u64 = 165;

/// Allocation span of an SPL token mint, in bytes.
pub const TOKEN_MINT_SPAN: u64 = 82;
