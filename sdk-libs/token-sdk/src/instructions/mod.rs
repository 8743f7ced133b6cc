//! Builders for SPL token operations.
//!
//! ## Account creation
//!
//! - [`InitializeMint`] - initialize a freshly allocated mint
//! - [`InitializeAccount`] - initialize a freshly allocated token account
//! - [`CreateAssociatedTokenAccount`] - create the canonical token account
//!   of a wallet for one mint
//!
//! ## Balance movement
//!
//! - [`Transfer`] - move base units between token accounts
//! - [`MintTo`] - mint new base units into a token account
//! - [`Burn`] - destroy base units held by a token account
//!
//! ## Authorization
//!
//! - [`Approve`] - delegate spending rights over a token account
//! - [`SetAuthority`] - rotate or disable a mint/account authority
//! - [`CloseAccount`] - close an empty token account
//!
//! The account order and signer/writable flags each builder emits are
//! dictated by the receiving program and are as load-bearing as the payload
//! bytes.

mod approve;
mod burn;
mod close_account;
mod create_associated_token_account;
mod initialize_account;
mod initialize_mint;
mod mint_to;
mod set_authority;
mod transfer;

pub use approve::Approve;
pub use burn::Burn;
pub use close_account::CloseAccount;
pub use create_associated_token_account::{
    find_associated_token_address, CreateAssociatedTokenAccount,
};
pub use initialize_account::InitializeAccount;
pub use initialize_mint::InitializeMint;
pub use mint_to::MintTo;
pub use set_authority::SetAuthority;
pub use transfer::Transfer;
