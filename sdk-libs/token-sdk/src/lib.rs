//! Client-side wire layer for the SPL token program and the
//! associated-token-account program.
//!
//! Builders are pure: given already-resolved addresses and parameters they
//! return a [`solana_instruction::Instruction`] carrying the encoded payload
//! and the account-reference list the target program expects, in its exact
//! order and with its exact signer/writable flags. No RPC, signing, or
//! transaction assembly happens here; those belong to the transport layer
//! consuming this crate.

pub mod constants;
pub mod error;
pub mod instruction;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::{Result, TokenSdkError};
pub use instruction::{AuthorityType, TokenInstruction};
pub use state::{decode_token_account, decode_token_mint, TokenAccountInfo, TokenMintInfo};
