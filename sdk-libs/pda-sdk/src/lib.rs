//! Client-side wire layer for the program-derived-address program: seed
//! material for address derivation, builders for its create-account and
//! invoke operations, and the decoder for its persisted counter state.
//!
//! The bump search and the curve-membership test behind
//! [`solana_pubkey::Pubkey::find_program_address`] are not this crate's
//! concern; only seed determinism is guaranteed here.

pub mod address;
pub mod error;
pub mod instructions;
pub mod state;

pub use address::{derive_seed, find_derived_address};
pub use error::{PdaSdkError, Result};
pub use instructions::{CreateDerivedAccount, Invoke};
pub use state::{decode_invoke_state, InvokeState};
