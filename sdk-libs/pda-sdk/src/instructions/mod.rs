//! Builders for the program-derived-address program.
//!
//! - [`CreateDerivedAccount`] - allocate the account at a derived address
//! - [`Invoke`] - run the program against its derived account
//! - [`invoke_with_setup`] - both of the above behind one policy switch

mod create_account;
mod invoke;

pub use create_account::CreateDerivedAccount;
pub use invoke::{invoke_with_setup, Invoke};

pub(crate) const CREATE_ACCOUNT_TAG: u8 = 0;
pub(crate) const INVOKE_TAG: u8 = 1;
