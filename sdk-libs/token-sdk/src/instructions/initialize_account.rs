use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    constants::{SYSVAR_RENT_ID, TOKEN_PROGRAM_ID},
    error::Result,
    instruction::TokenInstruction,
};

/// Initializes an already-allocated account of
/// [`crate::constants::TOKEN_ACCOUNT_SPAN`] bytes as a token account
/// holding `mint` for `owner`.
pub struct InitializeAccount {
    pub account: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
}

impl InitializeAccount {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::InitializeAccount.encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.account, false),
                AccountMeta::new_readonly(self.mint, false),
                AccountMeta::new_readonly(self.owner, false),
                AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            ],
            data,
        })
    }
}
