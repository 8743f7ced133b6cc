use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    constants::{
        ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID, TOKEN_PROGRAM_ID,
    },
    error::Result,
};

/// Creates the associated token account of `owner` for `mint`, funded by
/// `payer`. The account address is derived, not passed in.
pub struct CreateAssociatedTokenAccount {
    /// Funds the account creation, must sign
    pub payer: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
}

impl CreateAssociatedTokenAccount {
    pub fn instruction(self) -> Result<Instruction> {
        let (associated_token_address, _) = find_associated_token_address(&self.owner, &self.mint);
        Ok(Instruction {
            program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.payer, true),
                AccountMeta::new(associated_token_address, false),
                AccountMeta::new_readonly(self.owner, false),
                AccountMeta::new_readonly(self.mint, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
                AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
                AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            ],
            // The create operation carries no arguments and no tag.
            data: Vec::new(),
        })
    }
}

/// Canonical token account address of `wallet` for `mint`, with its bump.
pub fn find_associated_token_address(wallet: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}
