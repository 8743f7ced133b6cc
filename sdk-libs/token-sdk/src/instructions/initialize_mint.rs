use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    constants::{SYSVAR_RENT_ID, TOKEN_PROGRAM_ID},
    error::Result,
    instruction::TokenInstruction,
};

/// Initializes an already-allocated account of
/// [`crate::constants::TOKEN_MINT_SPAN`] bytes as a mint.
pub struct InitializeMint {
    pub mint: Pubkey,
    pub decimals: u8,
    pub mint_authority: Pubkey,
    /// `None` creates the mint without a freeze authority.
    pub freeze_authority: Option<Pubkey>,
}

impl InitializeMint {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::InitializeMint {
            decimals: self.decimals,
            mint_authority: self.mint_authority,
            freeze_authority: self.freeze_authority,
        }
        .encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.mint, false),
                AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            ],
            data,
        })
    }
}
