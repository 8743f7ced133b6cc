use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{constants::TOKEN_PROGRAM_ID, error::Result, instruction::TokenInstruction};

/// Destroys `amount` base units held by `source`, reducing the supply of
/// `mint`.
pub struct Burn {
    /// Owner of the source token account, must sign
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub source: Pubkey,
    pub amount: u64,
}

impl Burn {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::Burn {
            amount: self.amount,
        }
        .encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.source, false),
                AccountMeta::new(self.mint, false),
                AccountMeta::new_readonly(self.owner, true),
            ],
            data,
        })
    }
}
