use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{constants::TOKEN_PROGRAM_ID, error::Result, instruction::TokenInstruction};

/// Moves `amount` base units from `source` to `destination`.
pub struct Transfer {
    /// Owner of the source token account, must sign
    pub owner: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

impl Transfer {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::Transfer {
            amount: self.amount,
        }
        .encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.source, false),
                AccountMeta::new(self.destination, false),
                AccountMeta::new_readonly(self.owner, true),
            ],
            data,
        })
    }
}
