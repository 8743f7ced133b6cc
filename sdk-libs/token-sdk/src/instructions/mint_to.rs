use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{constants::TOKEN_PROGRAM_ID, error::Result, instruction::TokenInstruction};

/// Mints `amount` new base units of `mint` into `destination`.
pub struct MintTo {
    /// Mint authority, must sign
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

impl MintTo {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::MintTo {
            amount: self.amount,
        }
        .encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.mint, false),
                AccountMeta::new(self.destination, false),
                AccountMeta::new_readonly(self.authority, true),
            ],
            data,
        })
    }
}
