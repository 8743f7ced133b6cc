use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{constants::TOKEN_PROGRAM_ID, error::Result, instruction::TokenInstruction};

/// Delegates spending rights over `amount` base units of `owner_token` to
/// `delegate`.
pub struct Approve {
    /// Owner of the delegated token account, must sign
    pub owner: Pubkey,
    pub owner_token: Pubkey,
    pub delegate: Pubkey,
    pub amount: u64,
}

impl Approve {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::Approve {
            amount: self.amount,
        }
        .encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.owner_token, false),
                AccountMeta::new_readonly(self.delegate, false),
                AccountMeta::new_readonly(self.owner, true),
            ],
            data,
        })
    }
}
