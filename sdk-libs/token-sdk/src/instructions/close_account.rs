use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{constants::TOKEN_PROGRAM_ID, error::Result, instruction::TokenInstruction};

/// Closes `account`, returning its rent lamports to the owner. The account
/// balance must already be zero.
pub struct CloseAccount {
    /// Owner of the account being closed; also receives the lamports
    pub owner: Pubkey,
    pub account: Pubkey,
}

impl CloseAccount {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::CloseAccount.encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.account, false),
                AccountMeta::new(self.owner, false),
                AccountMeta::new_readonly(self.owner, true),
            ],
            data,
        })
    }
}
