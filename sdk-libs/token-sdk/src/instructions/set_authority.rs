use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    constants::TOKEN_PROGRAM_ID,
    error::Result,
    instruction::{AuthorityType, TokenInstruction},
};

/// Rotates one authority of a mint or token account to `new_authority`, or
/// permanently disables it when `new_authority` is `None`.
pub struct SetAuthority {
    /// Current holder of the targeted authority, must sign
    pub authority: Pubkey,
    /// Mint or token account whose authority changes
    pub target: Pubkey,
    pub authority_type: AuthorityType,
    pub new_authority: Option<Pubkey>,
}

impl SetAuthority {
    pub fn instruction(self) -> Result<Instruction> {
        let data = TokenInstruction::SetAuthority {
            authority_type: self.authority_type,
            new_authority: self.new_authority,
        }
        .encode()?;
        Ok(Instruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(self.target, false),
                AccountMeta::new_readonly(self.authority, true),
            ],
            data,
        })
    }
}
