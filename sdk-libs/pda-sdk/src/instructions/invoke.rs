use ferry_layout::{Field, FieldKind, Schema, Value};
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use super::{create_account::CreateDerivedAccount, INVOKE_TAG};
use crate::error::Result;

const INVOKE_IX: Schema = Schema::new(&[Field::new("instruction", FieldKind::U8)]);

const INVOKE_IX_CAPACITY: usize = 2;

/// Runs the program against the state at `derived_address`.
pub struct Invoke {
    pub derived_address: Pubkey,
    pub program_id: Pubkey,
}

impl Invoke {
    pub fn instruction(&self) -> Result<Instruction> {
        let data = INVOKE_IX.encode(&[Value::Uint(INVOKE_TAG as u64)], INVOKE_IX_CAPACITY)?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![AccountMeta::new(self.derived_address, false)],
            data,
        })
    }
}

/// One code path for "run the program at its derived address": when the
/// caller reports the derived account absent, the create-account
/// instruction is prepended. Whether the account exists is the transport
/// layer's question; this builder only honors the answer.
pub fn invoke_with_setup(
    create: &CreateDerivedAccount,
    account_exists: bool,
) -> Result<Vec<Instruction>> {
    let invoke = Invoke {
        derived_address: create.derived_address,
        program_id: create.program_id,
    }
    .instruction()?;
    if account_exists {
        Ok(vec![invoke])
    } else {
        Ok(vec![create.instruction()?, invoke])
    }
}
