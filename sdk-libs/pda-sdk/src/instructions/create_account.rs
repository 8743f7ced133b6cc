use ferry_layout::{Field, FieldKind, Schema, Value};
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::{pubkey, Pubkey};

use super::CREATE_ACCOUNT_TAG;
use crate::error::Result;

const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);
const SYSVAR_RENT_ID: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

const CREATE_ACCOUNT_IX: Schema = Schema::new(&[
    Field::new("instruction", FieldKind::U8),
    Field::new("seeds", FieldKind::Bytes),
    Field::new("nonce", FieldKind::U8),
    Field::new("space", FieldKind::U16),
]);

const CREATE_ACCOUNT_IX_CAPACITY: usize = 256;

/// Allocates `space` bytes at `derived_address`, owned by `program_id`.
///
/// `seeds` and `nonce` must be the derivation inputs that produced
/// `derived_address`; the program re-signs with them.
pub struct CreateDerivedAccount {
    /// Funds the allocation, must sign
    pub payer: Pubkey,
    pub seeds: Vec<u8>,
    /// Bump from the derivation search. Rides a single byte on the wire;
    /// the deployed program reads exactly one, so no widening.
    pub nonce: u8,
    pub derived_address: Pubkey,
    pub space: u16,
    pub program_id: Pubkey,
}

impl CreateDerivedAccount {
    pub fn instruction(&self) -> Result<Instruction> {
        let data = CREATE_ACCOUNT_IX.encode(
            &[
                Value::Uint(CREATE_ACCOUNT_TAG as u64),
                Value::Bytes(self.seeds.clone()),
                Value::Uint(self.nonce as u64),
                Value::Uint(self.space as u64),
            ],
            CREATE_ACCOUNT_IX_CAPACITY,
        )?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new_readonly(self.payer, true),
                AccountMeta::new(self.derived_address, false),
                AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data,
        })
    }
}
