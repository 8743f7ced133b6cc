//! Payload schemas and the tagged instruction type for the SPL token
//! program.
//!
//! The discriminator is the first payload byte; the receiving program
//! interprets every following byte under the schema that tag selects, so a
//! wrong tag silently reinterprets the rest of the payload.

use ferry_layout::{Field, FieldKind, LayoutError, Schema, Value};
use solana_pubkey::Pubkey;

use crate::error::{Result, TokenSdkError};

const AMOUNT_IX: Schema = Schema::new(&[
    Field::new("instruction", FieldKind::U8),
    Field::new("amount", FieldKind::U64),
]);

const TAG_ONLY_IX: Schema = Schema::new(&[Field::new("instruction", FieldKind::U8)]);

const INITIALIZE_MINT_IX: Schema = Schema::new(&[
    Field::new("instruction", FieldKind::U8),
    Field::new("decimals", FieldKind::U8),
    Field::new("mint_authority", FieldKind::Pubkey),
    Field::new("freeze_authority", FieldKind::Option(&FieldKind::Pubkey)),
]);

const SET_AUTHORITY_IX: Schema = Schema::new(&[
    Field::new("instruction", FieldKind::U8),
    Field::new("authority_type", FieldKind::U8),
    Field::new("new_authority", FieldKind::Option(&FieldKind::Pubkey)),
]);

// Encode capacities per operation, sized to each schema's largest value.
const AMOUNT_IX_CAPACITY: usize = 10;
const TAG_ONLY_IX_CAPACITY: usize = 2;
const INITIALIZE_MINT_IX_CAPACITY: usize = 67;
const SET_AUTHORITY_IX_CAPACITY: usize = 100;

/// Which authority of a mint or token account a
/// [`TokenInstruction::SetAuthority`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuthorityType {
    MintTokens = 0,
    FreezeAccount = 1,
    AccountOwner = 2,
    CloseAccount = 3,
}

impl AuthorityType {
    pub fn from_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(AuthorityType::MintTokens),
            1 => Ok(AuthorityType::FreezeAccount),
            2 => Ok(AuthorityType::AccountOwner),
            3 => Ok(AuthorityType::CloseAccount),
            other => Err(TokenSdkError::InvalidAuthorityType(other)),
        }
    }
}

/// One SPL token operation with exactly its required typed parameters.
/// Construction rules out invalid field combinations; the wire form is
/// produced by [`TokenInstruction::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenInstruction {
    InitializeMint {
        decimals: u8,
        mint_authority: Pubkey,
        /// `None` leaves the mint without a freeze authority.
        freeze_authority: Option<Pubkey>,
    },
    InitializeAccount,
    Transfer {
        amount: u64,
    },
    Approve {
        amount: u64,
    },
    SetAuthority {
        authority_type: AuthorityType,
        /// `None` permanently disables the targeted authority.
        new_authority: Option<Pubkey>,
    },
    MintTo {
        amount: u64,
    },
    Burn {
        amount: u64,
    },
    CloseAccount,
}

impl TokenInstruction {
    pub const fn discriminator(&self) -> u8 {
        match self {
            TokenInstruction::InitializeMint { .. } => 0,
            TokenInstruction::InitializeAccount => 1,
            TokenInstruction::Transfer { .. } => 3,
            TokenInstruction::Approve { .. } => 4,
            TokenInstruction::SetAuthority { .. } => 6,
            TokenInstruction::MintTo { .. } => 7,
            TokenInstruction::Burn { .. } => 8,
            TokenInstruction::CloseAccount => 9,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let tag = Value::Uint(self.discriminator() as u64);
        let data = match self {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => INITIALIZE_MINT_IX.encode(
                &[
                    tag,
                    Value::Uint(*decimals as u64),
                    Value::Pubkey(*mint_authority),
                    Value::from_option(freeze_authority.map(Value::Pubkey)),
                ],
                INITIALIZE_MINT_IX_CAPACITY,
            )?,
            TokenInstruction::SetAuthority {
                authority_type,
                new_authority,
            } => SET_AUTHORITY_IX.encode(
                &[
                    tag,
                    Value::Uint(*authority_type as u64),
                    Value::from_option(new_authority.map(Value::Pubkey)),
                ],
                SET_AUTHORITY_IX_CAPACITY,
            )?,
            TokenInstruction::Transfer { amount }
            | TokenInstruction::Approve { amount }
            | TokenInstruction::MintTo { amount }
            | TokenInstruction::Burn { amount } => {
                AMOUNT_IX.encode(&[tag, Value::Uint(*amount)], AMOUNT_IX_CAPACITY)?
            }
            TokenInstruction::InitializeAccount | TokenInstruction::CloseAccount => {
                TAG_ONLY_IX.encode(&[tag], TAG_ONLY_IX_CAPACITY)?
            }
        };
        Ok(data)
    }

    /// Interprets a tagged payload against the registered schemas.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let Some(&tag) = data.first() else {
            return Err(LayoutError::TruncatedInput {
                field: "instruction",
                missing: 1,
            }
            .into());
        };
        match tag {
            0 => {
                let record = INITIALIZE_MINT_IX.decode(data)?;
                Ok(TokenInstruction::InitializeMint {
                    decimals: record.uint("decimals")? as u8,
                    mint_authority: record.pubkey("mint_authority")?,
                    freeze_authority: record.optional_pubkey("freeze_authority")?,
                })
            }
            1 => Ok(TokenInstruction::InitializeAccount),
            3 | 4 | 7 | 8 => {
                let record = AMOUNT_IX.decode(data)?;
                let amount = record.uint("amount")?;
                Ok(match tag {
                    3 => TokenInstruction::Transfer { amount },
                    4 => TokenInstruction::Approve { amount },
                    7 => TokenInstruction::MintTo { amount },
                    _ => TokenInstruction::Burn { amount },
                })
            }
            6 => {
                let record = SET_AUTHORITY_IX.decode(data)?;
                Ok(TokenInstruction::SetAuthority {
                    authority_type: AuthorityType::from_byte(record.uint("authority_type")? as u8)?,
                    new_authority: record.optional_pubkey("new_authority")?,
                })
            }
            9 => Ok(TokenInstruction::CloseAccount),
            other => Err(TokenSdkError::UnknownDiscriminator(other)),
        }
    }
}
