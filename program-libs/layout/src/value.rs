use solana_pubkey::Pubkey;

use crate::error::{LayoutError, Result};

/// A value conforming to one [`crate::FieldKind`].
///
/// Unsigned integers of every width share the `Uint` variant; the width is
/// a property of the field, not the value, and is range-checked at encode
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uint(u64),
    Int(i64),
    Bool(bool),
    Pubkey(Pubkey),
    Bytes(Vec<u8>),
    None,
    Some(Box<Value>),
}

impl Value {
    pub fn some(inner: Value) -> Self {
        Value::Some(Box::new(inner))
    }

    pub fn from_option(inner: Option<Value>) -> Self {
        match inner {
            Option::Some(v) => Value::some(v),
            Option::None => Value::None,
        }
    }
}

/// Ordered, name-addressable result of decoding a [`crate::Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Record {
            fields: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Decoded values in wire order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    fn field(&self, name: &'static str) -> Result<&Value> {
        self.get(name).ok_or(LayoutError::MissingField(name))
    }

    pub fn uint(&self, name: &'static str) -> Result<u64> {
        match self.field(name)? {
            Value::Uint(v) => Ok(*v),
            _ => Err(LayoutError::TypeMismatch { field: name }),
        }
    }

    pub fn int(&self, name: &'static str) -> Result<i64> {
        match self.field(name)? {
            Value::Int(v) => Ok(*v),
            _ => Err(LayoutError::TypeMismatch { field: name }),
        }
    }

    pub fn boolean(&self, name: &'static str) -> Result<bool> {
        match self.field(name)? {
            Value::Bool(v) => Ok(*v),
            _ => Err(LayoutError::TypeMismatch { field: name }),
        }
    }

    pub fn pubkey(&self, name: &'static str) -> Result<Pubkey> {
        match self.field(name)? {
            Value::Pubkey(v) => Ok(*v),
            _ => Err(LayoutError::TypeMismatch { field: name }),
        }
    }

    pub fn bytes(&self, name: &'static str) -> Result<&[u8]> {
        match self.field(name)? {
            Value::Bytes(v) => Ok(v.as_slice()),
            _ => Err(LayoutError::TypeMismatch { field: name }),
        }
    }

    /// Content of an optional field, `None` when the presence byte was 0.
    pub fn optional(&self, name: &'static str) -> Result<Option<&Value>> {
        match self.field(name)? {
            Value::None => Ok(None),
            Value::Some(inner) => Ok(Some(inner.as_ref())),
            _ => Err(LayoutError::TypeMismatch { field: name }),
        }
    }

    pub fn optional_pubkey(&self, name: &'static str) -> Result<Option<Pubkey>> {
        match self.optional(name)? {
            None => Ok(None),
            Some(Value::Pubkey(v)) => Ok(Some(*v)),
            Some(_) => Err(LayoutError::TypeMismatch { field: name }),
        }
    }
}
