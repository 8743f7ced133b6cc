use solana_pubkey::Pubkey;

use crate::{
    error::{LayoutError, Result},
    value::{Record, Value},
};

/// Primitive field kinds. Scalar widths are fixed; `Bytes` carries a `u32`
/// length prefix; `Option` wraps another kind behind a 1-byte presence tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    I64,
    Bool,
    Pubkey,
    Bytes,
    Option(&'static FieldKind),
}

impl FieldKind {
    /// Minimum number of wire bytes a field of this kind occupies
    /// (an absent option is 1 byte, an empty byte sequence 4).
    pub const fn min_size(&self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::Bool | FieldKind::Option(_) => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 | FieldKind::Bytes => 4,
            FieldKind::U64 | FieldKind::I64 => 8,
            FieldKind::Pubkey => 32,
        }
    }
}

/// One named field of a schema. The name is only used for decode results
/// and diagnostics; it never appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Field { name, kind }
    }
}

/// An ordered field list describing one instruction payload or one account
/// record shape. Field order is wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    pub const fn new(fields: &'static [Field]) -> Self {
        Schema { fields }
    }

    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Smallest number of bytes any value conforming to this schema
    /// occupies on the wire.
    pub const fn min_size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].kind.min_size();
            i += 1;
        }
        total
    }

    /// Encodes `values` (one per field, in schema order) into a buffer
    /// bounded by `capacity`. The capacity only bounds allocation; the
    /// returned buffer holds exactly the bytes written.
    pub fn encode(&self, values: &[Value], capacity: usize) -> Result<Vec<u8>> {
        if values.len() != self.fields.len() {
            return Err(LayoutError::ArityMismatch {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }
        let mut out = Writer::new(capacity);
        for (field, value) in self.fields.iter().zip(values) {
            encode_field(field.name, &field.kind, value, &mut out)?;
        }
        Ok(out.buf)
    }

    /// Decodes `bytes` against this schema. Fields are consumed strictly in
    /// order; trailing unconsumed bytes are permitted and ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let mut input = Reader { bytes, pos: 0 };
        let mut record = Record::with_capacity(self.fields.len());
        for field in self.fields {
            let value = decode_field(field.name, &field.kind, &mut input)?;
            record.push(field.name, value);
        }
        Ok(record)
    }
}

struct Writer {
    buf: Vec<u8>,
    capacity: usize,
}

impl Writer {
    fn new(capacity: usize) -> Self {
        Writer {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if self.buf.len() + bytes.len() > self.capacity {
            return Err(LayoutError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

fn encode_uint(name: &'static str, value: &Value, width: usize, out: &mut Writer) -> Result<()> {
    let Value::Uint(v) = value else {
        return Err(LayoutError::TypeMismatch { field: name });
    };
    if width < 8 && *v >> (width * 8) != 0 {
        return Err(LayoutError::EncodingRangeError {
            field: name,
            value: *v,
            width,
        });
    }
    out.write(&v.to_le_bytes()[..width])
}

fn encode_field(name: &'static str, kind: &FieldKind, value: &Value, out: &mut Writer) -> Result<()> {
    match (kind, value) {
        (FieldKind::U8, _) => encode_uint(name, value, 1, out),
        (FieldKind::U16, _) => encode_uint(name, value, 2, out),
        (FieldKind::U32, _) => encode_uint(name, value, 4, out),
        (FieldKind::U64, _) => encode_uint(name, value, 8, out),
        (FieldKind::I64, Value::Int(v)) => out.write(&v.to_le_bytes()),
        (FieldKind::Bool, Value::Bool(v)) => out.write(&[*v as u8]),
        (FieldKind::Pubkey, Value::Pubkey(v)) => out.write(v.as_ref()),
        (FieldKind::Bytes, Value::Bytes(v)) => {
            out.write(&length_prefix(name, v.len())?.to_le_bytes())?;
            out.write(v)
        }
        (FieldKind::Option(_), Value::None) => out.write(&[0]),
        (FieldKind::Option(inner), Value::Some(v)) => {
            out.write(&[1])?;
            encode_field(name, inner, v, out)
        }
        _ => Err(LayoutError::TypeMismatch { field: name }),
    }
}

fn length_prefix(name: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| LayoutError::EncodingRangeError {
        field: name,
        value: len as u64,
        width: 4,
    })
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize, field: &'static str) -> Result<&'a [u8]> {
        let available = self.bytes.len() - self.pos;
        if n > available {
            return Err(LayoutError::TruncatedInput {
                field,
                missing: n - available,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_uint(&mut self, width: usize, field: &'static str) -> Result<u64> {
        let slice = self.take(width, field)?;
        let mut raw = [0u8; 8];
        raw[..width].copy_from_slice(slice);
        Ok(u64::from_le_bytes(raw))
    }
}

fn decode_field(name: &'static str, kind: &FieldKind, input: &mut Reader) -> Result<Value> {
    match kind {
        FieldKind::U8 => Ok(Value::Uint(input.take_uint(1, name)?)),
        FieldKind::U16 => Ok(Value::Uint(input.take_uint(2, name)?)),
        FieldKind::U32 => Ok(Value::Uint(input.take_uint(4, name)?)),
        FieldKind::U64 => Ok(Value::Uint(input.take_uint(8, name)?)),
        FieldKind::I64 => Ok(Value::Int(input.take_uint(8, name)? as i64)),
        FieldKind::Bool => Ok(Value::Bool(input.take(1, name)?[0] != 0)),
        FieldKind::Pubkey => {
            let mut raw = [0u8; 32];
            raw.copy_from_slice(input.take(32, name)?);
            Ok(Value::Pubkey(Pubkey::new_from_array(raw)))
        }
        FieldKind::Bytes => {
            let len = input.take_uint(4, name)? as usize;
            Ok(Value::Bytes(input.take(len, name)?.to_vec()))
        }
        FieldKind::Option(inner) => match input.take(1, name)?[0] {
            0 => Ok(Value::None),
            1 => Ok(Value::some(decode_field(name, inner, input)?)),
            tag => Err(LayoutError::InvalidOptionTag(tag)),
        },
    }
}
