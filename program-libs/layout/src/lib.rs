//! Schema-driven binary codec for fixed-layout Solana wire data.
//!
//! A [`Schema`] is an ordered list of [`Field`]s. Encoding writes each field
//! in schema order into a capacity-bounded buffer; decoding consumes the
//! fields strictly in order against an input slice and returns a [`Record`].
//! Field order is the wire order, there is no named or keyed encoding.
//!
//! Wire rules: integers are little-endian at their declared width, 32-byte
//! identifiers are written verbatim, byte sequences carry a `u32` length
//! prefix, and optional fields carry a single presence byte (0 or 1)
//! followed by the wrapped encoding only when present.

pub mod error;
pub mod schema;
pub mod value;

pub use error::{LayoutError, Result};
pub use schema::{Field, FieldKind, Schema};
pub use value::{Record, Value};
