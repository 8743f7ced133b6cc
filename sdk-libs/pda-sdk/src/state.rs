use ferry_layout::{Field, FieldKind, Schema};

use crate::error::Result;

/// Counter record the program keeps at its derived address.
const INVOKE_STATE: Schema = Schema::new(&[
    Field::new("count", FieldKind::U64),
    Field::new("timestamp", FieldKind::I64),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokeState {
    /// Number of invocations so far.
    pub count: u64,
    /// Unix timestamp of the last invocation.
    pub timestamp: i64,
}

pub fn decode_invoke_state(data: &[u8]) -> Result<InvokeState> {
    let record = INVOKE_STATE.decode(data)?;
    Ok(InvokeState {
        count: record.uint("count")?,
        timestamp: record.int("timestamp")?,
    })
}
