use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Codec failures. All of them indicate a programming or data-corruption
/// defect rather than a transient condition; none is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("input truncated: field `{field}` needs {missing} more byte(s)")]
    TruncatedInput {
        field: &'static str,
        missing: usize,
    },
    #[error("value {value} does not fit the {width}-byte field `{field}`")]
    EncodingRangeError {
        field: &'static str,
        value: u64,
        width: usize,
    },
    #[error("encoded output would exceed the declared capacity of {capacity} byte(s)")]
    CapacityExceeded { capacity: usize },
    #[error("invalid option tag {0}, expected 0 or 1")]
    InvalidOptionTag(u8),
    #[error("schema expects {expected} value(s), {actual} supplied")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("value for field `{field}` does not match its declared kind")]
    TypeMismatch { field: &'static str },
    #[error("record has no field `{0}`")]
    MissingField(&'static str),
}
