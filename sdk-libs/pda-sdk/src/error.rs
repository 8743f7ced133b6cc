use ferry_layout::LayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PdaSdkError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PdaSdkError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
