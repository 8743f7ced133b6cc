use ferry_layout::LayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenSdkError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenSdkError {
    #[error("no instruction schema registered for discriminator {0}")]
    UnknownDiscriminator(u8),
    #[error("invalid authority type {0}")]
    InvalidAuthorityType(u8),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
