//! Error types for page rendering and asset handling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("cannot pass an empty asset path in")]
    EmptyAssetPath,

    #[error("asset path must start with '/': {0}")]
    RelativeAssetPath(String),

    #[error("asset not found: {0}")]
    AssetNotFound(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
