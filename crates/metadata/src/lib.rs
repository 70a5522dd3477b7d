pub mod media;
pub mod provider;
pub mod vndb;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream returned HTTP {0}")]
    Http(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("not found")]
    NotFound,
}
