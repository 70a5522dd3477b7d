use thiserror::Error;
use vnshelf_core::Media;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("download request failed: {0}")]
    Request(String),
    #[error("download returned HTTP {0}")]
    HttpStatus(u16),
}

/// Host-owned service that fetches a URL and stores the bytes.
///
/// Consumed as an opaque collaborator; this crate never implements it.
#[async_trait::async_trait]
pub trait MediaDownloader: Send + Sync {
    async fn download_by_url(&self, url: &str) -> Result<Media, DownloadError>;
}
