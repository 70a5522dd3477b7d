use std::time::Duration;

use vnshelf_core::{GameMetadata, MinimalGameMetadata};

use crate::MetadataError;

/// A metadata provider the host can register and query.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Stable identifier stamped on every record this provider emits.
    fn slug(&self) -> &str;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    fn enabled(&self) -> bool;

    /// Providers are consulted in ascending priority order by the host.
    fn priority(&self) -> i32;

    /// Minimum delay between requests; the host scheduler enforces it.
    fn request_interval(&self) -> Duration;

    /// Search by free text, returning lightweight results in API order.
    async fn search(&self, query: &str) -> Result<Vec<MinimalGameMetadata>, MetadataError>;

    /// Fetch the full record for a provider id.
    async fn get_by_provider_data_id(&self, id: &str) -> Result<GameMetadata, MetadataError>;
}
