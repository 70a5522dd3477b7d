use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lightweight search-result projection returned by provider search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalGameMetadata {
    pub provider_slug: String,
    pub provider_data_id: String,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub cover_url: Option<String>,
}

/// Full game record returned by a provider id lookup.
///
/// Built fresh on every call; the host owns merging and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMetadata {
    pub provider_slug: String,
    pub provider_data_id: String,
    /// Human-facing page for this record on the provider's site.
    pub provider_data_url: String,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Minimum age in years.
    pub age_rating: u8,
    pub rating: Option<f64>,
    pub early_access: bool,
    /// Playtime in minutes.
    pub average_playtime: Option<i64>,
    pub url_websites: Vec<String>,
    pub url_screenshots: Vec<String>,
    pub url_trailers: Vec<String>,
    pub url_gameplays: Vec<String>,
    pub developers: Vec<DeveloperMetadata>,
    pub publishers: Vec<PublisherMetadata>,
    pub genres: Vec<GenreMetadata>,
    pub tags: Vec<TagMetadata>,
    pub cover: Option<Media>,
    pub background: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperMetadata {
    pub provider_slug: String,
    pub provider_data_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherMetadata {
    pub provider_slug: String,
    pub provider_data_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreMetadata {
    pub provider_slug: String,
    pub provider_data_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagMetadata {
    pub provider_slug: String,
    pub provider_data_id: String,
    pub name: String,
}

/// Handle to a media file the host's download service has stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub source_url: String,
    pub file_path: PathBuf,
}
