//! VNDB (Visual Novel Database) provider client.
//!
//! Uses the VNDB Kana API: https://api.vndb.org/kana

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};
use vnshelf_core::{
    DeveloperMetadata, GameMetadata, GenreMetadata, Media, MinimalGameMetadata, ProviderSettings,
    TagMetadata,
};

use crate::MetadataError;
use crate::media::MediaDownloader;
use crate::provider::MetadataProvider;

const API_URL: &str = "https://api.vndb.org/kana/vn";
const SLUG: &str = "vndb";
const DISPLAY_NAME: &str = "VNDB";

/// Field selection sent with every query; VNDB only returns what is asked for.
const FIELDS: &str = "title, image.url, released, length_minutes, description, \
                      devstatus, rating, screenshots.url, developers.name, \
                      tags.name, tags.id, extlinks.url";

/// VNDB carries no age-rating data, so every visual novel is treated as adult content.
const ADULT_AGE_RATING: u8 = 18;

/// One page of a `/vn` filter query.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct VnFilterResponse {
    #[serde(default)]
    pub results: Vec<VisualNovel>,
    /// Pagination flag; a single page is all the host consumes.
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VisualNovel {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub length_minutes: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub devstatus: i32,
    #[serde(default)]
    pub image: Option<VnImage>,
    #[serde(default)]
    pub screenshots: Vec<VnImage>,
    #[serde(default)]
    pub developers: Vec<VnProducer>,
    #[serde(default)]
    pub tags: Vec<VnTag>,
    #[serde(default)]
    pub extlinks: Vec<VnExtLink>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VnImage {
    pub url: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VnProducer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VnTag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VnExtLink {
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// VNDB development status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevStatus {
    Finished,
    InDevelopment,
    Cancelled,
}

impl DevStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Finished),
            1 => Some(Self::InDevelopment),
            2 => Some(Self::Cancelled),
            _ => None,
        }
    }
}

pub struct VndbClient {
    client: reqwest::Client,
    settings: ProviderSettings,
    downloader: Arc<dyn MediaDownloader>,
}

impl VndbClient {
    pub fn new(settings: ProviderSettings, downloader: Arc<dyn MediaDownloader>) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
            downloader,
        }
    }

    /// POST a filter expression to the vn endpoint and parse one page of results.
    async fn query_vn(
        &self,
        filters: serde_json::Value,
    ) -> Result<VnFilterResponse, MetadataError> {
        debug!(url = API_URL, filters = %filters, "VNDB request");

        let resp = self
            .client
            .post(API_URL)
            .json(&serde_json::json!({ "filters": filters, "fields": FIELDS }))
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        // Status first: a rejected query comes back as plain text, not JSON.
        if !resp.status().is_success() {
            return Err(MetadataError::Http(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Parse(e.to_string()))
    }

    async fn download_cover(&self, image: Option<&VnImage>) -> Option<Media> {
        let image = image?;
        match self.downloader.download_by_url(&image.url).await {
            Ok(media) => Some(media),
            Err(err) => {
                warn!(url = %image.url, error = %err, "cover download failed, record kept without one");
                None
            }
        }
    }

    async fn map_game_metadata(&self, vn: VisualNovel) -> GameMetadata {
        let cover = self.download_cover(vn.image.as_ref()).await;

        GameMetadata {
            provider_slug: SLUG.to_string(),
            provider_data_id: vn.id.clone(),
            provider_data_url: format!("{}{}", self.settings.vn_url_base, vn.id),
            title: vn.title,
            description: vn.description,
            release_date: vn.released.as_deref().and_then(parse_release_date),
            age_rating: ADULT_AGE_RATING,
            rating: vn.rating,
            early_access: DevStatus::from_code(vn.devstatus) == Some(DevStatus::InDevelopment),
            average_playtime: vn.length_minutes,
            url_websites: vn.extlinks.into_iter().map(|link| link.url).collect(),
            url_screenshots: vn.screenshots.into_iter().map(|shot| shot.url).collect(),
            // VNDB carries no trailer or gameplay footage.
            url_trailers: Vec::new(),
            url_gameplays: Vec::new(),
            developers: vn
                .developers
                .into_iter()
                .map(|dev| DeveloperMetadata {
                    provider_slug: SLUG.to_string(),
                    provider_data_id: dev.id,
                    name: dev.name,
                })
                .collect(),
            // The vn endpoint exposes no publisher data.
            publishers: Vec::new(),
            genres: vec![visual_novel_genre()],
            tags: vn
                .tags
                .into_iter()
                .map(|tag| TagMetadata {
                    provider_slug: SLUG.to_string(),
                    provider_data_id: tag.id,
                    name: tag.name,
                })
                .collect(),
            cover,
            background: None,
        }
    }
}

#[async_trait::async_trait]
impl MetadataProvider for VndbClient {
    fn slug(&self) -> &str {
        SLUG
    }

    fn name(&self) -> &str {
        DISPLAY_NAME
    }

    fn enabled(&self) -> bool {
        self.settings.enabled
    }

    fn priority(&self) -> i32 {
        self.settings.priority
    }

    fn request_interval(&self) -> Duration {
        Duration::from_millis(self.settings.request_interval_ms)
    }

    async fn search(&self, query: &str) -> Result<Vec<MinimalGameMetadata>, MetadataError> {
        let page = self
            .query_vn(serde_json::json!(["search", "=", query]))
            .await?;

        Ok(page
            .results
            .into_iter()
            .map(map_minimal_game_metadata)
            .collect())
    }

    async fn get_by_provider_data_id(&self, id: &str) -> Result<GameMetadata, MetadataError> {
        let page = self.query_vn(serde_json::json!(["id", "=", id])).await?;
        let vn = first_result(page)?;

        Ok(self.map_game_metadata(vn).await)
    }
}

fn map_minimal_game_metadata(vn: VisualNovel) -> MinimalGameMetadata {
    MinimalGameMetadata {
        provider_slug: SLUG.to_string(),
        provider_data_id: vn.id,
        title: vn.title,
        description: vn.description,
        release_date: vn.released.as_deref().and_then(parse_release_date),
        cover_url: vn.image.map(|image| image.url),
    }
}

/// An id filter matches at most one VN; zero results means the id is unknown.
fn first_result(page: VnFilterResponse) -> Result<VisualNovel, MetadataError> {
    page.results
        .into_iter()
        .next()
        .ok_or(MetadataError::NotFound)
}

/// VNDB release dates are "YYYY-MM-DD", sometimes truncated to a year or
/// year-month, and "TBA" for unreleased titles.
fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(year) = raw.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// VNDB has no genre taxonomy; every record gets this synthetic entry.
fn visual_novel_genre() -> GenreMetadata {
    GenreMetadata {
        provider_slug: SLUG.to_string(),
        provider_data_id: "1".to_string(),
        name: "Visual Novel".to_string(),
    }
}
