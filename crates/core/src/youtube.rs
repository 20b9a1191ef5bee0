//! YouTube Data API v3 client.
//!
//! Only the three read endpoints the ranking pipeline needs are covered:
//! `search`, `videos` and `commentThreads`.

use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{config::Settings, error::Result};

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// A video returned by the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub video_id: String,
    pub title: String,
    pub channel: String,
}

/// Statistics and content details for a single video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDetails {
    pub id: String,
    pub views: u64,
    /// Raw ISO-8601 duration, empty when the platform didn't report one.
    pub duration: String,
}

/// Read access to a video platform.
#[allow(async_fn_in_trait)]
pub trait VideoPlatform {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchHit>>;

    /// Batch lookup; ids unknown to the platform are simply absent from the result.
    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetails>>;

    /// Display text of up to `max_results` top-level comments.
    async fn comment_texts(&self, video_id: &str, max_results: u32) -> Result<Vec<String>>;
}

#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.youtube_api_key, &settings.api_base_url)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, "youtube request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }
}

impl VideoPlatform for YouTubeClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchHit>> {
        let max_results = max_results.to_string();
        let response: SearchResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("maxResults", max_results.as_str()),
                    ("type", "video"),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| {
                Some(SearchHit {
                    video_id: item.id.video_id?,
                    title: item.snippet.title,
                    channel: item.snippet.channel_title,
                })
            })
            .collect())
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetails>> {
        let ids = ids.join(",");
        let response: VideosResponse = self
            .get(
                "videos",
                &[("part", "statistics,contentDetails"), ("id", ids.as_str())],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| VideoDetails {
                id: item.id,
                views: item
                    .statistics
                    .view_count
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
                duration: item.content_details.duration.unwrap_or_default(),
            })
            .collect())
    }

    async fn comment_texts(&self, video_id: &str, max_results: u32) -> Result<Vec<String>> {
        let max_results = max_results.to_string();
        let response: CommentThreadsResponse = self
            .get(
                "commentThreads",
                &[
                    ("part", "snippet"),
                    ("videoId", video_id),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
            .collect())
    }
}

// API response structures

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    #[serde(default)]
    statistics: VideoStatistics,
    #[serde(rename = "contentDetails", default)]
    content_details: VideoContentDetails,
}

#[derive(Debug, Default, Deserialize)]
struct VideoStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VideoContentDetails {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay", default)]
    text_display: String,
}
