use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    config::Settings,
    duration::parse_duration,
    error::Result,
    level::detect_level,
    sentiment::CommentScorer,
    types::{Curriculum, Level, SearchResults, VideoCandidate},
    youtube::{SearchHit, VideoDetails, VideoPlatform, YouTubeClient},
};

/// Results requested from the search endpoint.
pub const SEARCH_RESULTS: u32 = 15;
/// Videos this long or shorter are treated as shorts and dropped.
pub const SHORT_MAX_SECONDS: u64 = 300;
/// Only this many surviving videos get their comments fetched.
pub const COMMENT_SCORED_VIDEOS: usize = 8;
pub const TOP_VIDEOS: usize = 6;
pub const CURRICULUM_PER_LEVEL: usize = 2;

const VIEWS_DIVISOR: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const COMMENT_WEIGHT: i64 = 15;

/// Search, score and group tutorial videos for a topic.
pub struct RankingPipeline<P> {
    platform: P,
}

impl RankingPipeline<YouTubeClient> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(YouTubeClient::from_settings(settings))
    }
}

impl<P: VideoPlatform> RankingPipeline<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Run the whole pipeline for `topic`.
    ///
    /// Search and statistics failures abort the run. Comment fetch failures
    /// only zero the affected video's comment score.
    pub async fn rank(&self, topic: &str) -> Result<SearchResults> {
        let query = format!("{} tutorial", topic);
        let hits = self.platform.search(&query, SEARCH_RESULTS).await?;
        debug!(query = %query, hits = hits.len(), "search complete");

        if hits.is_empty() {
            return Ok(SearchResults::default());
        }

        let ids: Vec<String> = hits.iter().map(|hit| hit.video_id.clone()).collect();
        let details = self.platform.video_details(&ids).await?;
        debug!(requested = ids.len(), returned = details.len(), "statistics fetched");

        let mut candidates = remove_shorts(merge_candidates(hits, details));
        debug!(remaining = candidates.len(), "shorts removed");

        self.apply_comment_scores(&mut candidates).await;

        for candidate in &mut candidates {
            candidate.score = composite_score(
                candidate.views,
                candidate.duration_seconds,
                candidate.comment_score,
            );
        }
        sort_by_score(&mut candidates);

        let results = build_results(candidates);
        info!(topic, videos = results.videos.len(), "ranked tutorials");
        Ok(results)
    }

    async fn apply_comment_scores(&self, candidates: &mut [VideoCandidate]) {
        let scorer = CommentScorer::new(&self.platform);

        for candidate in candidates.iter_mut().take(COMMENT_SCORED_VIDEOS) {
            candidate.comment_score = match scorer.score(&candidate.id).await {
                Ok(score) => score,
                Err(e) => {
                    // comments disabled, quota exhausted, ... count as neutral
                    debug!(video_id = %candidate.id, error = %e, "comment scoring skipped");
                    0
                }
            };
        }
    }
}

/// Build one candidate per search hit, in search order.
pub fn merge_candidates(hits: Vec<SearchHit>, details: Vec<VideoDetails>) -> Vec<VideoCandidate> {
    let details: HashMap<String, VideoDetails> = details
        .into_iter()
        .map(|detail| (detail.id.clone(), detail))
        .collect();

    // a video listed twice by the search endpoint gets its statistics both times
    hits.into_iter()
        .map(|hit| {
            let (views, duration) = match details.get(&hit.video_id) {
                Some(detail) => (detail.views, parse_duration(&detail.duration)),
                None => (0, 0),
            };

            VideoCandidate {
                level: detect_level(&hit.title),
                id: hit.video_id,
                title: hit.title,
                channel: hit.channel,
                views,
                duration_seconds: duration,
                comment_score: 0,
                score: 0.0,
            }
        })
        .collect()
}

pub fn remove_shorts(candidates: Vec<VideoCandidate>) -> Vec<VideoCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.duration_seconds > SHORT_MAX_SECONDS)
        .collect()
}

pub fn composite_score(views: u64, duration_seconds: u64, comment_score: i64) -> f64 {
    views as f64 / VIEWS_DIVISOR
        + duration_seconds as f64 / SECONDS_PER_MINUTE
        + comment_score.saturating_mul(COMMENT_WEIGHT) as f64
}

/// Sort descending by score. Equal scores keep their relative order.
pub fn sort_by_score(candidates: &mut [VideoCandidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// First `CURRICULUM_PER_LEVEL` candidates of each level, in the given order.
pub fn group_curriculum(ranked: &[VideoCandidate]) -> Curriculum {
    let top = |level: Level| -> Vec<VideoCandidate> {
        ranked
            .iter()
            .filter(|candidate| candidate.level == level)
            .take(CURRICULUM_PER_LEVEL)
            .cloned()
            .collect()
    };

    Curriculum {
        beginner: top(Level::Beginner),
        intermediate: top(Level::Intermediate),
        advanced: top(Level::Advanced),
    }
}

pub fn build_results(mut ranked: Vec<VideoCandidate>) -> SearchResults {
    let curriculum = group_curriculum(&ranked);
    ranked.truncate(TOP_VIDEOS);
    SearchResults {
        videos: ranked,
        curriculum,
    }
}
