use crate::{error::Result, youtube::VideoPlatform};

/// Top-level comments requested per video.
pub const MAX_COMMENTS: u32 = 50;

/// Keyword weights applied to each lower-cased comment. Every keyword found adds
/// its weight once, independently of the others.
const KEYWORD_WEIGHTS: &[(&str, i64)] = &[
    // learning signals
    ("best", 5),
    ("helped", 5),
    ("clear", 4),
    ("understand", 4),
    ("great", 3),
    ("amazing", 3),
    ("finally", 3),
    // complaints
    ("waste", -5),
    ("confusing", -4),
    ("bad", -3),
    ("boring", -2),
];

pub fn score_comment(text: &str) -> i64 {
    let text = text.to_lowercase();
    KEYWORD_WEIGHTS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}

pub fn score_comments<S: AsRef<str>>(texts: &[S]) -> i64 {
    texts.iter().map(|text| score_comment(text.as_ref())).sum()
}

/// Scores a video by the sentiment of its top-level comments.
pub struct CommentScorer<'a, P> {
    platform: &'a P,
}

impl<'a, P: VideoPlatform> CommentScorer<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Fetch comments for `video_id` and score them.
    ///
    /// Errors are returned as-is; callers decide what a failed fetch is worth.
    pub async fn score(&self, video_id: &str) -> Result<i64> {
        let texts = self.platform.comment_texts(video_id, MAX_COMMENTS).await?;
        Ok(score_comments(&texts))
    }
}
