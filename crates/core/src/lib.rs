//! Tutorank Core Library
//!
//! Searches YouTube for tutorials on a topic, scores them by views, length and
//! comment sentiment, and groups the best ones into a beginner → advanced curriculum.

pub mod config;
pub mod duration;
pub mod error;
pub mod format;
pub mod level;
pub mod pipeline;
pub mod sentiment;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use config::Settings;
pub use duration::parse_duration;
pub use error::{Result, TutorankError};
pub use format::{format_duration, format_results_readable};
pub use level::detect_level;
pub use pipeline::RankingPipeline;
pub use sentiment::{CommentScorer, score_comment, score_comments};
pub use types::{Curriculum, Level, SearchResults, VideoCandidate};
pub use youtube::{SearchHit, VideoDetails, VideoPlatform, YouTubeClient};
