use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty tier guessed from a video title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCandidate {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub views: u64,
    pub duration_seconds: u64,
    pub level: Level,
    pub comment_score: i64,
    /// Composite ranking score. Only meaningful once comment scoring ran.
    pub score: f64,
}

/// Top-ranked videos per level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    pub beginner: Vec<VideoCandidate>,
    pub intermediate: Vec<VideoCandidate>,
    pub advanced: Vec<VideoCandidate>,
}

impl Curriculum {
    pub fn level(&self, level: Level) -> &[VideoCandidate] {
        match level {
            Level::Beginner => &self.beginner,
            Level::Intermediate => &self.intermediate,
            Level::Advanced => &self.advanced,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub videos: Vec<VideoCandidate>,
    pub curriculum: Curriculum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serializes_camel_case() {
        let video = VideoCandidate {
            id: "abc".to_string(),
            title: "Rust basics".to_string(),
            channel: "Ferris".to_string(),
            views: 1200,
            duration_seconds: 720,
            level: Level::Beginner,
            comment_score: 4,
            score: 73.2,
        };

        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["durationSeconds"], 720);
        assert_eq!(json["commentScore"], 4);
        assert_eq!(json["level"], "beginner");
        assert_eq!(json["score"], 73.2);
    }

    #[test]
    fn test_empty_results_shape() {
        let json = serde_json::to_value(SearchResults::default()).unwrap();
        assert_eq!(json["videos"], serde_json::json!([]));
        assert_eq!(json["curriculum"]["beginner"], serde_json::json!([]));
        assert_eq!(json["curriculum"]["intermediate"], serde_json::json!([]));
        assert_eq!(json["curriculum"]["advanced"], serde_json::json!([]));
    }
}
