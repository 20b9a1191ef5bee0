use crate::types::Level;

const BEGINNER_KEYWORDS: &[&str] = &["beginner", "basics", "from scratch", "introduction"];
const ADVANCED_KEYWORDS: &[&str] = &["advanced", "expert", "project", "deep dive"];

/// Guess the difficulty tier of a video from its title.
///
/// Beginner keywords win over advanced ones; anything else is intermediate.
pub fn detect_level(title: &str) -> Level {
    let title = title.to_lowercase();

    if BEGINNER_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        Level::Beginner
    } else if ADVANCED_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        Level::Advanced
    } else {
        Level::Intermediate
    }
}
