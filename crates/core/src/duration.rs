use std::sync::LazyLock;

use regex::{Captures, Regex};

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?").expect("duration pattern is valid")
});

/// Parse a `PT#H#M#S` duration (as returned by the videos endpoint) into seconds.
///
/// Any of the components may be missing. Input without a `PT` marker parses as 0.
pub fn parse_duration(duration: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(duration) else {
        return 0;
    };

    let hours = component(&caps, 1);
    let minutes = component(&caps, 2);
    let seconds = component(&caps, 3);

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

fn component(caps: &Captures<'_>, index: usize) -> u64 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
