use crate::types::{Level, SearchResults, VideoCandidate};

/// Format seconds as H:MM:SS, or MM:SS for videos under an hour
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

pub fn video_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}

fn format_video_line(index: usize, video: &VideoCandidate) -> String {
    format!(
        "{}. {} ({})\n   [{}] {} views | comments {:+} | score {:.1}\n   {}\n",
        index + 1,
        video.title,
        video.channel,
        format_duration(video.duration_seconds),
        video.views,
        video.comment_score,
        video.score,
        video_url(&video.id)
    )
}

pub fn format_results_readable(topic: &str, results: &SearchResults) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {} tutorials\n\n", topic));

    if results.videos.is_empty() {
        output.push_str("No tutorials found.\n");
        return output;
    }

    output.push_str("## Top videos\n\n");
    for (i, video) in results.videos.iter().enumerate() {
        output.push_str(&format_video_line(i, video));
    }
    output.push('\n');

    output.push_str("## Curriculum\n\n");
    for level in Level::ALL {
        output.push_str(&format!("### {}\n\n", capitalize(level.name())));
        let videos = results.curriculum.level(level);
        if videos.is_empty() {
            output.push_str("(nothing found)\n\n");
            continue;
        }
        for (i, video) in videos.iter().enumerate() {
            output.push_str(&format_video_line(i, video));
        }
        output.push('\n');
    }

    output
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
