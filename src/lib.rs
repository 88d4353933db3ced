pub mod cache;
pub mod config;
pub mod error;
pub mod options;
pub mod output;
pub mod prompt;
pub mod summarize;
pub mod youtube;

use serde::Serialize;

use crate::cache::MemoryCache;
use crate::error::{Error, Result};
use crate::options::SummaryOptions;
use crate::summarize::SummaryClient;
use crate::youtube::TranscriptResolver;

/// A single timed caption segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Metadata of the caption track a transcript was derived from
#[derive(Debug, Clone, Serialize)]
pub struct TrackInfo {
    pub language_code: String,
    pub auto_generated: bool,
}

/// Plain-text transcript for a video, concatenated from one caption track
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub text: String,
    pub track: TrackInfo,
}

/// Final result of a summarize run
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutcome {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub auto_generated: bool,
    pub summary: String,
    pub from_cache: bool,
}

const VIDEO_ID_PATTERNS: &[&str] = &[
    r"(?:youtube\.com/watch\?.*v=)([a-zA-Z0-9_-]{11})",
    r"youtu\.be/([a-zA-Z0-9_-]{11})",
    r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
    r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
];

/// Extract a video ID from the common YouTube URL shapes, or accept a bare
/// 11-character ID.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    for pattern in VIDEO_ID_PATTERNS {
        if let Some(caps) = regex::Regex::new(pattern).unwrap().captures(input) {
            return Some(caps[1].to_string());
        }
    }

    None
}

/// The one caller-facing operation: URL or ID in, stylized summary out.
/// Sequential by design — track listing, then segment fetch, then
/// summarization; the cache is probed first and fed on success.
pub async fn summarize_video(
    resolver: &TranscriptResolver,
    client: &SummaryClient,
    cache: &MemoryCache<SummaryOutcome>,
    input: &str,
    options: &SummaryOptions,
) -> Result<SummaryOutcome> {
    let video_id = extract_video_id(input).ok_or_else(|| Error::InvalidUrl {
        input: input.to_string(),
    })?;

    let key = cache::summary_key(&video_id, options);
    if let Some(mut hit) = cache.get(&key) {
        hit.from_cache = true;
        return Ok(hit);
    }

    let transcript = resolver.resolve(&video_id).await?;
    let summary = client.summarize(&transcript.text, options).await?;

    let outcome = SummaryOutcome {
        video_id: transcript.video_id,
        title: transcript.title,
        language: transcript.track.language_code,
        auto_generated: transcript.track.auto_generated,
        summary,
        from_cache: false,
    };
    cache.insert(key, outcome.clone());

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_video_id() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(extract_video_id("not-a-valid-id"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(extract_video_id("  dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }
}
