use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not extract a video ID from {input:?}")]
    InvalidUrl { input: String },

    #[error("no captions available for video {video_id}")]
    NoSubtitles { video_id: String },

    #[error("rate limited by upstream: {detail}")]
    RateLimited { detail: String },

    #[error("caption fetch failed for video {video_id}: {reason}")]
    TranscriptFetch { video_id: String, reason: String },

    #[error("{env_var} is not set and no api_key is configured")]
    Configuration { env_var: &'static str },

    #[error("summarization API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("summarization response contained no summary text")]
    ResponseShape,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("summarization failed with no recorded error")]
    Unknown,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure category for user-facing presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RateLimited,
    NoSubtitles,
    Network,
    Upstream,
    Unknown,
}

impl Error {
    /// Classify structurally where possible; only unstructured provider text
    /// falls through to keyword matching.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::NoSubtitles { .. } => ErrorKind::NoSubtitles,
            Error::Upstream { status: 429, .. } => ErrorKind::RateLimited,
            Error::Upstream { .. } | Error::ResponseShape => ErrorKind::Upstream,
            Error::Http(e) if e.is_timeout() || e.is_connect() => ErrorKind::Network,
            Error::Http(e) => classify_message(&e.to_string()),
            Error::TranscriptFetch { reason, .. } => classify_message(reason),
            _ => ErrorKind::Unknown,
        }
    }
}

const RATE_LIMIT_KEYWORDS: &[&str] = &["quota", "rate", "limit", "exceeded", "too many", "429"];
const NO_SUBTITLE_KEYWORDS: &[&str] = &["subtitle", "caption", "transcript", "not available", "not found"];
const NETWORK_KEYWORDS: &[&str] = &["network", "connection", "timeout", "connect", "unreachable"];

/// Best-effort classification of free-text error messages from third-party
/// sources that carry no structured code.
pub fn classify_message(message: &str) -> ErrorKind {
    let message = message.to_lowercase();

    if RATE_LIMIT_KEYWORDS.iter().any(|k| message.contains(k)) {
        return ErrorKind::RateLimited;
    }
    if NO_SUBTITLE_KEYWORDS.iter().any(|k| message.contains(k)) {
        return ErrorKind::NoSubtitles;
    }
    if NETWORK_KEYWORDS.iter().any(|k| message.contains(k)) {
        return ErrorKind::Network;
    }

    ErrorKind::Unknown
}
