use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChapterizeError {
    #[error("Malformed cue block: {0}")]
    MalformedCueBlock(String),

    #[error("Malformed timecode: {0}")]
    MalformedTimecode(String),

    #[error("Video fetch failed: {0}")]
    VideoFetch(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChapterizeError>;
