//! The video-source collaborator seam: anything that can turn a locator
//! into a raw caption payload plus a description string.

use crate::error::{ChapterizeError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Raw material for one transcript build, fetched once before the core runs.
#[derive(Debug, Clone)]
pub struct VideoData {
    pub title: String,
    /// Raw subtitle-track payload in SRT cue-block form.
    pub captions: String,
    /// Free-text description, possibly containing chapter timecodes.
    pub description: String,
}

#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<VideoData>;
    fn name(&self) -> &'static str;
}

/// Reads the caption track from a local SRT file. The description comes
/// from an explicit companion file, or from `<stem>.description.txt` next
/// to the track when none is given; a missing default companion just means
/// an empty description (and therefore an empty transcript), not an error.
pub struct FileSource {
    pub description_path: Option<PathBuf>,
}

#[async_trait]
impl VideoSource for FileSource {
    async fn fetch(&self, locator: &str) -> Result<VideoData> {
        let path = PathBuf::from(locator);
        let captions = tokio::fs::read_to_string(&path).await?;

        let description = match &self.description_path {
            Some(explicit) => tokio::fs::read_to_string(explicit).await?,
            None => {
                let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                let companion = path.with_file_name(format!("{}.description.txt", stem));
                match tokio::fs::read_to_string(&companion).await {
                    Ok(text) => text,
                    Err(_) => {
                        warn!(
                            "No description file at {}; transcript will have no chapters",
                            companion.display()
                        );
                        String::new()
                    }
                }
            }
        };

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| locator.to_string());

        debug!("Read {} bytes of captions from {}", captions.len(), locator);

        Ok(VideoData {
            title,
            captions,
            description,
        })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Fetches the caption track over HTTP; the locator is the caption URL.
/// An optional second URL supplies the description.
pub struct HttpSource {
    client: reqwest::Client,
    description_url: Option<String>,
}

impl HttpSource {
    pub fn new(description_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            description_url,
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ChapterizeError::VideoFetch(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl VideoSource for HttpSource {
    async fn fetch(&self, locator: &str) -> Result<VideoData> {
        let captions = self.get_text(locator).await?;

        let description = match &self.description_url {
            Some(url) => self.get_text(url).await?,
            None => String::new(),
        };

        let title = locator
            .rsplit('/')
            .next()
            .unwrap_or(locator)
            .trim_end_matches(".srt")
            .to_string();

        debug!("Fetched {} bytes of captions from {}", captions.len(), locator);

        Ok(VideoData {
            title,
            captions,
            description,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_source_with_explicit_description() {
        let dir = tempfile::tempdir().unwrap();
        let srt = dir.path().join("talk.srt");
        let desc = dir.path().join("desc.txt");
        tokio::fs::write(&srt, "1\n00:00:00,000 --> 00:00:01,000\nhi\n")
            .await
            .unwrap();
        tokio::fs::write(&desc, "0:00 Intro\n").await.unwrap();

        let source = FileSource {
            description_path: Some(desc),
        };
        let data = source.fetch(&srt.to_string_lossy()).await.unwrap();

        assert_eq!(data.title, "talk");
        assert!(data.captions.contains("hi"));
        assert_eq!(data.description, "0:00 Intro\n");
    }

    #[tokio::test]
    async fn test_file_source_missing_companion_yields_empty_description() {
        let dir = tempfile::tempdir().unwrap();
        let srt = dir.path().join("talk.srt");
        tokio::fs::write(&srt, "1\n00:00:00,000 --> 00:00:01,000\nhi\n")
            .await
            .unwrap();

        let source = FileSource {
            description_path: None,
        };
        let data = source.fetch(&srt.to_string_lossy()).await.unwrap();
        assert!(data.description.is_empty());
    }

    #[tokio::test]
    async fn test_file_source_missing_track_is_error() {
        let source = FileSource {
            description_path: None,
        };
        assert!(source.fetch("/nonexistent/talk.srt").await.is_err());
    }
}
