use crate::align::{AlignPolicy, Preamble, TrailingCues};
use crate::error::{ChapterizeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flat transcript, cue texts concatenated.
    Text,
    /// One cue per line.
    Lines,
    /// Chapter-keyed display mapping.
    #[default]
    Json,
    /// Heading-plus-body document through a sink.
    Document,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Document => write!(f, "document"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            "document" | "doc" => Ok(OutputFormat::Document),
            _ => Err(format!(
                "Unknown format: {}. Use 'text', 'lines', 'json', or 'document'",
                s
            )),
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text | OutputFormat::Lines | OutputFormat::Document => "txt",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_format: OutputFormat,
    /// Keep cues that start after the last chapter marker by appending them
    /// to the final chapter instead of dropping them.
    pub attach_trailing_cues: bool,
    /// When set, cues before the first chapter marker go into a synthetic
    /// bucket with this name instead of the first chapter.
    pub preamble_bucket: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            attach_trailing_cues: false,
            preamble_bucket: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                if let Ok(file_config) = toml::from_str::<Config>(&contents) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables
        if let Ok(format) = std::env::var("CHAPTERIZE_DEFAULT_FORMAT") {
            if let Ok(f) = format.parse() {
                config.default_format = f;
            }
        }
        if let Ok(value) = std::env::var("CHAPTERIZE_ATTACH_TRAILING") {
            if let Ok(b) = value.parse() {
                config.attach_trailing_cues = b;
            }
        }
        if let Ok(name) = std::env::var("CHAPTERIZE_PREAMBLE_BUCKET") {
            config.preamble_bucket = Some(name);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.preamble_bucket {
            if name.trim().is_empty() {
                return Err(ChapterizeError::Config(
                    "preamble_bucket must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn align_policy(&self) -> AlignPolicy {
        AlignPolicy {
            trailing: if self.attach_trailing_cues {
                TrailingCues::AttachToLast
            } else {
                TrailingCues::Drop
            },
            preamble: match &self.preamble_bucket {
                Some(name) => Preamble::Synthetic(name.clone()),
                None => Preamble::FirstChapter,
            },
        }
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chapterize").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "doc".parse::<OutputFormat>().unwrap(),
            OutputFormat::Document
        );
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Text.extension(), "txt");
    }

    #[test]
    fn test_default_config_matches_historical_behavior() {
        let config = Config::default();
        assert_eq!(config.align_policy(), AlignPolicy::default());
    }

    #[test]
    fn test_policy_from_settings() {
        let config = Config {
            attach_trailing_cues: true,
            preamble_bucket: Some("Preamble".to_string()),
            ..Config::default()
        };
        let policy = config.align_policy();
        assert_eq!(policy.trailing, TrailingCues::AttachToLast);
        assert_eq!(
            policy.preamble,
            Preamble::Synthetic("Preamble".to_string())
        );
    }

    #[test]
    fn test_validate_empty_preamble_name() {
        let config = Config {
            preamble_bucket: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
