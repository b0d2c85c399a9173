pub mod align;
pub mod chapter;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod subtitle;
pub mod timecode;
pub mod transcript;

pub use align::{align, AlignPolicy, AlignedTranscript, ChapterKey, Preamble, TrailingCues};
pub use chapter::{scan_description, ChapterMarker};
pub use config::{Config, OutputFormat};
pub use error::{ChapterizeError, Result};
pub use pipeline::{build_transcript, render, TranscriptBuild};
pub use source::{FileSource, HttpSource, VideoData, VideoSource};
pub use subtitle::{CaptionTrack, Cue};
