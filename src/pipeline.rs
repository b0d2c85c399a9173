//! Ties the stages together: parse the caption track, scan the description,
//! align, project. The build itself is pure and synchronous; all I/O happens
//! in the [`crate::source::VideoSource`] before it and in the output sinks
//! after it.

use crate::align::{align, AlignPolicy, AlignedTranscript};
use crate::chapter::{scan_description, ChapterMarker};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::subtitle::CaptionTrack;
use crate::transcript;
use tracing::{debug, info};

/// Everything one build produces; callers pick the projection they need.
#[derive(Debug, Clone)]
pub struct TranscriptBuild {
    pub track: CaptionTrack,
    pub chapters: Vec<ChapterMarker>,
    pub transcript: AlignedTranscript,
}

/// Run the core on already-fetched raw material.
///
/// Zero chapter markers is not an error; the aligned mapping is just empty
/// and the flat projections still carry the full track.
pub fn build_transcript(
    captions: &str,
    description: &str,
    policy: &AlignPolicy,
) -> Result<TranscriptBuild> {
    let track = CaptionTrack::parse(captions)?;
    debug!("Parsed {} cues", track.cues.len());

    let chapters = scan_description(description);
    if chapters.is_empty() {
        info!("No chapter markers found in description");
    } else {
        debug!("Found {} chapter markers", chapters.len());
    }

    let transcript = align(&chapters, &track.cues, policy);
    info!(
        "Aligned {} cues into {} chapters",
        track.cues.len(),
        transcript.len()
    );

    Ok(TranscriptBuild {
        track,
        chapters,
        transcript,
    })
}

/// Render a build into one of the string-valued output formats. `Document`
/// goes through [`transcript::PlainTextSink`]; richer sinks render the
/// [`transcript::CaptionDocument`] themselves.
pub fn render(build: &TranscriptBuild, format: OutputFormat, title: &str) -> Result<String> {
    use crate::transcript::DocumentSink;

    match format {
        OutputFormat::Text => Ok(build.track.as_text()),
        OutputFormat::Lines => Ok(build.track.as_lines()),
        OutputFormat::Json => transcript::to_json_string(&build.transcript),
        OutputFormat::Document => {
            let document = transcript::CaptionDocument::from_transcript(&build.transcript, title);
            Ok(transcript::PlainTextSink.render(&document))
        }
    }
}
