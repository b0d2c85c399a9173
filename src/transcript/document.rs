// Document projection and the output-collaborator seam
use super::title_case;
use crate::align::AlignedTranscript;
use crate::error::Result;
use std::path::{Path, PathBuf};

const INVALID_SAVE_CHARS: [char; 1] = ['|'];

/// One heading-plus-body section of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionParagraph {
    heading: String,
    body: String,
}

impl CaptionParagraph {
    pub fn new(title: &str, texts: &[&str]) -> Self {
        let body = texts
            .iter()
            .map(|text| {
                if text.ends_with(' ') {
                    (*text).to_string()
                } else {
                    format!("{} ", text)
                }
            })
            .collect::<String>();

        Self {
            heading: title_case(title),
            body,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The document projection of an aligned transcript: a title plus one
/// paragraph per chapter group, in first-attribution order.
#[derive(Debug, Clone)]
pub struct CaptionDocument {
    pub title: String,
    pub paragraphs: Vec<CaptionParagraph>,
}

impl CaptionDocument {
    pub fn from_transcript(transcript: &AlignedTranscript, title: &str) -> Self {
        let paragraphs = transcript
            .iter()
            .map(|(key, cues)| {
                let texts: Vec<&str> = cues.iter().map(|cue| cue.text.as_str()).collect();
                CaptionParagraph::new(&key.name, &texts)
            })
            .collect();

        Self {
            title: title.to_string(),
            paragraphs,
        }
    }
}

/// Encoder for one concrete document format. The word-processor encoding
/// itself lives behind this seam; the crate only ships the plain-text sink.
pub trait DocumentSink {
    fn render(&self, document: &CaptionDocument) -> String;
    fn extension(&self) -> &'static str;
}

/// Headings underlined with `=`, one body paragraph per section.
pub struct PlainTextSink;

impl DocumentSink for PlainTextSink {
    fn render(&self, document: &CaptionDocument) -> String {
        let mut out = format!("{}\n\n", document.title);

        for paragraph in &document.paragraphs {
            out.push_str(paragraph.heading());
            out.push('\n');
            out.push_str(&"=".repeat(paragraph.heading().chars().count().max(1)));
            out.push_str("\n\n");
            out.push_str(paragraph.body().trim_end());
            out.push_str("\n\n");
        }

        out
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

/// Replace forbidden path characters and ensure the sink's extension.
pub fn as_valid_save_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for ch in INVALID_SAVE_CHARS {
        name = name.replace(ch, "-");
    }

    let suffix = format!(".{}", extension);
    if !name.ends_with(&suffix) {
        name.push_str(&suffix);
    }

    path.with_file_name(name)
}

/// Render through the sink and write to the sanitized path. Returns the
/// path actually written.
pub fn save_document(
    document: &CaptionDocument,
    sink: &dyn DocumentSink,
    path: &Path,
) -> Result<PathBuf> {
    let path = as_valid_save_path(path, sink.extension());
    std::fs::write(&path, sink.render(document))?;
    Ok(path)
}
