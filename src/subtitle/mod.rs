pub mod srt;

use std::time::Duration;

/// One timed subtitle entry as it appears in the caption track.
///
/// `id` is the 1-based sequence number assigned by the source. `text` is
/// owned and exclusively mutable; downstream consumers may normalize it
/// (trailing-space insurance in [`CaptionTrack::as_list`]) without breaking
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub id: usize,
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

/// All cues of one caption track, sorted by `id` ascending.
#[derive(Debug, Clone, Default)]
pub struct CaptionTrack {
    pub cues: Vec<Cue>,
}

impl CaptionTrack {
    /// Parse a raw SRT payload. Fails on the first malformed cue block;
    /// there is no partial track.
    pub fn parse(payload: &str) -> crate::error::Result<Self> {
        let mut cues = srt::parse_cues(payload)?;
        cues.sort_by_key(|cue| cue.id);
        Ok(Self { cues })
    }

    /// Cue texts in order, each guaranteed to end in exactly one trailing
    /// space (appended only when absent, never doubled).
    pub fn as_list(&self) -> Vec<String> {
        self.cues
            .iter()
            .map(|cue| {
                if cue.text.ends_with(' ') {
                    cue.text.clone()
                } else {
                    format!("{} ", cue.text)
                }
            })
            .collect()
    }

    /// The whole track as one string, no separator beyond the ensured
    /// trailing spaces.
    pub fn as_text(&self) -> String {
        self.as_list().concat()
    }

    /// One cue per line.
    pub fn as_lines(&self) -> String {
        self.as_list().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(id: usize, text: &str) -> Cue {
        Cue {
            id,
            start: Duration::from_secs(id as u64),
            end: Duration::from_secs(id as u64 + 1),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_as_list_ensures_single_trailing_space() {
        let track = CaptionTrack {
            cues: vec![cue(1, "hello"), cue(2, "world ")],
        };
        assert_eq!(track.as_list(), vec!["hello ", "world "]);
    }

    #[test]
    fn test_as_text_and_lines() {
        let track = CaptionTrack {
            cues: vec![cue(1, "hello"), cue(2, "world")],
        };
        assert_eq!(track.as_text(), "hello world ");
        assert_eq!(track.as_lines(), "hello \nworld ");
    }

    #[test]
    fn test_space_normalization_is_non_destructive() {
        let track = CaptionTrack {
            cues: vec![cue(1, "one two"), cue(2, "three ")],
        };
        let words: Vec<String> = track
            .as_list()
            .iter()
            .flat_map(|s| s.split_whitespace().map(str::to_string))
            .collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }
}
