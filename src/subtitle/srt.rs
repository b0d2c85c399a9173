// SRT cue-block parsing
use super::Cue;
use crate::error::{ChapterizeError, Result};
use crate::timecode::parse_srt_timestamp;

/// Parse an SRT payload into cues.
///
/// Blocks are separated by blank lines. Each block is an identifier line, a
/// `START --> END` time-range line, and one or more text lines (joined with
/// a space). Any block violating that structure aborts the parse.
pub fn parse_cues(payload: &str) -> Result<Vec<Cue>> {
    let normalized = payload.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Result<Cue> {
    let malformed = || ChapterizeError::MalformedCueBlock(block.trim().to_string());

    let mut lines = block.lines().filter(|line| !line.trim().is_empty());

    let id: usize = lines
        .next()
        .and_then(|line| line.trim().parse().ok())
        .ok_or_else(malformed)?;

    let (start_str, end_str) = lines
        .next()
        .and_then(|line| line.split_once(" --> "))
        .ok_or_else(malformed)?;

    let start = parse_srt_timestamp(start_str)?;
    let end = parse_srt_timestamp(end_str)?;

    let text = lines.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Err(malformed());
    }

    Ok(Cue {
        id,
        start,
        end,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SAMPLE: &str = "\
1
00:00:00,320 --> 00:00:02,480
welcome back to the channel

2
00:00:02,480 --> 00:00:05,120
today we look at alignment
";

    #[test]
    fn test_parse_two_blocks() {
        let cues = parse_cues(SAMPLE).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].id, 1);
        assert_eq!(cues[0].start, Duration::from_millis(320));
        assert_eq!(cues[0].end, Duration::from_millis(2480));
        assert_eq!(cues[0].text, "welcome back to the channel");
        assert_eq!(cues[1].id, 2);
    }

    #[test]
    fn test_end_time_comes_from_end_side() {
        let cues = parse_cues("1\n00:00:01,000 --> 00:00:09,000\nhi\n").unwrap();
        assert_eq!(cues[0].start, Duration::from_secs(1));
        assert_eq!(cues[0].end, Duration::from_secs(9));
    }

    #[test]
    fn test_multiline_text_joined() {
        let cues = parse_cues("1\n00:00:00,000 --> 00:00:02,000\nfirst line\nsecond line\n")
            .unwrap();
        assert_eq!(cues[0].text, "first line second line");
    }

    #[test]
    fn test_crlf_payload() {
        let payload = "1\r\n00:00:00,000 --> 00:00:01,000\r\nhello\r\n\r\n2\r\n00:00:01,000 --> 00:00:02,000\r\nworld\r\n";
        let cues = parse_cues(payload).unwrap();
        assert_eq!(cues.len(), 2);
    }

    #[test]
    fn test_malformed_block_aborts_whole_parse() {
        let payload = "1\n00:00:00,000 --> 00:00:01,000\nhello\n\nnot a number\nbad block\n";
        assert!(parse_cues(payload).is_err());
    }

    #[test]
    fn test_missing_arrow_is_malformed() {
        assert!(parse_cues("1\n00:00:00,000 00:00:01,000\nhello\n").is_err());
    }

    #[test]
    fn test_empty_payload() {
        assert!(parse_cues("").unwrap().is_empty());
        assert!(parse_cues("\n\n\n").unwrap().is_empty());
    }
}
