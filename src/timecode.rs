//! Timecode parsing for the two time formats the system sees: SRT cue
//! timestamps (`H:MM:SS,mmm`) and the looser chapter timecodes people write
//! in video descriptions (`H:MM:SS` or `M:SS`).

use crate::error::{ChapterizeError, Result};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static HMS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+:\d+:\d+").expect("invalid H:MM:SS pattern"));

static MS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+:\d+").expect("invalid M:SS pattern"));

/// A timecode found inside a line of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimecodeMatch {
    /// Parsed position, second precision.
    pub position: Duration,
    /// The exact substring that matched, byte range into the original line.
    pub start: usize,
    pub end: usize,
}

/// Parse one side of an SRT time range (`HH:MM:SS,mmm`).
pub fn parse_srt_timestamp(s: &str) -> Result<Duration> {
    let malformed = || ChapterizeError::MalformedTimecode(s.trim().to_string());

    let (clock, millis) = s.trim().split_once(',').ok_or_else(malformed)?;
    let millis: u64 = millis.parse().map_err(|_| malformed())?;

    let mut fields = clock.split(':');
    let hours: u64 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let minutes: u64 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let seconds: u64 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;

    if fields.next().is_some() || minutes > 59 || seconds > 59 || millis > 999 {
        return Err(malformed());
    }

    Ok(Duration::from_secs(hours * 3600 + minutes * 60 + seconds) + Duration::from_millis(millis))
}

/// Scan a description line for a chapter timecode.
///
/// Patterns are attempted in order and the first one that both matches and
/// parses wins: `H:MM:SS` first, then `M:SS` (interpreted as minutes and
/// seconds, hour zero). A line where every pattern fails yields `None`;
/// parse failures never escape the line.
pub fn find_timecode(line: &str) -> Option<TimecodeMatch> {
    if let Some(m) = HMS_PATTERN.find(line) {
        if let Some(position) = parse_hms(m.as_str()) {
            return Some(TimecodeMatch {
                position,
                start: m.start(),
                end: m.end(),
            });
        }
    }

    if let Some(m) = MS_PATTERN.find(line) {
        if let Some(position) = parse_ms(m.as_str()) {
            return Some(TimecodeMatch {
                position,
                start: m.start(),
                end: m.end(),
            });
        }
    }

    None
}

fn parse_hms(s: &str) -> Option<Duration> {
    let mut fields = s.split(':');
    let hours: u64 = fields.next()?.parse().ok()?;
    let minutes: u64 = fields.next()?.parse().ok()?;
    let seconds: u64 = fields.next()?.parse().ok()?;

    // Clock-field bounds: an out-of-range match falls through to the next
    // pattern rather than aborting the line.
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    Some(Duration::from_secs(hours * 3600 + minutes * 60 + seconds))
}

fn parse_ms(s: &str) -> Option<Duration> {
    let mut fields = s.split(':');
    let minutes: u64 = fields.next()?.parse().ok()?;
    let seconds: u64 = fields.next()?.parse().ok()?;

    if minutes > 59 || seconds > 59 {
        return None;
    }

    Some(Duration::from_secs(minutes * 60 + seconds))
}

/// Format a position as `HH:MM:SS` for display keys and headings.
pub fn format_timestamp(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
