//! Chapter marker extraction from free-text video descriptions.

use crate::timecode::find_timecode;
use std::time::Duration;

/// A named point in time declared in the description, denoting the start of
/// a section. Markers carry no end time; a chapter's span runs until the
/// next marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterMarker {
    pub position: Duration,
    pub name: String,
}

/// Scan description text for chapter markers, one line at a time.
///
/// A line yields at most one marker. Lines without a parseable timecode are
/// skipped silently; a bad line never aborts the scan. Marker order is order
/// of appearance, never re-sorted (descriptions are assumed non-decreasing
/// in time).
pub fn scan_description(description: &str) -> Vec<ChapterMarker> {
    description
        .split('\n')
        .filter_map(marker_from_line)
        .collect()
}

fn marker_from_line(line: &str) -> Option<ChapterMarker> {
    let tc = find_timecode(line)?;
    let matched = &line[tc.start..tc.end];

    let name = line
        .replace(matched, "")
        .trim_end_matches([' ', ':', '\n'])
        .trim_start()
        .to_string();

    Some(ChapterMarker {
        position: tc.position,
        name,
    })
}
