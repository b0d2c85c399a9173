// JSON display projection
use crate::align::AlignedTranscript;
use crate::error::Result;
use serde_json::{Map, Value};

/// Project an aligned transcript into a flat display mapping:
/// `"HH:MM:SS <chapter name>"` to the group's joined caption text.
///
/// Cue texts are joined with single spaces and any doubled space collapsed
/// in one pass. The pass is deliberately not iterative, so a run of three
/// spaces leaves a double behind.
pub fn display_map(transcript: &AlignedTranscript) -> Map<String, Value> {
    let mut map = Map::new();

    for (key, cues) in transcript.iter() {
        let joined = cues
            .iter()
            .map(|cue| cue.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .replace("  ", " ");
        map.insert(key.display(), Value::String(joined));
    }

    map
}

/// Pretty-printed JSON of the display projection.
pub fn to_json_string(transcript: &AlignedTranscript) -> Result<String> {
    Ok(serde_json::to_string_pretty(&display_map(transcript))?)
}
