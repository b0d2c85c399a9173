//! The alignment engine: merges an ordered chapter list and an ordered cue
//! list into chapter-keyed groups of cues.
//!
//! The merge is a two-pointer walk, O(M+N). A cue is attributed to the
//! chapter whose declared start is the latest one not past the cue's own
//! start, taken as the chapter *behind* the chapter cursor (clamped to the
//! first chapter before any boundary has been crossed).

use crate::chapter::ChapterMarker;
use crate::subtitle::Cue;
use crate::timecode::format_timestamp;
use std::time::Duration;

/// Composite grouping key with value equality, one per chapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChapterKey {
    pub position: Duration,
    pub name: String,
}

impl ChapterKey {
    fn from_marker(marker: &ChapterMarker) -> Self {
        Self {
            position: marker.position,
            name: marker.name.clone(),
        }
    }

    /// `"HH:MM:SS <name>"`, the display form used for JSON keys.
    pub fn display(&self) -> String {
        format!("{} {}", format_timestamp(self.position), self.name)
    }
}

/// What to do with cues that start after the last chapter marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingCues {
    /// Historical behavior: the merge stops and trailing cues are lost.
    #[default]
    Drop,
    /// Append trailing cues to the final chapter's group.
    AttachToLast,
}

/// Where cues that start before the first chapter marker belong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preamble {
    /// Historical behavior: the clamp attributes them to the first chapter.
    #[default]
    FirstChapter,
    /// Collect them under a synthetic marker at 00:00:00 with this name.
    Synthetic(String),
}

/// Boundary policy for the merge. The defaults reproduce the historical
/// behavior exactly; the alternatives exist because both boundaries are
/// questionable enough that callers should get to choose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignPolicy {
    pub trailing: TrailingCues,
    pub preamble: Preamble,
}

/// Chapter-keyed cue groups in first-attribution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedTranscript {
    groups: Vec<(ChapterKey, Vec<Cue>)>,
}

impl AlignedTranscript {
    fn push(&mut self, key: ChapterKey, cue: Cue) {
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, cues)) => cues.push(cue),
            None => self.groups.push((key, vec![cue])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, key: &ChapterKey) -> Option<&[Cue]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, cues)| cues.as_slice())
    }

    /// Groups in insertion order (order of first attribution).
    pub fn iter(&self) -> impl Iterator<Item = (&ChapterKey, &[Cue])> {
        self.groups.iter().map(|(k, cues)| (k, cues.as_slice()))
    }
}

/// Merge chapters and cues into an [`AlignedTranscript`].
///
/// With no chapters or no cues the result is empty; there is deliberately
/// no default bucket. Identical `(position, name)` pairs accumulate under
/// one key.
pub fn align(chapters: &[ChapterMarker], cues: &[Cue], policy: &AlignPolicy) -> AlignedTranscript {
    let mut result = AlignedTranscript::default();

    let synthetic_key = match &policy.preamble {
        Preamble::FirstChapter => None,
        Preamble::Synthetic(name) => Some(ChapterKey {
            position: Duration::ZERO,
            name: name.clone(),
        }),
    };

    let mut ts_id = 0;
    let mut cap_id = 0;

    while ts_id < chapters.len() && cap_id < cues.len() {
        let prev_ts_id = ts_id.saturating_sub(1);
        let cue = &cues[cap_id];

        if chapters[ts_id].position > cue.start {
            // The chapter cursor has moved past this cue; the chapter behind
            // the cursor owns it.
            // Before any boundary has been crossed (ts_id still 0) the cue
            // starts ahead of the first chapter, which is where the synthetic
            // preamble bucket applies.
            let key = match (&synthetic_key, ts_id) {
                (Some(synthetic), 0) => synthetic.clone(),
                _ => ChapterKey::from_marker(&chapters[prev_ts_id]),
            };
            result.push(key, cue.clone());
            cap_id += 1;
        } else {
            ts_id += 1;
        }
    }

    if policy.trailing == TrailingCues::AttachToLast {
        if let Some(last) = chapters.last() {
            let key = ChapterKey::from_marker(last);
            for cue in &cues[cap_id..] {
                result.push(key.clone(), cue.clone());
            }
        }
    }

    result
}
