//! Seek path (solution) model.
//!
//! A seek path is the ordered sequence of tracks the head visits, starting
//! at its initial position, together with the accumulated head movement.
//! The rendering side steps through the path one track at a time; the seek
//! count is the single scalar used to compare policies.

use serde::{Deserialize, Serialize};

use super::Track;

/// An ordered head visitation sequence with its total movement cost.
///
/// Invariant: `seek_count` is always the sum of the absolute differences
/// of consecutive tracks. [`SeekPath::push`] maintains it; the cost is
/// never computed independently of the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekPath {
    /// Visited tracks in service order. The first element is the head's
    /// starting position; boundary tracks visited by SCAN/C-SCAN appear
    /// here even though they were never requested.
    pub tracks: Vec<Track>,
    /// Total head movement in track units.
    pub seek_count: u64,
}

impl SeekPath {
    /// Creates a path holding only the head's starting position.
    pub fn starting_at(start: Track) -> Self {
        Self {
            tracks: vec![start],
            seek_count: 0,
        }
    }

    /// Appends the next visited track, charging the seek from the current
    /// end of the path. Pushing onto an empty path sets the starting
    /// position and charges nothing.
    pub fn push(&mut self, track: Track) {
        if let Some(&last) = self.tracks.last() {
            self.seek_count += last.abs_diff(track);
        }
        self.tracks.push(track);
    }

    /// The head's starting position, if the path is non-empty.
    pub fn start(&self) -> Option<Track> {
        self.tracks.first().copied()
    }

    /// The head's resting position after the last seek.
    pub fn end(&self) -> Option<Track> {
        self.tracks.last().copied()
    }

    /// Number of visited tracks, including the starting position.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the path holds no tracks at all.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterates over the individual head movements in order.
    pub fn steps(&self) -> impl Iterator<Item = SeekStep> + '_ {
        self.tracks
            .windows(2)
            .map(|pair| SeekStep {
                from: pair[0],
                to: pair[1],
            })
    }

    /// Recomputes the total movement from consecutive track pairs.
    ///
    /// Always equal to `seek_count` for paths built through [`push`];
    /// exists so that callers (and tests) can check the invariant.
    ///
    /// [`push`]: SeekPath::push
    pub fn total_distance(&self) -> u64 {
        self.steps().map(|s| s.distance()).sum()
    }
}

/// One head movement between two consecutive tracks on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekStep {
    /// Track the head moves from.
    pub from: Track,
    /// Track the head moves to.
    pub to: Track,
}

impl SeekStep {
    /// Distance covered by this movement, in track units.
    pub fn distance(&self) -> u64 {
        self.from.abs_diff(self.to)
    }
}
