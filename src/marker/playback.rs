//! Playback-driven marker advance
//!
//! The player reports its position many times per second. The marker
//! follows it forward only, so a word once passed is never revisited by
//! the scan even if it is still selected for editing.

use super::MarkerTracker;
use crate::grid::WordGrid;
use crate::models::{Marker, Nanos, NANOS_PER_SECOND};

/// Convert a player position in seconds to grid time
pub fn seconds_to_nanos(seconds: f64) -> Nanos {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * NANOS_PER_SECOND).round() as Nanos
    } else {
        0
    }
}

pub fn nanos_to_seconds(nanos: Nanos) -> f64 {
    nanos as f64 / NANOS_PER_SECOND
}

impl MarkerTracker {
    /// Move the marker to the word being spoken at `current_time`
    ///
    /// Returns the new marker when it moved.
    pub fn advance_to_next_word(&mut self, grid: &WordGrid, current_time: Nanos) -> Option<Marker> {
        let (mut paragraph_index, mut word_index) = match self.marker() {
            Some(marker) => {
                let current = grid.word_at(marker.paragraph_index, marker.word_index_start)?;
                if current_time < current.end_time {
                    return None;
                }
                (marker.paragraph_index, marker.word_index_start + 1)
            }
            None => (0, 0),
        };

        while paragraph_index < grid.paragraph_count() {
            while let Some(word) = grid.word_at(paragraph_index, word_index) {
                if current_time < word.start_time {
                    // Not spoken yet; wait for the next update
                    return None;
                }
                if word.contains_time(current_time) {
                    let marker = Marker::word(paragraph_index, word_index);
                    self.marker = Some(marker);
                    return Some(marker);
                }
                word_index += 1;
            }
            paragraph_index += 1;
            word_index = 0;
        }

        None
    }
}
