//! Marker tracking
//!
//! Owns the active selection and the direction flag deciding which edge of
//! a range shift-navigation moves. Every operation reads the grid revision
//! it is given and never leaves the marker pointing outside it.

pub mod playback;

use crate::error::Result;
use crate::grid::WordGrid;
use crate::models::Marker;

/// Selection state for one editing session
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerTracker {
    marker: Option<Marker>,
    /// True when the end index is the growing edge
    selecting_forward: bool,
}

impl Default for MarkerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerTracker {
    pub fn new() -> Self {
        Self {
            marker: None,
            selecting_forward: true,
        }
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn selecting_forward(&self) -> bool {
        self.selecting_forward
    }

    pub fn clear(&mut self) {
        self.marker = None;
        self.selecting_forward = true;
    }

    /// Select `start..=end` in paragraph `paragraph_index`
    pub fn set_marker(
        &mut self,
        grid: &WordGrid,
        paragraph_index: usize,
        start: usize,
        end: usize,
    ) -> Result<Marker> {
        grid.check_range(paragraph_index, start, end)?;
        let marker = Marker::new(paragraph_index, start, end);
        self.marker = Some(marker);
        Ok(marker)
    }

    /// Put back a marker taken from history, clamped to `grid`
    pub fn restore(&mut self, grid: &WordGrid, marker: Option<Marker>) {
        self.marker = marker;
        self.clamp(grid);
    }

    /// Seed the marker at the first word when nothing is selected yet
    ///
    /// Returns true when a marker was created.
    pub fn bootstrap(&mut self, grid: &WordGrid) -> bool {
        if self.marker.is_some() || grid.word_count(0) == 0 {
            return false;
        }
        self.marker = Some(Marker::origin());
        self.selecting_forward = true;
        true
    }

    /// Shift+Left: shrink a forward range, or grow backward
    pub fn extend_left(&mut self) -> bool {
        let Some(mut marker) = self.marker else {
            return false;
        };

        if self.selecting_forward && marker.word_index_start < marker.word_index_end {
            marker.word_index_end -= 1;
        } else if marker.word_index_start > 0 {
            marker.word_index_start -= 1;
            self.selecting_forward = false;
        } else {
            return false;
        }

        self.marker = Some(marker);
        true
    }

    /// Shift+Right: shrink a backward range, or grow forward
    pub fn extend_right(&mut self, grid: &WordGrid) -> bool {
        let Some(mut marker) = self.marker else {
            return false;
        };

        if !self.selecting_forward && marker.word_index_start < marker.word_index_end {
            marker.word_index_start += 1;
        } else if marker.word_index_end + 1 < grid.word_count(marker.paragraph_index) {
            marker.word_index_end += 1;
            self.selecting_forward = true;
        } else {
            return false;
        }

        self.marker = Some(marker);
        true
    }

    /// Select the word before the range, crossing into the previous paragraph
    pub fn move_left(&mut self, grid: &WordGrid) -> Option<Marker> {
        let marker = self.marker?;
        let target = if marker.word_index_start > 0 {
            Marker::word(marker.paragraph_index, marker.word_index_start - 1)
        } else if marker.paragraph_index > 0 {
            let previous = marker.paragraph_index - 1;
            Marker::word(previous, grid.word_count(previous).checked_sub(1)?)
        } else {
            return None;
        };
        self.select(target)
    }

    /// Select the word after the range, crossing into the next paragraph
    pub fn move_right(&mut self, grid: &WordGrid) -> Option<Marker> {
        let marker = self.marker?;
        let next_word = marker.word_index_end + 1;
        let target = if next_word < grid.word_count(marker.paragraph_index) {
            Marker::word(marker.paragraph_index, next_word)
        } else if marker.paragraph_index + 1 < grid.paragraph_count() {
            Marker::word(marker.paragraph_index + 1, 0)
        } else {
            return None;
        };
        self.select(target)
    }

    /// First word of this paragraph, or of the previous one when already there
    pub fn move_up(&mut self) -> Option<Marker> {
        let marker = self.marker?;
        let target = if marker.word_index_start > 0 {
            Marker::word(marker.paragraph_index, 0)
        } else if marker.paragraph_index > 0 {
            Marker::word(marker.paragraph_index - 1, 0)
        } else {
            return None;
        };
        self.select(target)
    }

    /// First word of the next paragraph, or last word of the last paragraph
    pub fn move_down(&mut self, grid: &WordGrid) -> Option<Marker> {
        let marker = self.marker?;
        let target = if marker.paragraph_index + 1 < grid.paragraph_count() {
            Marker::word(marker.paragraph_index + 1, 0)
        } else {
            let last = grid.word_count(marker.paragraph_index).checked_sub(1)?;
            Marker::word(marker.paragraph_index, last)
        };
        self.select(target)
    }

    /// Pull the marker back inside `grid` after a revision change
    pub fn clamp(&mut self, grid: &WordGrid) {
        let Some(marker) = self.marker else {
            return;
        };

        let paragraph_count = grid.paragraph_count();
        if paragraph_count == 0 {
            self.marker = None;
            return;
        }

        let paragraph_index = marker.paragraph_index.min(paragraph_count - 1);
        let word_count = grid.word_count(paragraph_index);
        if word_count == 0 {
            self.marker = None;
            return;
        }

        let end = marker.word_index_end.min(word_count - 1);
        let start = marker.word_index_start.min(end);
        let clamped = Marker::new(paragraph_index, start, end);
        if clamped != marker {
            log::debug!("Marker clamped from {:?} to {:?}", marker, clamped);
        }
        self.marker = Some(clamped);
    }

    fn select(&mut self, target: Marker) -> Option<Marker> {
        self.marker = Some(target);
        Some(target)
    }
}
