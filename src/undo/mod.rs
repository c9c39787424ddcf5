use crate::models::{Marker, Transcript};
use std::collections::VecDeque;

/// A transcript revision together with the selection it was edited under
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub transcript: Transcript,
    pub marker: Option<Marker>,
}

impl HistoryEntry {
    pub fn new(transcript: Transcript, marker: Option<Marker>) -> Self {
        Self { transcript, marker }
    }
}

/// Linear undo/redo history over whole revisions
///
/// The present state lives with the caller; `undo` and `redo` exchange it
/// with the top of the opposite stack.
#[derive(Clone, Debug)]
pub struct HistoryManager {
    /// Entries that can be undone, oldest first
    past: VecDeque<HistoryEntry>,
    /// Entries that can be redone, most recently undone last
    future: Vec<HistoryEntry>,
    /// Maximum number of entries to keep in `past`
    max_size: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(100)
    }
}

impl HistoryManager {
    /// Create a history keeping at most `max_size` undo steps
    pub fn new(max_size: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record the state a committed mutation is about to replace
    pub fn push(&mut self, previous: HistoryEntry) {
        // A new mutation invalidates the redo branch
        self.future.clear();
        self.past.push_back(previous);

        if self.past.len() > self.max_size {
            self.past.pop_front();
        }
    }

    /// Step back; returns the state to restore
    pub fn undo(&mut self, present: HistoryEntry) -> Option<HistoryEntry> {
        let previous = self.past.pop_back()?;
        self.future.push(present);
        Some(previous)
    }

    /// Step forward again; returns the state to restore
    pub fn redo(&mut self, present: HistoryEntry) -> Option<HistoryEntry> {
        let next = self.future.pop()?;
        self.past.push_back(present);
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}
