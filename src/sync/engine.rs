//! Batch lifecycle against the document store
//!
//! At most one batch is in flight. Edits made meanwhile are picked up by the
//! next `prepare`, which always diffs against the last confirmed revision.

use serde::{Deserialize, Serialize};

use super::diff::{diff, BatchOp};
use crate::error::{EditorError, Result};
use crate::models::Transcript;

/// An atomic group of writes handed to the host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WriteBatch {
    pub id: u64,
    pub ops: Vec<BatchOp>,
}

#[derive(Clone, Debug)]
struct InFlight {
    id: u64,
    target: Transcript,
}

#[derive(Clone, Debug)]
pub struct SyncEngine {
    collection_root: String,
    /// Last revision the store confirmed
    baseline: Option<Transcript>,
    in_flight: Option<InFlight>,
    next_id: u64,
    /// A prepare was refused while a batch was in flight
    dirty: bool,
}

impl SyncEngine {
    pub fn new(collection_root: impl Into<String>) -> Self {
        Self {
            collection_root: collection_root.into(),
            baseline: None,
            in_flight: None,
            next_id: 1,
            dirty: false,
        }
    }

    /// Start over from a freshly loaded transcript
    ///
    /// A batch still in flight for the previous transcript is forgotten; its
    /// completion will be ignored.
    pub fn rebase(&mut self, transcript: &Transcript) {
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Abandoning in-flight batch {}", in_flight.id);
        }
        self.baseline = Some(transcript.clone());
        self.dirty = false;
    }

    pub fn baseline(&self) -> Option<&Transcript> {
        self.baseline.as_ref()
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Next batch to commit, if there is anything to write
    pub fn prepare(&mut self, current: &Transcript) -> Result<Option<WriteBatch>> {
        let Some(baseline) = &self.baseline else {
            return Ok(None);
        };

        if let Some(in_flight) = &self.in_flight {
            self.dirty = in_flight.target != *current;
            return Ok(None);
        }

        let ops = diff(baseline, current, &self.collection_root)?;
        self.dirty = false;
        if ops.is_empty() {
            return Ok(None);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight = Some(InFlight {
            id,
            target: current.clone(),
        });

        log::debug!("Prepared batch {} with {} ops", id, ops.len());
        Ok(Some(WriteBatch { id, ops }))
    }

    /// Record the store's answer for batch `id`
    ///
    /// Returns `Ok(false)` for batches this engine no longer tracks. A
    /// rejected batch leaves the baseline untouched so the next `prepare`
    /// re-sends its changes.
    pub fn complete(&mut self, id: u64, outcome: std::result::Result<(), String>) -> Result<bool> {
        match self.in_flight.take() {
            Some(in_flight) if in_flight.id == id => match outcome {
                Ok(()) => {
                    self.baseline = Some(in_flight.target);
                    Ok(true)
                }
                Err(message) => {
                    self.dirty = true;
                    Err(EditorError::PersistenceFailure(message))
                }
            },
            other => {
                self.in_flight = other;
                log::debug!("Ignoring completion of unknown batch {}", id);
                Ok(false)
            }
        }
    }
}
