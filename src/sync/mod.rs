//! Persistence through diff-based batches
//!
//! - `diff`: create/update/delete writes between two revisions
//! - `engine`: baseline tracking and the single in-flight batch

pub mod diff;
pub mod engine;

pub use diff::{diff, paragraphs_path, BatchOp, OpKind};
pub use engine::{SyncEngine, WriteBatch};
