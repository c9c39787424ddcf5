//! Models module for the transcript editor
//!
//! This module contains the data models shared by every layer:
//! transcripts, paragraphs, words and the selection marker.

pub mod core;
pub mod marker;
pub mod serde_helpers;

// Re-export commonly used types
pub use core::*;
pub use marker::Marker;
