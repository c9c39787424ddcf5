//! Revision diffing
//!
//! Compares two transcript revisions and produces the minimal set of store
//! writes turning the first into the second.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{EditorError, Result};
use crate::models::{Paragraph, Transcript};

/// Kind of write in a batch
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Create,
    Update,
    Delete,
}

/// One document write
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchOp {
    pub kind: OpKind,
    pub collection_path: String,
    pub id: String,
    /// Document fields; `null` for deletes
    pub value: Value,
}

impl BatchOp {
    pub fn create(collection_path: &str, id: &str, value: Value) -> Self {
        Self::new(OpKind::Create, collection_path, id, value)
    }

    pub fn update(collection_path: &str, id: &str, value: Value) -> Self {
        Self::new(OpKind::Update, collection_path, id, value)
    }

    pub fn delete(collection_path: &str, id: &str) -> Self {
        Self::new(OpKind::Delete, collection_path, id, Value::Null)
    }

    fn new(kind: OpKind, collection_path: &str, id: &str, value: Value) -> Self {
        Self {
            kind,
            collection_path: collection_path.to_string(),
            id: id.to_string(),
            value,
        }
    }
}

/// Collection holding a transcript's paragraph documents
pub fn paragraphs_path(root: &str, transcript_id: &str) -> String {
    format!("{}/{}/paragraphs", root, transcript_id)
}

/// Writes turning `previous` into `current`
///
/// Transcript-level fields come first, then paragraph updates, creates and
/// deletes. Paragraphs are matched by id and compared by value.
pub fn diff(previous: &Transcript, current: &Transcript, root: &str) -> Result<Vec<BatchOp>> {
    let mut ops = Vec::new();

    if previous.speaker_names != current.speaker_names {
        ops.push(BatchOp::update(
            root,
            &current.id,
            json!({ "speakerNames": to_value(&current.speaker_names)? }),
        ));
    }

    if previous.metadata.start_time != current.metadata.start_time {
        ops.push(BatchOp::update(
            root,
            &current.id,
            json!({ "metadata.startTime": current.metadata.start_time }),
        ));
    }

    let path = paragraphs_path(root, &current.id);
    let before = previous.grid().paragraphs();
    let after = current.grid().paragraphs();
    let find = |paragraphs: &[Paragraph], id: &str| -> Option<usize> {
        paragraphs.iter().position(|p| p.id == id)
    };

    let mut creates = Vec::new();
    for paragraph in after {
        match find(before, &paragraph.id) {
            Some(index) if before[index] == *paragraph => {}
            Some(_) => ops.push(BatchOp::update(&path, &paragraph.id, to_value(paragraph)?)),
            None => creates.push(BatchOp::create(&path, &paragraph.id, to_value(paragraph)?)),
        }
    }
    ops.extend(creates);

    for paragraph in before {
        if find(after, &paragraph.id).is_none() {
            ops.push(BatchOp::delete(&path, &paragraph.id));
        }
    }

    Ok(ops)
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| EditorError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Word;

    fn transcript() -> Transcript {
        Transcript::new(
            "t1",
            vec![
                Paragraph::new("p1", vec![Word::new("hello", 0, 10), Word::new("world", 10, 20)]),
                Paragraph::new("p2", vec![Word::new("again", 30, 40)]),
            ],
        )
    }

    fn kinds(ops: &[BatchOp]) -> Vec<(OpKind, &str)> {
        ops.iter().map(|op| (op.kind, op.id.as_str())).collect()
    }

    #[test]
    fn test_diff_against_itself_is_empty() {
        let t = transcript();
        assert!(diff(&t, &t, "transcripts").unwrap().is_empty());
    }

    #[test]
    fn test_word_change_updates_paragraph() {
        let before = transcript();
        let grid = before.grid().replace_words(0, 1, 1, &["world."]).unwrap();
        let after = before.with_grid(grid);

        let ops = diff(&before, &after, "transcripts").unwrap();
        assert_eq!(kinds(&ops), vec![(OpKind::Update, "p1")]);
        assert_eq!(ops[0].collection_path, "transcripts/t1/paragraphs");
        assert_eq!(ops[0].value["words"][1]["text"], "world.");
    }

    #[test]
    fn test_split_creates_and_join_deletes() {
        let before = transcript();
        let split = before.with_grid(before.grid().split_paragraph(0, 1).unwrap());
        let new_id = split.grid().paragraphs()[1].id.clone();

        let ops = diff(&before, &split, "transcripts").unwrap();
        assert_eq!(kinds(&ops), vec![(OpKind::Update, "p1"), (OpKind::Create, new_id.as_str())]);

        let joined = split.with_grid(split.grid().join_paragraphs(1, 0).unwrap());
        let ops = diff(&split, &joined, "transcripts").unwrap();
        assert_eq!(kinds(&ops), vec![(OpKind::Update, "p1"), (OpKind::Delete, new_id.as_str())]);
        assert_eq!(ops[1].value, Value::Null);
    }

    #[test]
    fn test_transcript_fields() {
        let before = transcript();
        let after = before.with_speaker_name(1, "Ada").with_start_time(5_000_000_000);

        let ops = diff(&before, &after, "transcripts").unwrap();
        assert_eq!(kinds(&ops), vec![(OpKind::Update, "t1"), (OpKind::Update, "t1")]);
        assert_eq!(ops[0].collection_path, "transcripts");
        assert_eq!(ops[0].value, json!({ "speakerNames": { "1": "Ada" } }));
        assert_eq!(ops[1].value, json!({ "metadata.startTime": 5_000_000_000u64 }));
    }

    #[test]
    fn test_op_json_shape() {
        let op = BatchOp::delete("transcripts/t1/paragraphs", "p9");
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["kind"], "delete");
        assert_eq!(json["collectionPath"], "transcripts/t1/paragraphs");
    }
}
