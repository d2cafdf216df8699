//! Message record and its wire representation.

use serde::{Deserialize, Serialize};

/// A single chat message as pushed by the server.
///
/// On the wire a record is a positional JSON array
/// `[id, text, author, time_label]`; the fields are opaque to the
/// client (no schema beyond the array positions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordTuple", into = "RecordTuple")]
pub struct MessageRecord {
    /// Server-assigned message identifier.
    pub id: String,
    /// Message body.
    pub text: String,
    /// Login of the author.
    pub author: String,
    /// Pre-formatted `HH:MM:SS` label stamped by the server.
    pub time_label: String,
}

type RecordTuple = (String, String, String, String);

impl From<RecordTuple> for MessageRecord {
    fn from((id, text, author, time_label): RecordTuple) -> Self {
        Self {
            id,
            text,
            author,
            time_label,
        }
    }
}

impl From<MessageRecord> for RecordTuple {
    fn from(record: MessageRecord) -> Self {
        (record.id, record.text, record.author, record.time_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_from_positional_array() {
        // テスト項目: ワイヤ上の位置配列がフィールドに正しく対応付けられる
        // given (前提条件):
        let json = r#"["42", "hi there", "alice", "10:00:00"]"#;

        // when (操作):
        let record: MessageRecord = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(record.id, "42");
        assert_eq!(record.text, "hi there");
        assert_eq!(record.author, "alice");
        assert_eq!(record.time_label, "10:00:00");
    }

    #[test]
    fn test_record_serializes_to_positional_array() {
        // テスト項目: レコードが位置配列としてシリアライズされる
        // given (前提条件):
        let record = MessageRecord {
            id: "7".to_string(),
            text: "hello".to_string(),
            author: "bob".to_string(),
            time_label: "12:34:56".to_string(),
        };

        // when (操作):
        let json = serde_json::to_string(&record).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"["7","hello","bob","12:34:56"]"#);
    }
}
