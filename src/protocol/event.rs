//! Typed event union for the chat WebSocket protocol.

use serde::{Deserialize, Serialize};

use super::MessageRecord;

/// Events pushed by the server to the client.
///
/// Each variant corresponds to one named event; the view keeps one
/// reducer per variant (see `client::view`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Login of the user this session was authenticated as.
    LoginInfo(String),
    /// Message history, in server send order.
    Messages(Vec<MessageRecord>),
    /// A single newly posted message (including echoes of our own).
    Chat(MessageRecord),
    /// Top-users board, rank implied by position (1-based).
    TopList(Vec<String>),
    /// A user came online.
    Enter(String),
    /// A user went offline.
    Exit(String),
    /// Full replacement of the online-user list.
    Users(Vec<String>),
    /// A message was deleted, identified by its id.
    RemoveMsg(String),
}

/// Events the client sends to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Post a chat message (raw input text, no client-side validation).
    Chat(String),
    /// Request deletion of a message by id.
    RemoveMsg(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_event_chat_deserializes_with_record_payload() {
        // テスト項目: chat イベントがレコードペイロード付きでパースされる
        // given (前提条件):
        let json = r#"{"event":"chat","data":["42","hi","alice","10:00:00"]}"#;

        // when (操作):
        let event: ServerEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        let ServerEvent::Chat(record) = event else {
            panic!("expected chat event, got {event:?}");
        };
        assert_eq!(record.id, "42");
        assert_eq!(record.author, "alice");
    }

    #[test]
    fn test_server_event_names_are_snake_case() {
        // テスト項目: 複合語イベント名が snake_case でパースされる
        // given (前提条件):
        let login = r#"{"event":"login_info","data":"alice"}"#;
        let top = r#"{"event":"top_list","data":["alice","bob"]}"#;
        let removed = r#"{"event":"remove_msg","data":"42"}"#;

        // when (操作):
        let login: ServerEvent = serde_json::from_str(login).unwrap();
        let top: ServerEvent = serde_json::from_str(top).unwrap();
        let removed: ServerEvent = serde_json::from_str(removed).unwrap();

        // then (期待する結果):
        assert_eq!(login, ServerEvent::LoginInfo("alice".to_string()));
        assert_eq!(
            top,
            ServerEvent::TopList(vec!["alice".to_string(), "bob".to_string()])
        );
        assert_eq!(removed, ServerEvent::RemoveMsg("42".to_string()));
    }

    #[test]
    fn test_client_event_chat_serializes_to_named_frame() {
        // テスト項目: 送信イベントが {"event", "data"} フレームになる
        // given (前提条件):
        let event = ClientEvent::Chat("hello".to_string());

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"event":"chat","data":"hello"}"#);
    }

    #[test]
    fn test_unknown_event_name_fails_to_parse() {
        // テスト項目: 未知のイベント名はエラーになる(ハンドラ単位で破棄される)
        // given (前提条件):
        let json = r#"{"event":"typing","data":"alice"}"#;

        // when (操作):
        let result = serde_json::from_str::<ServerEvent>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
