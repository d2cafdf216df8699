//! End-to-end view synchronization tests: raw JSON frames in, rendered
//! text out, the way the session's read task drives the view.

use chat_client_rs::client::{ChatView, DELETED_PLACEHOLDER, handle_server_text, parse_input};
use chat_client_rs::protocol::ClientEvent;

fn frame(event: &str, data: serde_json::Value) -> String {
    serde_json::json!({"event": event, "data": data}).to_string()
}

#[test]
fn online_list_mirrors_any_enter_exit_sequence() {
    let mut view = ChatView::new();

    // alice enters twice, bob enters, alice leaves
    let _ = handle_server_text(&frame("enter", "alice".into()), &mut view);
    let _ = handle_server_text(&frame("enter", "alice".into()), &mut view);
    let _ = handle_server_text(&frame("enter", "bob".into()), &mut view);
    let output = handle_server_text(&frame("exit", "alice".into()), &mut view)
        .expect("exit should re-render the online list");

    assert_eq!(view.users(), ["bob".to_string()]);
    assert!(output.contains("* bob"));
    assert!(!output.contains("alice"));
}

#[test]
fn users_frame_replaces_list_regardless_of_history() {
    let mut view = ChatView::new();

    let _ = handle_server_text(&frame("enter", "alice".into()), &mut view);
    let _ = handle_server_text(&frame("exit", "alice".into()), &mut view);
    let output = handle_server_text(
        &frame("users", serde_json::json!(["carol", "dave"])),
        &mut view,
    )
    .expect("users should re-render the online list");

    assert_eq!(view.users(), ["carol".to_string(), "dave".to_string()]);
    assert!(output.contains("* carol"));
    assert!(output.contains("* dave"));
}

#[test]
fn top_list_renders_one_indexed_ranks() {
    let mut view = ChatView::new();

    let output = handle_server_text(
        &frame("top_list", serde_json::json!(["alice", "bob"])),
        &mut view,
    )
    .expect("top_list should render the board");

    assert!(output.contains("1. alice"));
    assert!(output.contains("2. bob"));
}

#[test]
fn delete_affordance_follows_session_identity() {
    let mut view = ChatView::new();
    let _ = handle_server_text(&frame("login_info", "alice".into()), &mut view);

    let own = handle_server_text(
        &frame("chat", serde_json::json!(["42", "hi", "alice", "10:00"])),
        &mut view,
    )
    .expect("own message should render");
    let foreign = handle_server_text(
        &frame("chat", serde_json::json!(["43", "hey", "bob", "10:01"])),
        &mut view,
    )
    .expect("foreign message should render");

    assert!(own.contains("[10:00] alice: hi"));
    assert!(own.contains("/del 42"));
    assert!(foreign.contains("[10:01] bob: hey"));
    assert!(!foreign.contains("/del"));
}

#[test]
fn remove_msg_replaces_one_row_and_leaves_the_rest() {
    let mut view = ChatView::new();
    let _ = handle_server_text(&frame("login_info", "alice".into()), &mut view);
    let _ = handle_server_text(
        &frame(
            "messages",
            serde_json::json!([
                ["42", "hi", "alice", "10:00"],
                ["43", "hey", "bob", "10:01"]
            ]),
        ),
        &mut view,
    );

    let output = handle_server_text(&frame("remove_msg", "42".into()), &mut view)
        .expect("remove_msg should render a notice");

    assert!(output.contains("42"));
    assert!(view.messages()[0].deleted);
    assert!(!view.messages()[1].deleted);

    // A re-render of the deleted row shows the placeholder, the
    // untouched row is unchanged.
    use chat_client_rs::client::ViewFormatter;
    let deleted = ViewFormatter::format_message_row(&view.messages()[0], view.current_user());
    let untouched = ViewFormatter::format_message_row(&view.messages()[1], view.current_user());
    assert!(deleted.contains(DELETED_PLACEHOLDER));
    assert!(!deleted.contains("hi"));
    assert!(untouched.contains("[10:01] bob: hey"));
}

#[test]
fn submitting_text_emits_one_chat_event_and_no_local_append() {
    let mut view = ChatView::new();
    let _ = handle_server_text(&frame("login_info", "alice".into()), &mut view);

    // Outbound: exactly one chat event with the raw text as payload.
    let event = parse_input("hello");
    assert_eq!(event, ClientEvent::Chat("hello".to_string()));
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        r#"{"event":"chat","data":"hello"}"#
    );

    // The message list grows only when the event comes back in.
    assert!(view.messages().is_empty());
    let _ = handle_server_text(
        &frame("chat", serde_json::json!(["1", "hello", "alice", "10:00"])),
        &mut view,
    );
    assert_eq!(view.messages().len(), 1);
}

#[test]
fn burst_of_history_renders_rows_in_payload_order() {
    let mut view = ChatView::new();

    let output = handle_server_text(
        &frame(
            "messages",
            serde_json::json!([
                ["1", "first", "alice", "10:00:00"],
                ["2", "second", "bob", "10:00:01"],
                ["3", "third", "alice", "10:00:02"]
            ]),
        ),
        &mut view,
    )
    .expect("history should render");

    let first = output.find("first").unwrap();
    let second = output.find("second").unwrap();
    let third = output.find("third").unwrap();
    assert!(first < second && second < third);
    assert_eq!(view.messages().len(), 3);
}
