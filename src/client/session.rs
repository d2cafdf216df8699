//! WebSocket chat session.
//!
//! One read task keeps the view models in sync with server events and
//! renders each change; one write task sends user input. Input is read
//! on a blocking rustyline thread and handed to the write task over a
//! channel. Events are handled to completion in receipt order; a
//! payload that fails to parse is dropped with a warning and does not
//! affect the session.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{client::IntoClientRequest, http::header, protocol::Message},
};

use crate::{
    auth::SESSION_COOKIE_NAME,
    common::time::now_label,
    error::ClientError,
    protocol::{ClientEvent, ServerEvent},
};

use super::{
    formatter::ViewFormatter,
    ui::redisplay_prompt,
    view::{ChatView, Redraw},
};

/// Run the chat session against the given WebSocket endpoint.
///
/// The session cookie obtained from `/auth` or `/registration` is
/// presented on the handshake; the server authenticates the connection
/// by it and disconnects unauthenticated sockets.
pub async fn run_chat_session(
    endpoint: &str,
    session_cookie: &str,
    login: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = endpoint
        .into_client_request()
        .map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?;
    request.headers_mut().insert(
        header::COOKIE,
        format!("{}={}", SESSION_COOKIE_NAME, session_cookie)
            .parse()
            .map_err(|_| ClientError::InvalidEndpoint("bad session cookie".to_string()))?,
    );

    let (ws_stream, _response) = connect_async(request)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat at {}", endpoint);
    println!(
        "\nType a message and press Enter to send. Type /del <id> to delete one of your messages. Press Ctrl+C to exit.\n"
    );

    let (mut write, mut read) = ws_stream.split();

    // Spawn a task to apply incoming events to the view and render
    let login_for_read = login.to_string();
    let mut read_task = tokio::spawn(async move {
        let mut view = ChatView::new();
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    if let Some(formatted) = handle_server_text(&text, &mut view) {
                        print!("{}", formatted);
                        redisplay_prompt(&login_for_read);
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let login_for_prompt = login.to_string();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", login_for_prompt);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    // Empty lines are sent as-is; the server decides
                    // what to do with empty messages.
                    if !line.is_empty() {
                        rl.add_history_entry(&line).ok();
                    }
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to turn input lines into outbound events
    let login_for_write = login.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let event = parse_input(&line);
            let is_chat = matches!(event, ClientEvent::Chat(_));

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send event: {}", e);
                write_error = true;
                break;
            }

            // The posted message itself comes back as an inbound chat
            // event; only confirm the send here.
            if is_chat {
                print!("\n{}", ViewFormatter::format_sent_confirmation(&now_label()));
                redisplay_prompt(&login_for_write);
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
    }

    Ok(())
}

/// Map one input line to the outbound event it stands for.
///
/// `/del <id>` requests deletion of a message; anything else, the
/// empty line included, is posted verbatim as a chat message.
pub fn parse_input(line: &str) -> ClientEvent {
    if let Some(id) = line.strip_prefix("/del ") {
        let id = id.trim();
        if !id.is_empty() {
            return ClientEvent::RemoveMsg(id.to_string());
        }
    }
    ClientEvent::Chat(line.to_string())
}

/// Apply one raw text frame to the view and render the affected view.
///
/// Returns `None` when nothing visible changed or when the frame did
/// not parse as a known event (logged and dropped; the failure is
/// isolated to this one frame).
pub fn handle_server_text(text: &str, view: &mut ChatView) -> Option<String> {
    let event: ServerEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Discarding unparseable event: {} ({})", e, text);
            return None;
        }
    };

    render(view.apply(event), view)
}

/// Turn a reducer outcome into the text to print for it.
fn render(redraw: Redraw, view: &ChatView) -> Option<String> {
    match redraw {
        Redraw::Greeting => view.current_user().map(ViewFormatter::format_greeting),
        Redraw::OnlineUsers => Some(ViewFormatter::format_online_users(
            view.users(),
            view.current_user(),
        )),
        Redraw::TopUsers => Some(ViewFormatter::format_top_users(view.top_users())),
        Redraw::MessagesAppended(rows) => {
            let mut output = String::from("\n");
            for row in &rows {
                output.push_str(&ViewFormatter::format_message_row(row, view.current_user()));
            }
            Some(output)
        }
        Redraw::MessageRemoved(id) => Some(ViewFormatter::format_message_removed(&id)),
        Redraw::Nothing => None,
    }
}
