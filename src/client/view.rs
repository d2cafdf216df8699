//! View models for the chat session and their reducers.
//!
//! One pure reducer per inbound event type, each a total function from
//! (current model, payload) to (new model, redraw outcome). Keeping
//! the reducers free of I/O makes them testable without a live
//! connection; the session layer turns each [`Redraw`] into output.

use crate::protocol::{MessageRecord, ServerEvent};

/// One rendered message row: the record plus its deletion state.
///
/// Deletion preserves the row (the projection stays append-only); only
/// its rendering switches to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub record: MessageRecord,
    pub deleted: bool,
}

impl MessageRow {
    fn new(record: MessageRecord) -> Self {
        Self {
            record,
            deleted: false,
        }
    }
}

/// Which view an applied event changed, and what to render for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redraw {
    /// Session identity was set; render the greeting.
    Greeting,
    /// The online-user list changed; render it in full.
    OnlineUsers,
    /// The top-users board was replaced; render it in full.
    TopUsers,
    /// New rows were appended to the message list, in payload order.
    MessagesAppended(Vec<MessageRow>),
    /// The row with this id was marked deleted.
    MessageRemoved(String),
    /// The event changed nothing visible.
    Nothing,
}

/// In-memory mirror of the server-pushed chat state.
#[derive(Debug, Clone, Default)]
pub struct ChatView {
    current_user: Option<String>,
    users: Vec<String>,
    top_users: Vec<String>,
    messages: Vec<MessageRow>,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Login this session was authenticated as, once `login_info` has
    /// arrived. Read-only for the rest of the session.
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Online users, in arrival order.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Top-users board, rank = position + 1.
    pub fn top_users(&self) -> &[String] {
        &self.top_users
    }

    /// Append-only projection of received messages.
    pub fn messages(&self) -> &[MessageRow] {
        &self.messages
    }

    /// Apply one server event to the view models.
    ///
    /// Events are handled independently and in receipt order; no
    /// cross-event ordering is assumed.
    pub fn apply(&mut self, event: ServerEvent) -> Redraw {
        match event {
            ServerEvent::LoginInfo(login) => {
                self.current_user = Some(login);
                Redraw::Greeting
            }
            ServerEvent::Messages(records) => self.append_messages(records),
            ServerEvent::Chat(record) => self.append_messages(vec![record]),
            ServerEvent::TopList(names) => {
                self.top_users = names;
                Redraw::TopUsers
            }
            ServerEvent::Enter(name) => {
                // No-op if already present, matching the membership
                // check the server-side broadcast does not make.
                if self.users.contains(&name) {
                    Redraw::Nothing
                } else {
                    self.users.push(name);
                    Redraw::OnlineUsers
                }
            }
            ServerEvent::Exit(name) => {
                self.users.retain(|user| *user != name);
                Redraw::OnlineUsers
            }
            ServerEvent::Users(names) => {
                self.users = names;
                Redraw::OnlineUsers
            }
            ServerEvent::RemoveMsg(id) => {
                match self.messages.iter_mut().find(|row| row.record.id == id) {
                    Some(row) => {
                        row.deleted = true;
                        Redraw::MessageRemoved(id)
                    }
                    // Unknown id: nothing to mutate.
                    None => Redraw::Nothing,
                }
            }
        }
    }

    fn append_messages(&mut self, records: Vec<MessageRecord>) -> Redraw {
        let rows: Vec<MessageRow> = records.into_iter().map(MessageRow::new).collect();
        self.messages.extend(rows.iter().cloned());
        Redraw::MessagesAppended(rows)
    }
}
