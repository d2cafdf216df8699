//! Rendering of the chat views for terminal display.
//!
//! Every function is a pure data-to-text transform over the view
//! models; the session layer decides when to print. User lists render
//! in full on every change, message rows render once when appended.

use super::view::MessageRow;

/// Placeholder shown in place of a deleted message's content.
pub const DELETED_PLACEHOLDER: &str = "(message deleted)";

/// View renderer for client display
pub struct ViewFormatter;

impl ViewFormatter {
    /// Format the greeting once the session identity is known.
    pub fn format_greeting(login: &str) -> String {
        format!("\nHello, {}!\n", login)
    }

    /// Format the full online-user list.
    ///
    /// # Arguments
    ///
    /// * `users` - Online users in arrival order
    /// * `current_user` - The session's own login (to mark as "me")
    ///
    /// # Returns
    ///
    /// A block replacing any previously printed list
    pub fn format_online_users(users: &[String], current_user: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("\nOnline users:\n");

        if users.is_empty() {
            output.push_str("(nobody online)\n");
        } else {
            for user in users {
                let me_suffix = if Some(user.as_str()) == current_user {
                    " (me)"
                } else {
                    ""
                };
                output.push_str(&format!("* {}{}\n", user, me_suffix));
            }
        }

        output
    }

    /// Format the top-users board, ranked 1-based in payload order.
    pub fn format_top_users(top_users: &[String]) -> String {
        let mut output = String::new();
        output.push_str("\nTop users:\n");

        for (index, user) in top_users.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, user));
        }

        output
    }

    /// Format one message row as `[time] author: text`.
    ///
    /// A delete affordance (`/del <id>` hint) is included only when the
    /// row's author equals the session identity; a deleted row renders
    /// as the placeholder with the row structure preserved.
    pub fn format_message_row(row: &MessageRow, current_user: Option<&str>) -> String {
        if row.deleted {
            return format!("[{}] {}\n", row.record.time_label, DELETED_PLACEHOLDER);
        }

        let delete_hint = if Some(row.record.author.as_str()) == current_user {
            format!("  (delete: /del {})", row.record.id)
        } else {
            String::new()
        };

        format!(
            "[{}] {}: {}{}\n",
            row.record.time_label, row.record.author, row.record.text, delete_hint
        )
    }

    /// Format the notice printed when the server deletes a message.
    pub fn format_message_removed(id: &str) -> String {
        format!("\nmessage {} was deleted\n", id)
    }

    /// Format a confirmation after sending, with a local time label.
    pub fn format_sent_confirmation(time_label: &str) -> String {
        format!("sent at {}\n", time_label)
    }
}
