//! Interactive chat client: view models, rendering and the session loop.

mod formatter;
mod session;
mod ui;
mod view;

pub use formatter::{DELETED_PLACEHOLDER, ViewFormatter};
pub use session::{handle_server_text, parse_input, run_chat_session};
pub use view::{ChatView, MessageRow, Redraw};
