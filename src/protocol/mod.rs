//! Wire protocol for the chat WebSocket endpoint.
//!
//! Frames are JSON text messages of the shape
//! `{"event": <name>, "data": <payload>}`, one named event per frame.

mod event;
mod record;

pub use event::{ClientEvent, ServerEvent};
pub use record::MessageRecord;
