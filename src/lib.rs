//! CLI client library for a web chat service.
//!
//! The service exposes registration and login over HTTP and the chat
//! itself over a WebSocket endpoint pushing named JSON events. This
//! library provides the HTTP auth client, the typed wire protocol, and
//! the interactive chat session with its view models.

pub mod auth;
pub mod client;
pub mod common;
pub mod error;
pub mod protocol;
