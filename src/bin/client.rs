//! CLI chat client for the web chat service.
//!
//! Registers or logs in over HTTP, then joins the chat over WebSocket.
//! Incoming messages, the online-user list and the top-users board are
//! rendered as they are pushed; typed lines are sent as chat messages
//! and `/del <id>` deletes one of your own messages.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin client -- --login alice --password secret
//! cargo run --bin client -- --login alice --password secret --register
//! cargo run --bin client -- --host chat.example.org:8080 --login alice --password secret
//! ```

use clap::Parser;

use chat_client_rs::{auth::AuthClient, client::run_chat_session, common::logger::setup_logger};

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "CLI client for the web chat service", long_about = None)]
struct Args {
    /// Chat service host and port
    #[arg(long, default_value = "127.0.0.1:8080")]
    host: String,

    /// Login to authenticate as
    #[arg(short, long)]
    login: String,

    /// Password for the account
    #[arg(short, long)]
    password: String,

    /// Register a new account instead of logging in
    #[arg(long)]
    register: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let auth = AuthClient::new(format!("http://{}", args.host));
    let result = if args.register {
        auth.register(&args.login, &args.password).await
    } else {
        auth.login(&args.login, &args.password).await
    };

    let session = match result {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Authentication failed: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Authenticated as '{}'", args.login);

    let endpoint = format!("ws://{}/chat", args.host);
    if let Err(e) = run_chat_session(&endpoint, &session.cookie, &args.login).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
