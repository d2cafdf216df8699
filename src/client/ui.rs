//! UI utilities for the client.

use std::io::Write;

/// Redisplay the prompt after asynchronous output interrupted it
pub fn redisplay_prompt(login: &str) {
    print!("{}> ", login);
    std::io::stdout().flush().ok();
}
