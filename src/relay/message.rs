//! Per-hop message transformation.

/// Message ordinal zero sends regardless of what it received.
pub const SEED: &str = "ping";

/// The message a node at `ordinal` forwards after receiving `incoming`.
pub fn next_message(ordinal: u32, incoming: &str) -> String {
    if ordinal == 0 {
        return SEED.to_string();
    }

    let token = if ordinal % 2 == 0 { " ping" } else { " pong" };
    let mut message = String::with_capacity(incoming.len() + token.len());
    message.push_str(incoming);
    message.push_str(token);
    message
}
