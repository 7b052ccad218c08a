// SPDX-License-Identifier: MIT OR Apache-2.0

//! The message value handed to every sink.
//!
//! A [`LogRecord`] is rendered once, by the manager, and then lent to each sink in
//! turn.  Sinks that want to keep it must copy what they need.
//!
//! ```rust
//! use sinkwise::{Level, LogRecord};
//!
//! let record = LogRecord::for_node(Level::Info, 7, "awake");
//! assert_eq!(record.to_string(), "Node007, awake");
//! ```

use crate::Level;
use std::fmt::Display;

/**
A log record.

Carries the level, the originating node when the message concerns a specific
managed peer, and the already-formatted text.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    level: Level,
    node: Option<u8>,
    message: String,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            node: None,
            message: message.into(),
        }
    }

    pub fn for_node(level: Level, node: u8, message: impl Into<String>) -> Self {
        Self {
            level,
            node: Some(node),
            message: message.into(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The node this message concerns, or `None` for global messages.
    pub fn node(&self) -> Option<u8> {
        self.node
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(node) = self.node {
            write!(f, "Node{:03}, ", node)?;
        }
        f.write_str(&self.message)
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug/Clone/PartialEq/Eq/Hash: Derived - test sinks compare and store records
- Display: node prefix followed by the message

NOT IMPLEMENTED:
- Default: a record without a level has no meaning
- Copy: owns a String
- Ord/PartialOrd: no meaningful ordering for log records
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_record_has_no_prefix() {
        let record = LogRecord::new(Level::Warning, "low battery");
        assert_eq!(record.node(), None);
        assert_eq!(record.to_string(), "low battery");
    }

    #[test]
    fn node_prefix_is_zero_padded() {
        let record = LogRecord::for_node(Level::Detail, 42, "ack");
        assert_eq!(record.node(), Some(42));
        assert_eq!(record.level(), Level::Detail);
        assert_eq!(record.message(), "ack");
        assert_eq!(record.to_string(), "Node042, ack");
    }
}
