// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and debugging purposes.
//! The [`InMemorySink`] captures records in memory rather than writing them to a file or
//! the console, making it ideal for:
//!
//! - Unit testing code that logs through a [`LogManager`](crate::LogManager)
//! - Capturing logs in environments where stderr is redirected or unavailable
//! - Programmatically examining log output
//!
//! ## Architecture
//!
//! Once registered, a sink belongs to the manager, so the caller cannot keep the sink
//! itself around to inspect it.  Instead, before handing the sink over, take an
//! [`InMemoryLogs`] handle with [`InMemorySink::logs`].  Both share an
//! `Arc<Mutex<Vec<String>>>`; the sink appends, the handle reads and drains.

use crate::Level;
use crate::filter::should_forward;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use parking_lot::Mutex;
use std::sync::Arc;

/// A sink that stores each record it keeps as a line of text.
///
/// Like every sink, it applies its own save level: records that
/// [`should_forward`] rejects are not stored.
///
/// # Example
///
/// ```rust
/// use sinkwise::{InMemorySink, Level, LogManager};
///
/// let sink = InMemorySink::new(Level::Warning);
/// let logs = sink.logs();
/// let manager = LogManager::with_sink(Box::new(sink));
///
/// manager.write(Level::Error, "disk full");
/// manager.write(Level::Info, "too chatty for this sink");
///
/// assert_eq!(logs.drain_logs(), "disk full");
/// // Buffer is now empty
/// assert_eq!(logs.drain_logs(), "");
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    save_level: Level,
    target: Option<String>,
    lines: Arc<Mutex<Vec<String>>>,
}

/// A read handle onto the buffer of an [`InMemorySink`].
///
/// Cloning the handle shares the same buffer.
#[derive(Debug, Clone)]
pub struct InMemoryLogs {
    lines: Arc<Mutex<Vec<String>>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by Sink
// - Default: Implemented, saves at Level::Debug
// - Clone: NOT implemented for the sink - two sinks appending to one buffer is
//   what `logs()` + a second sink would give you, and that is rarely intended.
//   Implemented for the handle, which is only a view.
// - PartialEq/Eq/Hash: NOT implemented - mutex state comparison is problematic

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl InMemorySink {
    /// Creates a sink that keeps records at or below `save_level`.
    pub fn new(save_level: Level) -> Self {
        Self {
            save_level,
            target: None,
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handle that can read this sink's buffer after the sink has been registered.
    pub fn logs(&self) -> InMemoryLogs {
        InMemoryLogs {
            lines: self.lines.clone(),
        }
    }

    pub fn save_level(&self) -> Level {
        self.save_level
    }

    /// The most recent target name passed to [`Sink::set_target`], if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl InMemoryLogs {
    /**
    Drains all logs into a single string, clearing the buffer.

    Lines are joined with newlines.  Subsequent calls return an empty string unless
    new records have arrived.
    */
    pub fn drain_logs(&self) -> String {
        let mut lines = self.lines.lock();
        let result = lines.join("\n");
        lines.clear();
        result
    }

    /// Drains all logs as separate lines, clearing the buffer.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Number of lines currently buffered.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /**
    Flushes all logs to the console, clearing the buffer.

    Useful for debugging when you want to see the logs immediately without retrieving
    them programmatically.
    */
    pub fn drain_to_console(&self) {
        let mut lines = self.lines.lock();
        for line in lines.iter() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&line.clone().into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", line);
        }
        lines.clear();
    }
}

impl Sink for InMemorySink {
    fn write(&mut self, record: &LogRecord) {
        if should_forward(self.save_level, record.level()) {
            self.lines.lock().push(record.to_string());
        }
    }

    fn set_save_level(&mut self, level: Level) {
        self.save_level = level;
    }

    fn set_target(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }
}
