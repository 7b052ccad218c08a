// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatcher that owns the sinks.
//!
//! A [`LogManager`] holds an ordered list of [`Sink`]s behind a single mutex, plus an
//! enabled flag.  Every write is rendered once and then handed to each sink in
//! registration order while the lock is held, so the per-sink calls for one message
//! are never interleaved with those of another.
//!
//! # Thread Safety
//!
//! All methods take `&self` and may be called from any thread.  The lock is coarse on
//! purpose: one writer at a time fans out to every sink.  The enabled flag is only
//! written while the lock is held and is read without it, so a write racing a
//! `set_logging_state(false)` may still go out.
//!
//! # The "Logging started" banner
//!
//! Whenever logging goes from disabled to enabled, one [`Level::Always`] record with the
//! text [`LOGGING_STARTED`] is sent to every sink.  It is written from inside the same
//! critical section that flips the flag, so nothing can slip in between.
//!
//! # Example
//!
//! ```
//! use sinkwise::{InMemorySink, Level, LogManager};
//!
//! let manager = LogManager::empty();
//! let sink = InMemorySink::new(Level::Info);
//! let logs = sink.logs();
//! manager.set_logging_class(Box::new(sink), true);
//!
//! sinkwise::log!(manager, Level::Info, "{} devices online", 3);
//! sinkwise::log_node!(manager, Level::Debug, 4, "filtered out by the sink");
//!
//! assert_eq!(logs.drain_logs(), "3 devices online");
//! ```

use crate::Level;
use crate::default_sink::DefaultSink;
use crate::filter::logging_active;
use crate::log_record::LogRecord;
use crate::options::LogOptions;
use crate::sink::Sink;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Text of the record emitted on every disabled→enabled transition.
pub const LOGGING_STARTED: &str = "Logging started";

pub struct LogManager {
    sinks: Mutex<Vec<Box<dyn Sink>>>,
    /// Mirrors `sinks.len()` so the write precondition can skip the lock.
    sink_count: AtomicUsize,
    enabled: Arc<AtomicBool>,
    /// Set by `teardown`, under the lock.  A retired manager accepts nothing.
    retired: AtomicBool,
}

impl LogManager {
    /**
    Creates a manager with a single [`DefaultSink`] built from `options`, with logging enabled.
    */
    pub fn new(options: &LogOptions) -> Self {
        Self::with_flag(
            vec![Box::new(DefaultSink::new(options))],
            Arc::new(AtomicBool::new(true)),
        )
    }

    /**
    Creates a manager with no sinks and logging enabled.

    Writes are dropped until a sink is registered with [`Self::set_logging_class`].
    */
    pub fn empty() -> Self {
        Self::with_flag(Vec::new(), Arc::new(AtomicBool::new(true)))
    }

    /// Creates a manager that starts out with `sink` as its only sink, with logging enabled.
    pub fn with_sink(sink: Box<dyn Sink>) -> Self {
        Self::with_flag(vec![sink], Arc::new(AtomicBool::new(true)))
    }

    /**
    Creates a manager whose enabled flag is shared with its owner.

    The flag is set to `true`.  Used for the process-wide instance, whose flag outlives
    any one manager.
    */
    pub(crate) fn with_flag(sinks: Vec<Box<dyn Sink>>, enabled: Arc<AtomicBool>) -> Self {
        enabled.store(true, Ordering::Release);
        Self {
            sink_count: AtomicUsize::new(sinks.len()),
            sinks: Mutex::new(sinks),
            enabled,
            retired: AtomicBool::new(false),
        }
    }

    /**
    Registers a sink.

    When `append` is false, every sink currently registered is dropped first, in
    registration order, before `sink` joins the list.  Duplicates are fine; nothing is
    reordered or deduplicated.

    Returns `true` once `sink` is registered.  A manager that the process-wide lifecycle
    has torn down refuses the sink, drops it and returns `false`.
    */
    pub fn set_logging_class(&self, sink: Box<dyn Sink>, append: bool) -> bool {
        let mut sinks = self.sinks.lock();
        if self.is_retired() {
            // `sink` is dropped on return, after the guard
            return false;
        }
        if !append {
            // clear drops front to back
            sinks.clear();
        }
        sinks.push(sink);
        self.sink_count.store(sinks.len(), Ordering::Release);
        true
    }

    /**
    Turns logging on or off without touching any sink's save level.

    Emits the [`LOGGING_STARTED`] banner on a disabled→enabled edge.  Does nothing on a
    torn-down manager.
    */
    pub fn set_logging_state(&self, enabled: bool) {
        let mut sinks = self.sinks.lock();
        if self.is_retired() {
            return;
        }
        let was_enabled = self.enabled.swap(enabled, Ordering::AcqRel);
        if !was_enabled && enabled {
            Self::announce_started(&mut sinks);
        }
    }

    /**
    Sets the save level.

    Logging is considered enabled exactly when [`logging_active`] holds for `level`.
    When it does, `level` is passed on to every sink.  Emits the [`LOGGING_STARTED`]
    banner on a disabled→enabled edge.  Does nothing on a torn-down manager.
    */
    pub fn set_save_level(&self, level: Level) {
        let active = logging_active(level);
        let mut sinks = self.sinks.lock();
        if self.is_retired() {
            return;
        }
        let was_enabled = self.enabled.swap(active, Ordering::AcqRel);
        if active {
            for sink in sinks.iter_mut() {
                sink.set_save_level(level);
            }
        }
        if !was_enabled && active {
            Self::announce_started(&mut sinks);
        }
    }

    /// Whether logging is enabled.  Does not take the lock.
    pub fn logging_state(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sink_count.load(Ordering::Acquire)
    }

    /**
    Writes a global message.

    A no-op when logging is disabled or no sink is registered.  [`Level::Internal`] is
    reserved for the manager and is not accepted here.
    */
    pub fn write(&self, level: Level, message: impl Into<String>) {
        if self.accepts(level) {
            self.dispatch(&LogRecord::new(level, message));
        }
    }

    /// Writes a message about a specific node.  Same rules as [`Self::write`].
    pub fn write_node(&self, level: Level, node: u8, message: impl Into<String>) {
        if self.accepts(level) {
            self.dispatch(&LogRecord::for_node(level, node, message));
        }
    }

    /**
    Writes a message from format arguments.

    The arguments are only rendered once the message is known to be going somewhere.
    This is what [`log!`](crate::log!) and [`log_node!`](crate::log_node!) expand to.
    */
    pub fn write_args(&self, level: Level, node: Option<u8>, args: fmt::Arguments<'_>) {
        if !self.accepts(level) {
            return;
        }
        let message = args.to_string();
        let record = match node {
            Some(node) => LogRecord::for_node(level, node, message),
            None => LogRecord::new(level, message),
        };
        self.dispatch(&record);
    }

    /**
    Passes a new log target name to every sink.

    Gated like a write: nothing happens while logging is disabled or no sink is registered.
    */
    pub fn set_log_file_name(&self, name: &str) {
        if !self.is_open() {
            return;
        }
        let mut sinks = self.sinks.lock();
        for sink in sinks.iter_mut() {
            sink.set_target(name);
        }
    }

    /// Asks every sink to flush whatever it has buffered.
    pub fn flush(&self) {
        let mut sinks = self.sinks.lock();
        for sink in sinks.iter_mut() {
            sink.flush();
        }
    }

    /**
    Flushes and drops every sink, then retires the manager.

    Handles to a retired manager stay valid, but every call on them is a no-op: writes
    reach nobody, sinks are refused, and the shared enabled flag is left alone.
    */
    pub(crate) fn teardown(&self) {
        let mut sinks = self.sinks.lock();
        self.retired.store(true, Ordering::Release);
        for sink in sinks.iter_mut() {
            sink.flush();
        }
        sinks.clear();
        self.sink_count.store(0, Ordering::Release);
    }

    fn is_open(&self) -> bool {
        self.logging_state() && self.sink_count() > 0 && !self.is_retired()
    }

    fn is_retired(&self) -> bool {
        self.retired.load(Ordering::Acquire)
    }

    fn accepts(&self, level: Level) -> bool {
        debug_assert_ne!(
            level,
            Level::Internal,
            "Level::Internal is reserved for the log manager"
        );
        level != Level::Internal && self.is_open()
    }

    fn dispatch(&self, record: &LogRecord) {
        let mut sinks = self.sinks.lock();
        for sink in sinks.iter_mut() {
            sink.write(record);
        }
    }

    /// Must be called with the lock held; `sinks` is the guarded list.
    fn announce_started(sinks: &mut [Box<dyn Sink>]) {
        let record = LogRecord::new(Level::Always, LOGGING_STARTED);
        for sink in sinks.iter_mut() {
            sink.write(&record);
        }
    }
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("sink_count", &self.sink_count())
            .field("enabled", &self.logging_state())
            .field("retired", &self.is_retired())
            .finish()
    }
}

/*
Boilerplate notes for LogManager:

- Debug: implemented by hand; printing the sinks would need the lock.
- Clone: NOT implemented - sinks are owned exclusively.  Share with Arc instead.
- Default: NOT implemented - `empty()` and `new(&LogOptions::default())` are both
  reasonable defaults, so make the caller pick.
- PartialEq/Eq/Hash: NOT implemented - no meaningful equality for a dispatcher.
- Send/Sync: automatic, since Sink: Send and access is serialized by the mutex.
*/
