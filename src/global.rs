// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide log manager.
//!
//! Most code should hold a [`LogManager`] and pass it around.  For applications that
//! want one logger for the whole process, this module keeps a single instance slot
//! plus a process-wide "logging active" flag, with explicit create/replace/destroy.
//!
//! # Lifecycle
//!
//! ```text
//! Absent --create--> Created --(set_*, write)*--> Created --destroy--> Absent
//!                       \--create (destroy, then create)--/
//! ```
//!
//! [`create`] on a live instance first tears the old one down completely: every
//! sink is flushed and dropped before the new default sink is built.  This also
//! discards any sinks that were added with [`set_logging_class`] since the last
//! `create`.
//!
//! # The enabled flag
//!
//! The flag belongs to the process, not to the instance.  It survives [`destroy`], can
//! be read and set while no instance exists, and is forced on by [`create`].
//!
//! # Examples
//!
//! ```
//! use sinkwise::{global, InMemorySink, Level, LogOptions};
//!
//! // No file, no console: just the in-memory sink below.
//! global::create(&LogOptions::new("", false, false, Level::Detail));
//! let sink = InMemorySink::new(Level::Detail);
//! let logs = sink.logs();
//! global::set_logging_class(Box::new(sink), false);
//!
//! sinkwise::global_log!(Level::Info, "controller {} ready", "0x01");
//! assert_eq!(logs.drain_logs(), "controller 0x01 ready");
//!
//! global::destroy();
//! assert!(!global::is_created());
//! ```
//!
//! # Thread Safety
//!
//! The slot is behind a `parking_lot::RwLock`.  Writes hold the read side for the
//! duration of the fan-out, so [`create`] and [`destroy`] wait for in-flight writes to
//! finish.  Lifecycle calls are still meant for single-threaded setup and teardown;
//! writes racing a `destroy` are simply dropped.  A handle returned by [`create`] or
//! [`instance`] stays safe to call after `destroy` (or a later `create`), but it is
//! retired: it has no sinks, refuses new ones, and cannot change the process flag.

use crate::Level;
use crate::default_sink::DefaultSink;
use crate::filter::logging_active;
use crate::manager::LogManager;
use crate::options::LogOptions;
use crate::sink::Sink;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

struct ProcessState {
    instance: RwLock<Option<Arc<LogManager>>>,
    enabled: Arc<AtomicBool>,
}

/// Static storage for the process-wide instance slot and flag.
static PROCESS: OnceLock<ProcessState> = OnceLock::new();

fn process() -> &'static ProcessState {
    PROCESS.get_or_init(|| ProcessState {
        instance: RwLock::new(None),
        enabled: Arc::new(AtomicBool::new(false)),
    })
}

fn with_instance<R>(f: impl FnOnce(&LogManager) -> R) -> Option<R> {
    process().instance.read().as_deref().map(f)
}

/**
Creates the process-wide manager with a single [`DefaultSink`] built from `options`.

If an instance already exists it is destroyed first.  Afterwards exactly one instance
exists and logging is enabled.
*/
pub fn create(options: &LogOptions) -> Arc<LogManager> {
    create_with(|| Box::new(DefaultSink::new(options)))
}

/**
Like [`create`], but the initial sink comes from `make_sink`.

`make_sink` runs after any previous instance has been fully torn down.
*/
pub fn create_with(make_sink: impl FnOnce() -> Box<dyn Sink>) -> Arc<LogManager> {
    let state = process();
    let mut slot = state.instance.write();
    if let Some(previous) = slot.take() {
        previous.teardown();
    }
    let manager = Arc::new(LogManager::with_flag(
        vec![make_sink()],
        state.enabled.clone(),
    ));
    *slot = Some(manager.clone());
    manager
}

/**
Destroys the process-wide manager, flushing and dropping every sink.

Safe to call when no instance exists.
*/
pub fn destroy() {
    let previous = process().instance.write().take();
    if let Some(previous) = previous {
        previous.teardown();
    }
}

/// The current instance, if any.
pub fn instance() -> Option<Arc<LogManager>> {
    process().instance.read().clone()
}

pub fn is_created() -> bool {
    process().instance.read().is_some()
}

/**
Registers a sink with the process-wide manager.  See [`LogManager::set_logging_class`].

Calling this before [`create`] is a programming error: the sink is dropped, a note goes
to stderr, and `false` is returned.
*/
pub fn set_logging_class(sink: Box<dyn Sink>, append: bool) -> bool {
    match with_instance(|manager| manager.set_logging_class(sink, append)) {
        Some(registered) => registered,
        None => {
            precondition_violated("set_logging_class called before create");
            false
        }
    }
}

/**
Turns logging on or off.  See [`LogManager::set_logging_state`].

Works without an instance; there is just nobody to hear the banner.
*/
pub fn set_logging_state(enabled: bool) {
    if with_instance(|manager| manager.set_logging_state(enabled)).is_none() {
        process().enabled.store(enabled, Ordering::Release);
    }
}

/// Sets the save level.  See [`LogManager::set_save_level`].
pub fn set_save_level(level: Level) {
    if with_instance(|manager| manager.set_save_level(level)).is_none() {
        process()
            .enabled
            .store(logging_active(level), Ordering::Release);
    }
}

/// Whether logging is enabled for the process.  Lock-free.
pub fn logging_state() -> bool {
    process().enabled.load(Ordering::Acquire)
}

pub fn write(level: Level, message: impl Into<String>) {
    if logging_state() {
        with_instance(|manager| manager.write(level, message));
    }
}

pub fn write_node(level: Level, node: u8, message: impl Into<String>) {
    if logging_state() {
        with_instance(|manager| manager.write_node(level, node, message));
    }
}

/// What [`global_log!`](crate::global_log!) and [`global_log_node!`](crate::global_log_node!) expand to.
pub fn write_args(level: Level, node: Option<u8>, args: fmt::Arguments<'_>) {
    if logging_state() {
        with_instance(|manager| manager.write_args(level, node, args));
    }
}

pub fn set_log_file_name(name: &str) {
    with_instance(|manager| manager.set_log_file_name(name));
}

pub fn flush() {
    with_instance(|manager| manager.flush());
}

fn precondition_violated(what: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::Write;
        let _ = writeln!(std::io::stderr().lock(), "sinkwise: {what}");
    }
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("sinkwise: {what}").into());
}
