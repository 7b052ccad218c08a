//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
A destination for dispatched log records.

Once registered with a [`LogManager`](crate::LogManager), a sink is owned by the manager
and only ever called while the manager's lock is held, so methods take `&mut self`.
Tearing a sink down is its `Drop`.
*/
pub trait Sink: Debug + Send {
    /**
    Receives one record.

    The manager does not pre-filter; the sink decides whether the record's level
    passes its own save level (see [`crate::filter::should_forward`]).
    */
    fn write(&mut self, record: &LogRecord);

    /// The save level changed.
    fn set_save_level(&mut self, level: Level);

    /**
    The log target was renamed.

    Sinks that do not write to a named target ignore this.
    */
    fn set_target(&mut self, target: &str);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&mut self) {}
}

/*
Boilerplate notes.

# Sink

Sinks are owned exclusively by the manager, so Clone makes no sense: there is nowhere to put the copy.
PartialEq/Eq/Hash would have to mean provenance, which is not something callers can observe.  Skip.
Default is not sensible since who knows how the sink is constructed (does it need a filename, etc.)
Send is required so the manager can be shared across threads; Sync is not, since access is serialized by the lock.
*/
