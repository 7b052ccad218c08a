// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting front-ends for the write entry points.
//!
//! Each macro hands `format_args!` straight through, so nothing is rendered unless
//! logging is enabled and some sink is registered.

/// Writes a global message to a [`LogManager`](crate::LogManager).
///
/// ```
/// # use sinkwise::{Level, LogManager};
/// let manager = LogManager::empty();
/// sinkwise::log!(manager, Level::Warning, "retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! log {
    ($manager:expr, $level:expr, $($arg:tt)+) => {
        $manager.write_args($level, ::core::option::Option::None, ::core::format_args!($($arg)+))
    };
}

/// Writes a message about a specific node to a [`LogManager`](crate::LogManager).
#[macro_export]
macro_rules! log_node {
    ($manager:expr, $level:expr, $node:expr, $($arg:tt)+) => {
        $manager.write_args($level, ::core::option::Option::Some($node), ::core::format_args!($($arg)+))
    };
}

/// Writes a global message to the process-wide manager, if there is one.
#[macro_export]
macro_rules! global_log {
    ($level:expr, $($arg:tt)+) => {
        $crate::global::write_args($level, ::core::option::Option::None, ::core::format_args!($($arg)+))
    };
}

/// Writes a message about a specific node to the process-wide manager, if there is one.
#[macro_export]
macro_rules! global_log_node {
    ($level:expr, $node:expr, $($arg:tt)+) => {
        $crate::global::write_args($level, ::core::option::Option::Some($node), ::core::format_args!($($arg)+))
    };
}
