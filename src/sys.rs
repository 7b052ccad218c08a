// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific time types for cross-platform compatibility.
//!
//! On native platforms `Instant` comes from `std::time`, while on WASM it comes
//! from `web_time`.  Used for the elapsed-time prefix in
//! [`DefaultSink`](crate::DefaultSink) lines.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
