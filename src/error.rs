// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors for the fallible edges of the crate.
//!
//! Dispatch itself never fails; these only come out of parsing and of
//! opening things on disk.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized log level name `{0}`")]
    InvalidLevel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
