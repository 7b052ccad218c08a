// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction parameters for the default sink.
//!
//! Deciding *which* sinks an application wants is the application's business; this
//! only describes the one sink a [`LogManager`](crate::LogManager) is created with.
//! Options can be built in code or read from JSON, where every field is optional:
//!
//! ```
//! use sinkwise::{Level, LogOptions};
//!
//! let options = LogOptions::from_json_str(r#"{ "target": "hub.log", "save_level": "Warning" }"#)?;
//! assert_eq!(options.target, "hub.log");
//! assert!(!options.append);
//! assert!(options.console_output);
//! assert_eq!(options.save_level, Level::Warning);
//! # Ok::<(), sinkwise::Error>(())
//! ```

use crate::Level;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogOptions {
    /// Where persistent output goes.  An empty target means no file.
    pub target: String,
    /// Append to an existing target instead of overwriting it.
    pub append: bool,
    /// Mirror output to the console.
    pub console_output: bool,
    /// The default sink's own save level.
    pub save_level: Level,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            target: "sinkwise.log".to_string(),
            append: false,
            console_output: true,
            save_level: Level::default(),
        }
    }
}

impl LogOptions {
    pub fn new(target: impl Into<String>, append: bool, console_output: bool, save_level: Level) -> Self {
        Self {
            target: target.into(),
            append,
            console_output,
            save_level,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
