// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels and their external names.
//!
//! Levels are declared from least to most verbose, so `a <= b` reads as
//! "a sink saving at `b` also keeps messages at `a`".  [`Level::Invalid`] and
//! [`Level::Internal`] sit at either end of the order but are sentinels, not
//! severities; see [`crate::filter`] for how they are treated.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Produced when a configured level name cannot be recognized.
    Invalid,
    /// Disable all logging.
    None,
    /// These messages should always be shown.
    Always,
    /// A likely fatal issue.
    Fatal,
    /// A serious issue with the library or the network.
    Error,
    /// A minor issue the library should be able to recover from.
    Warning,
    /// Something unexpected the controlling application should know about.
    Alert,
    /// Streamlined feedback on each message.
    Info,
    /// Detailed information on the progress of each message.
    #[default]
    Detail,
    /// Very detailed information; grows a log file quickly.
    Debug,
    /// Low-level byte transfers.
    StreamDetail,
    /// Reserved for messages the manager emits about itself.
    Internal,
}

impl Level {
    /// All levels, in order.
    pub const ALL: [Level; 12] = [
        Level::Invalid,
        Level::None,
        Level::Always,
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Alert,
        Level::Info,
        Level::Detail,
        Level::Debug,
        Level::StreamDetail,
        Level::Internal,
    ];

    /// External names, indexed the same way as [`Level::ALL`].
    pub const NAMES: [&'static str; 12] = [
        "Invalid",
        "None",
        "Always",
        "Fatal",
        "Error",
        "Warning",
        "Alert",
        "Info",
        "Detail",
        "Debug",
        "StreamDetail",
        "Internal",
    ];

    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /**
    Looks up a level by its external name, ignoring ASCII case.

    Unknown names map to [`Level::Invalid`] rather than failing, which is what
    configuration surfaces want when they need to report a bad value back to the user.
    */
    pub fn from_name(name: &str) -> Level {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Level::Invalid)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Level::from_name(s) {
            Level::Invalid if !s.trim().eq_ignore_ascii_case("invalid") => {
                Err(Error::InvalidLevel(s.to_string()))
            }
            level => Ok(level),
        }
    }
}

/// [`Level::Invalid`] is an outcome of parsing, not a setting, so serde refuses it in
/// both directions.
impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Level::Invalid => Err(serde::ser::Error::custom(Error::InvalidLevel(
                self.name().to_string(),
            ))),
            level => serializer.serialize_str(level.name()),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        match Level::from_name(&name) {
            Level::Invalid => Err(serde::de::Error::custom(Error::InvalidLevel(name))),
            level => Ok(level),
        }
    }
}
