// SPDX-License-Identifier: MIT OR Apache-2.0

//! Level policy shared by the manager and the sinks.
//!
//! These are pure functions; nothing here touches shared state.

use crate::Level;

/**
Whether a save level means logging is considered active.

Anything stricter than "always show" counts as active.  [`Level::Always`],
[`Level::None`] and [`Level::Invalid`] all switch logging off.

```
use sinkwise::{Level, filter::logging_active};
assert!(logging_active(Level::Warning));
assert!(!logging_active(Level::Always));
```
*/
pub const fn logging_active(save_level: Level) -> bool {
    save_level as u8 > Level::Always as u8
}

/**
Whether a sink saving at `save_level` should emit a message logged at `level`.

The manager never calls this itself; sinks decide for themselves.
*/
pub fn should_forward(save_level: Level, level: Level) -> bool {
    match (save_level, level) {
        (_, Level::Invalid) => false,
        (Level::Invalid | Level::None, _) => false,
        (_, Level::Internal) => true,
        _ => level <= save_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_only_above_always() {
        for level in Level::ALL {
            assert_eq!(logging_active(level), level > Level::Always, "{level}");
        }
    }

    #[test]
    fn none_suppresses_everything() {
        for level in Level::ALL {
            assert!(!should_forward(Level::None, level), "{level}");
            assert!(!should_forward(Level::Invalid, level), "{level}");
        }
    }

    #[test]
    fn forwards_at_or_below_save_level() {
        assert!(should_forward(Level::Warning, Level::Always));
        assert!(should_forward(Level::Warning, Level::Error));
        assert!(should_forward(Level::Warning, Level::Warning));
        assert!(!should_forward(Level::Warning, Level::Alert));
        assert!(!should_forward(Level::Detail, Level::Debug));
        assert!(should_forward(Level::Always, Level::Always));
        assert!(!should_forward(Level::Always, Level::Fatal));
    }

    #[test]
    fn internal_messages_pass_any_open_sink() {
        assert!(should_forward(Level::Always, Level::Internal));
        assert!(should_forward(Level::Debug, Level::Internal));
        assert!(!should_forward(Level::Debug, Level::Invalid));
    }
}
