//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# sinkwise

sinkwise is a leveled logging dispatcher: one manager, many sinks, one lock.

# The problem

An embedded controller library logs from every thread it owns: the serial reader, the
command queue, the timers, and whatever the application calls in from.  Those messages
need to land in a file, maybe on the console, maybe somewhere the application provides,
and they must land *whole* and *in order*.  Meanwhile the application wants to change
the log level, point the file somewhere else, or swap the console for its own sink, all
while the threads keep writing.

# The model

* A [`LogManager`] owns an ordered list of [`Sink`]s.
* Every write becomes a [`LogRecord`] that is handed to each sink in registration order,
  under a single mutex.  Two writes never interleave, at any sink.
* Sinks filter for themselves.  The manager only knows whether logging is enabled at all.
* Turning logging on emits one `"Logging started"` record at [`Level::Always`].

# Levels

| Name         | Use                                                        |
|--------------|------------------------------------------------------------|
| None         | As a save level: keep nothing                              |
| Always       | Always shown                                               |
| Fatal        | A likely fatal issue                                       |
| Error        | A serious issue with the library or the network           |
| Warning      | A minor issue the library should recover from             |
| Alert        | Something unexpected the application should know about    |
| Info         | Streamlined feedback on each message                       |
| Detail       | Detailed progress of each message                          |
| Debug        | Very detailed; grows a file quickly                        |
| StreamDetail | Low-level byte transfers                                   |

[`Level::Invalid`] reports a bad level name from configuration; [`Level::Internal`] is
reserved for the manager itself.

# The API

```rust
use sinkwise::{InMemorySink, Level, LogManager};

let manager = LogManager::empty();
let sink = InMemorySink::new(Level::Detail);
let logs = sink.logs();
manager.set_logging_class(Box::new(sink), true);

sinkwise::log!(manager, Level::Info, "Hello {}!", "world");
sinkwise::log_node!(manager, Level::Detail, 12, "queue depth {}", 3);

assert_eq!(logs.drain_logs(), "Hello world!\nNode012, queue depth 3");
```

For a single logger shared by the whole process, see the [`global`] module.

# Multithreading

[`LogManager`] is `Send + Sync`; share it with `Arc`.  Sinks are owned by the manager
and are only ever called with its lock held.
*/

mod default_sink;
mod error;
pub mod filter;
pub mod global;
mod inmemory_sink;
mod level;
mod log_record;
mod macros;
mod manager;
mod options;
mod sink;
mod sys;

pub use default_sink::DefaultSink;
pub use error::{Error, Result};
pub use inmemory_sink::{InMemoryLogs, InMemorySink};
pub use level::Level;
pub use log_record::LogRecord;
pub use manager::{LOGGING_STARTED, LogManager};
pub use options::LogOptions;
pub use sink::Sink;
