// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use crate::error::Result;
use crate::filter::should_forward;
use crate::log_record::LogRecord;
use crate::options::LogOptions;
use crate::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::OnceLock;

static INITIAL_TIMESTAMP: OnceLock<crate::sys::Instant> = OnceLock::new();

fn initial_timestamp() -> crate::sys::Instant {
    *INITIAL_TIMESTAMP.get_or_init(crate::sys::Instant::now)
}

/**
The sink a [`LogManager`](crate::LogManager) is created with.

Writes each kept record as one line to a file, and optionally mirrors it to the console
(stderr natively, `console` on wasm).  Lines start with the time elapsed since the first
line this process wrote, then the level name.  The format is not a contract.

Renaming the target closes the current file and appends to the new one.
 */
#[derive(Debug)]
pub struct DefaultSink {
    target: String,
    console_output: bool,
    save_level: Level,
    file: Option<File>,
}

impl DefaultSink {
    /**
    Creates the sink, opening the target as `options` asks.

    If the target cannot be opened the sink carries on console-only and says so on stderr;
    use [`Self::open`] to find out instead.
    */
    pub fn new(options: &LogOptions) -> Self {
        let file = match open_target(&options.target, options.append) {
            Ok(file) => file,
            Err(e) => {
                report(&format!(
                    "sinkwise: can't open log target {:?}: {e}",
                    options.target
                ));
                None
            }
        };
        Self::with_file(options, file)
    }

    /// Creates the sink, failing if the target cannot be opened.
    pub fn open(options: &LogOptions) -> Result<Self> {
        let file = open_target(&options.target, options.append)?;
        Ok(Self::with_file(options, file))
    }

    fn with_file(options: &LogOptions, file: Option<File>) -> Self {
        Self {
            target: options.target.clone(),
            console_output: options.console_output,
            save_level: options.save_level,
            file,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn save_level(&self) -> Level {
        self.save_level
    }

    /// Whether a file is currently open for the target.
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    fn format_line(record: &LogRecord) -> String {
        let elapsed = initial_timestamp().elapsed();
        format!("[{:?}] {}: {}\n", elapsed, record.level(), record)
    }
}

fn open_target(target: &str, append: bool) -> std::io::Result<Option<File>> {
    if target.is_empty() {
        return Ok(None);
    }
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(target).map(Some)
}

fn report(line: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&line.into());
}

impl Sink for DefaultSink {
    fn write(&mut self, record: &LogRecord) {
        if !should_forward(self.save_level, record.level()) {
            return;
        }
        let line = Self::format_line(record);
        if let Some(file) = self.file.as_mut() {
            // failures stay inside the sink
            let _ = file.write_all(line.as_bytes());
        }
        if self.console_output {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = std::io::stderr().lock().write_all(line.as_bytes());
            }
            #[cfg(target_arch = "wasm32")]
            {
                let msg = line.trim_end();
                match record.level() {
                    Level::Fatal | Level::Error => web_sys::console::error_1(&msg.into()),
                    Level::Warning | Level::Alert => web_sys::console::warn_1(&msg.into()),
                    Level::Info => web_sys::console::info_1(&msg.into()),
                    Level::Detail | Level::Debug | Level::StreamDetail => {
                        web_sys::console::debug_1(&msg.into())
                    }
                    _ => web_sys::console::log_1(&msg.into()),
                }
            }
        }
    }

    fn set_save_level(&mut self, level: Level) {
        self.save_level = level;
    }

    fn set_target(&mut self, target: &str) {
        if target == self.target && self.file.is_some() {
            return;
        }
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
        self.target = target.to_string();
        self.file = match open_target(target, true) {
            Ok(file) => file,
            Err(e) => {
                report(&format!("sinkwise: can't open log target {target:?}: {e}"));
                None
            }
        };
    }

    fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
    }
}
