// SPDX-License-Identifier: MIT OR Apache-2.0

//! An instrumented sink shared by the integration tests.

#![allow(dead_code)]

use sinkwise::{Level, LogRecord, Sink};
use std::sync::{Arc, Mutex};

/// One call received by a [`Tracer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Write {
        sink: &'static str,
        level: Level,
        text: String,
    },
    SaveLevel {
        sink: &'static str,
        level: Level,
    },
    Target {
        sink: &'static str,
        name: String,
    },
    Flush {
        sink: &'static str,
    },
    Dropped {
        sink: &'static str,
    },
    Constructed {
        sink: &'static str,
    },
}

pub type Journal = Arc<Mutex<Vec<Call>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn take(journal: &Journal) -> Vec<Call> {
    std::mem::take(&mut *journal.lock().unwrap())
}

pub fn write(sink: &'static str, level: Level, text: &str) -> Call {
    Call::Write {
        sink,
        level,
        text: text.to_string(),
    }
}

/// Records every call, including its own construction and drop, into a journal.
#[derive(Debug)]
pub struct Tracer {
    name: &'static str,
    journal: Journal,
}

impl Tracer {
    pub fn boxed(name: &'static str, journal: &Journal) -> Box<dyn Sink> {
        journal
            .lock()
            .unwrap()
            .push(Call::Constructed { sink: name });
        Box::new(Tracer {
            name,
            journal: journal.clone(),
        })
    }

    fn push(&self, call: Call) {
        self.journal.lock().unwrap().push(call);
    }
}

impl Sink for Tracer {
    fn write(&mut self, record: &LogRecord) {
        self.push(Call::Write {
            sink: self.name,
            level: record.level(),
            text: record.to_string(),
        });
    }

    fn set_save_level(&mut self, level: Level) {
        self.push(Call::SaveLevel {
            sink: self.name,
            level,
        });
    }

    fn set_target(&mut self, target: &str) {
        self.push(Call::Target {
            sink: self.name,
            name: target.to_string(),
        });
    }

    fn flush(&mut self) {
        self.push(Call::Flush { sink: self.name });
    }
}

impl Drop for Tracer {
    fn drop(&mut self) {
        if let Ok(mut journal) = self.journal.lock() {
            journal.push(Call::Dropped { sink: self.name });
        }
    }
}
