// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration order, replacement and renaming on an owned manager.

mod common;

use common::{Call, Tracer, journal, take, write};
use sinkwise::{Level, LogManager};

#[test]
fn appended_sinks_receive_every_write_in_order() {
    let j = journal();
    let manager = LogManager::empty();
    manager.set_logging_class(Tracer::boxed("a", &j), true);
    manager.set_logging_class(Tracer::boxed("b", &j), true);
    take(&j);

    manager.write(Level::Info, "first");
    sinkwise::log!(manager, Level::Error, "second #{}", 2);

    assert_eq!(
        take(&j),
        vec![
            write("a", Level::Info, "first"),
            write("b", Level::Info, "first"),
            write("a", Level::Error, "second #2"),
            write("b", Level::Error, "second #2"),
        ]
    );
}

#[test]
fn replacing_tears_down_before_the_new_sink_joins() {
    let j = journal();
    let manager = LogManager::empty();
    manager.set_logging_class(Tracer::boxed("a", &j), true);
    manager.set_logging_class(Tracer::boxed("b", &j), true);
    take(&j);

    let c = Tracer::boxed("c", &j);
    manager.set_logging_class(c, false);
    manager.write(Level::Warning, "after");

    assert_eq!(
        take(&j),
        vec![
            Call::Constructed { sink: "c" },
            Call::Dropped { sink: "a" },
            Call::Dropped { sink: "b" },
            write("c", Level::Warning, "after"),
        ]
    );
}

#[test]
fn rename_and_flush_fan_out() {
    let j = journal();
    let manager = LogManager::with_sink(Tracer::boxed("a", &j));
    manager.set_logging_class(Tracer::boxed("b", &j), true);
    take(&j);

    manager.set_log_file_name("zwave.log");
    manager.flush();

    assert_eq!(
        take(&j),
        vec![
            Call::Target {
                sink: "a",
                name: "zwave.log".to_string()
            },
            Call::Target {
                sink: "b",
                name: "zwave.log".to_string()
            },
            Call::Flush { sink: "a" },
            Call::Flush { sink: "b" },
        ]
    );
}

#[test]
fn rename_is_gated_on_logging_state() {
    let j = journal();
    let manager = LogManager::with_sink(Tracer::boxed("a", &j));
    take(&j);

    manager.set_logging_state(false);
    manager.set_log_file_name("ignored.log");
    assert!(take(&j).is_empty());
}

#[test]
fn node_writes_carry_the_node() {
    let j = journal();
    let manager = LogManager::with_sink(Tracer::boxed("a", &j));
    take(&j);

    manager.write_node(Level::Detail, 200, "sent");
    sinkwise::log_node!(manager, Level::StreamDetail, 7, "{:02x} {:02x}", 0x01, 0xfe);

    assert_eq!(
        take(&j),
        vec![
            write("a", Level::Detail, "Node200, sent"),
            write("a", Level::StreamDetail, "Node007, 01 fe"),
        ]
    );
}
