// SPDX-License-Identifier: MIT OR Apache-2.0

//! The enabled flag, save-level propagation and the "Logging started" banner.

mod common;

use common::{Call, Tracer, journal, take, write};
use proptest::prelude::*;
use sinkwise::filter::logging_active;
use sinkwise::{LOGGING_STARTED, Level, LogManager};

fn any_level() -> impl Strategy<Value = Level> {
    proptest::sample::select(Level::ALL.to_vec())
}

fn any_caller_level() -> impl Strategy<Value = Level> {
    any_level().prop_filter("Internal is not for callers", |l| *l != Level::Internal)
}

fn banners(calls: &[Call]) -> usize {
    calls
        .iter()
        .filter(|c| **c == write("a", Level::Always, LOGGING_STARTED))
        .count()
}

#[test]
fn banner_goes_to_every_sink_after_the_new_level() {
    let j = journal();
    let manager = LogManager::with_sink(Tracer::boxed("a", &j));
    manager.set_logging_class(Tracer::boxed("b", &j), true);
    manager.set_save_level(Level::None);
    take(&j);

    manager.set_save_level(Level::Info);

    assert_eq!(
        take(&j),
        vec![
            Call::SaveLevel {
                sink: "a",
                level: Level::Info
            },
            Call::SaveLevel {
                sink: "b",
                level: Level::Info
            },
            write("a", Level::Always, LOGGING_STARTED),
            write("b", Level::Always, LOGGING_STARTED),
        ]
    );
}

#[test]
fn bool_switch_leaves_sink_levels_alone() {
    let j = journal();
    let manager = LogManager::with_sink(Tracer::boxed("a", &j));
    take(&j);

    manager.set_logging_state(false);
    assert!(!manager.logging_state());
    manager.set_logging_state(true);
    assert!(manager.logging_state());

    assert_eq!(take(&j), vec![write("a", Level::Always, LOGGING_STARTED)]);
}

proptest! {
    #[test]
    fn writes_while_disabled_reach_no_sink(
        writes in proptest::collection::vec((any_caller_level(), proptest::option::of(any::<u8>()), ".{0,16}"), 0..32)
    ) {
        let j = journal();
        let manager = LogManager::with_sink(Tracer::boxed("a", &j));
        manager.set_logging_state(false);
        take(&j);

        for (level, node, text) in writes {
            match node {
                Some(node) => manager.write_node(level, node, text),
                None => manager.write(level, text),
            }
        }

        prop_assert!(take(&j).is_empty());
    }

    #[test]
    fn one_banner_per_inactive_to_active_edge(levels in proptest::collection::vec(any_level(), 1..24)) {
        let j = journal();
        let manager = LogManager::with_sink(Tracer::boxed("a", &j));
        manager.set_save_level(Level::None);
        take(&j);

        let mut was_active = false;
        for level in levels {
            let active = logging_active(level);
            manager.set_save_level(level);
            prop_assert_eq!(manager.logging_state(), active);

            let calls = take(&j);
            let expected = usize::from(!was_active && active);
            prop_assert_eq!(banners(&calls), expected);
            if active {
                prop_assert_eq!(&calls[0], &Call::SaveLevel { sink: "a", level });
            } else {
                prop_assert!(calls.is_empty());
            }
            was_active = active;
        }
    }
}
