//! Tests for the console-only logger family.

use prefixlog::{ConfigPatch, Gate, Level, Log, MemoryOutput, Threshold, Value, args};
use serde_json::json;

fn gate(patch: &ConfigPatch) -> (Gate, MemoryOutput) {
    let output = MemoryOutput::new();
    (Gate::with_output(patch, output.clone()), output)
}

fn call(logger: &impl Log, level: Level, msg: &str) {
    logger.log(level, msg.into());
}

#[test]
fn defaults_to_silent_at_info() {
    let (gate, output) = gate(&ConfigPatch::new());
    let settings = gate.settings();
    assert!(!settings.console.enabled);
    assert_eq!(settings.console.level, Threshold::At(Level::Info));
    assert!(!settings.replicants);

    let logger = gate.logger("testClient");
    for level in Level::all() {
        call(&logger, level, "hidden");
    }
    logger.replicants("hidden");
    assert!(output.is_empty());
}

#[test]
fn changes_settings_when_reconfigured() {
    let (gate, _) = gate(&ConfigPatch::new());
    gate.reconfigure(&ConfigPatch::new().console_enabled(true).console_level("debug"));

    let settings = gate.settings();
    assert!(settings.console.enabled);
    assert_eq!(settings.console.level, Threshold::At(Level::Debug));
}

#[test]
fn disabled_console_drops_every_level() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(false).console_level("trace"));
    let logger = gate.logger("x");
    for level in Level::all() {
        call(&logger, level, "nope");
    }
    assert!(output.is_empty());
}

#[test]
fn fires_iff_level_at_or_above_threshold() {
    for configured in Level::all() {
        let (gate, output) = gate(
            &ConfigPatch::new()
                .console_enabled(true)
                .console_level(configured),
        );
        let logger = gate.logger("grid");
        for called in Level::all() {
            output.clear();
            call(&logger, called, "m");
            assert_eq!(
                output.len(),
                usize::from(called >= configured),
                "configured={configured} called={called}"
            );
        }
    }
}

#[test]
fn infinite_threshold_never_fires() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(true).console_level("_infinite"));
    let logger = gate.logger("x");
    for level in Level::all() {
        call(&logger, level, "m");
    }
    assert!(output.is_empty());
}

#[test]
fn unrecognized_threshold_fails_silent() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(true).console_level("chatty"));
    let logger = gate.logger("x");
    for level in Level::all() {
        call(&logger, level, "m");
    }
    assert!(output.is_empty());
    assert_eq!(gate.settings().console.level.to_string(), "chatty");
}

#[test]
fn warn_threshold_scenario() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(true).console_level("warn"));
    let logger = gate.logger("X");

    logger.info("a");
    assert!(output.is_empty());

    logger.error("b");
    let records = output.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(
        records[0].args.values(),
        &[Value::from("[X]"), Value::from("b")]
    );
}

#[test]
fn every_instance_gets_its_own_tag() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(true).console_level("trace"));
    let a = gate.logger("alpha");
    let b = gate.logger("beta");

    a.info("one");
    b.warn(args!["two", json!({"n": 2})]);
    a.trace("three");

    assert_eq!(
        output.lines(),
        vec!["[alpha] one", "[beta] two { n: 2 }", "[alpha] three"]
    );
}

#[test]
fn reconfigure_reaches_existing_loggers() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(true));
    let early = gate.logger("early");

    early.debug("before");
    assert!(output.is_empty());

    early.global_reconfigure(&ConfigPatch::new().console_level("debug"));
    let late = gate.logger("late");
    early.debug("after");
    late.debug("after");

    assert_eq!(output.lines(), vec!["[early] after", "[late] after"]);
}

#[test]
fn replicants_requires_flag_and_enabled_console() {
    let (gate, output) = gate(&ConfigPatch::new().console_enabled(true));
    let logger = gate.logger("testClient");

    logger.replicants("replicants");
    assert!(output.is_empty());

    gate.reconfigure(&ConfigPatch::new().replicants(true));
    assert!(gate.settings().replicants);
    logger.replicants("replicants");
    assert_eq!(output.lines(), vec!["[testClient] replicants"]);
    assert_eq!(output.records()[0].level, Level::Info);

    output.clear();
    gate.reconfigure(&ConfigPatch::new().console_enabled(false));
    logger.replicants("replicants");
    assert!(output.is_empty());
}

#[test]
fn replicants_ignores_threshold() {
    let (gate, output) = gate(
        &ConfigPatch::new()
            .console_enabled(true)
            .console_level("error")
            .replicants(true),
    );
    gate.logger("r").replicants("still here");
    assert_eq!(output.lines(), vec!["[r] still here"]);
}

#[test]
fn families_are_independent() {
    let (first, first_out) = gate(&ConfigPatch::new().console_enabled(true));
    let (second, second_out) = gate(&ConfigPatch::new().console_enabled(true));

    first.reconfigure(&ConfigPatch::new().console_enabled(false));
    first.logger("a").info("x");
    second.logger("b").info("y");

    assert!(first_out.is_empty());
    assert_eq!(second_out.lines(), vec!["[b] y"]);
}

#[test]
fn file_section_is_ignored_for_gating() {
    let (gate, output) = gate(&ConfigPatch::new().file_enabled(true).file_level("trace"));
    gate.logger("x").info("m");
    assert!(output.is_empty());
}
