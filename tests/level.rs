//! Tests for log level and threshold functionality.

use prefixlog::{Level, Threshold};

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
    assert_eq!(Threshold::default(), Threshold::At(Level::Info));
}

#[test]
fn rank_and_severity_run_in_opposite_directions() {
    let ranks: Vec<u8> = Level::all().iter().map(|l| l.rank()).collect();
    let severities: Vec<u8> = Level::all().iter().map(|l| l.severity()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    assert_eq!(severities, vec![4, 3, 2, 1, 0]);
}

#[test]
fn threshold_admits_at_or_above() {
    for min in Level::all() {
        let threshold = Threshold::At(min);
        for level in Level::all() {
            assert_eq!(
                threshold.admits(level),
                level >= min,
                "min={min} level={level}"
            );
        }
    }
}

#[test]
fn threshold_from_names() {
    assert_eq!(Threshold::from("warn"), Threshold::At(Level::Warn));
    assert_eq!(Threshold::from("infinite"), Threshold::Infinite);
    assert_eq!(Threshold::from("_infinite"), Threshold::Infinite);
    assert_eq!(
        Threshold::from("verbose"),
        Threshold::Unrecognized("verbose".to_string())
    );
    // Thresholds are strict; aliases accepted by `FromStr` are not level names here.
    assert_eq!(
        Threshold::from("WARN"),
        Threshold::Unrecognized("WARN".to_string())
    );
}

#[test]
fn infinite_and_unrecognized_admit_nothing() {
    for threshold in [Threshold::Infinite, Threshold::from("loud")] {
        for level in Level::all() {
            assert!(!threshold.admits(level));
            assert!(!threshold.admits_severity(level));
        }
    }
}

#[test]
fn threshold_display_keeps_the_configured_name() {
    assert_eq!(Threshold::from("debug").to_string(), "debug");
    assert_eq!(Threshold::Infinite.to_string(), "infinite");
    assert_eq!(Threshold::from("loud").to_string(), "loud");
    assert_eq!(Threshold::from("error").level(), Some(Level::Error));
    assert_eq!(Threshold::Infinite.level(), None);
}
