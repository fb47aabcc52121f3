use prefixlog::output::ensure_parent_dir;
use prefixlog::{ConfigPatch, Error, FileOutput, Level, Log, LogRecord, LoggerFactory, Output, args};
use std::fs;
use tempfile::TempDir;

#[test]
fn construction_creates_the_log_folder() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("logs").join("test.log");
    assert!(!tmp_dir.path().join("logs").exists());

    let _factory = LoggerFactory::new(
        &ConfigPatch::new()
            .file_enabled(true)
            .file_path(path.to_string_lossy()),
    )
    .unwrap();

    assert!(tmp_dir.path().join("logs").is_dir());
}

#[test]
fn folder_is_created_even_while_the_sink_is_disabled() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("a").join("b").join("c.log");

    let _factory =
        LoggerFactory::new(&ConfigPatch::new().file_path(path.to_string_lossy())).unwrap();

    assert!(tmp_dir.path().join("a").join("b").is_dir());
    assert!(!path.exists());
}

#[test]
fn reconfigure_creates_the_new_folder() {
    let tmp_dir = TempDir::new().unwrap();
    let first = tmp_dir.path().join("first").join("x.log");
    let second = tmp_dir.path().join("second").join("nested").join("y.log");

    let factory = LoggerFactory::builder()
        .config(
            ConfigPatch::new()
                .file_enabled(true)
                .file_path(first.to_string_lossy()),
        )
        .timestamps(false)
        .build()
        .unwrap();
    let logger = factory.logger("mover");
    logger.info("one");

    factory
        .reconfigure(&ConfigPatch::new().file_path(second.to_string_lossy()))
        .unwrap();
    assert!(second.parent().unwrap().is_dir());
    logger.info("two");

    assert_eq!(fs::read_to_string(&first).unwrap(), "info: [mover] one\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "info: [mover] two\n");
}

#[test]
fn failed_folder_creation_propagates_and_keeps_config() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let good = tmp_dir.path().join("logs").join("ok.log");

    let factory =
        LoggerFactory::new(&ConfigPatch::new().file_path(good.to_string_lossy())).unwrap();
    let before = factory.settings();

    let bad = blocker.join("sub").join("x.log");
    let err = factory
        .reconfigure(
            &ConfigPatch::new()
                .file_path(bad.to_string_lossy())
                .file_enabled(true),
        )
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert_eq!(factory.settings(), before);
    assert_eq!(factory.file_path(), good);
}

#[test]
fn failed_folder_creation_fails_construction() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let bad = blocker.join("sub").join("x.log");

    let result = LoggerFactory::new(&ConfigPatch::new().file_path(bad.to_string_lossy()));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn file_lines_carry_timestamp_and_level() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("ts.log");
    let output = FileOutput::new(&path);

    output
        .write(&LogRecord::new(Level::Warn, args!["careful"].tagged("svc")))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let line = content.trim_end();
    let (ts, rest) = line.split_once(" - ").unwrap();
    assert_eq!(rest, "warn: [svc] careful");
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
    assert!(ts.ends_with('Z'));
}

#[test]
fn file_output_appends_multiple_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("multi.log");
    let output = FileOutput::new(&path).timestamps(false);

    output
        .write(&LogRecord::new(Level::Info, args!["one"].tagged("s")))
        .unwrap();
    output
        .write(&LogRecord::new(Level::Error, args!["two"].tagged("s")))
        .unwrap();

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["info: [s] one", "error: [s] two"]);
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    assert!(ensure_parent_dir(std::path::Path::new("plain.log")).is_ok());
}
