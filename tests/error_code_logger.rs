//! End-to-end behavior of the error-code logger over an in-memory sink.

use std::io;
use std::sync::Arc;

use error_code_logger::logger::{
    ErrorCodeLogger, Level, LogFacade, Marker, MemoryFacade, ERROR_CODE_FIELD,
};
use error_code_logger::{code_error, code_info};

mod common;

#[test]
fn test_catalog_hit_formatting() {
    let (log, sink) = common::memory_logger("hit");
    log.info("GREET-100", &[&"X"]);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "GREET-100 - Hello X");
}

#[test]
fn test_catalog_miss_tolerates_extra_args() {
    let (log, sink) = common::memory_logger("miss");
    log.info("Hi {}", &[&"a", &"b"]);

    let record = &sink.records()[0];
    assert_eq!(record.message, "Hi a");
    assert_eq!(record.args, vec!["a", "b"]);
}

#[test]
fn test_error_field_is_raw_code() {
    let (log, sink) = common::memory_logger("fields");
    log.warn("APP-200-404", &[&7]);
    log.warn("NOT-IN-CATALOG {}", &[&7]);

    let records = sink.records();
    let code_field = |code: &str| vec![(ERROR_CODE_FIELD.to_string(), code.to_string())];
    assert_eq!(records[0].fields, code_field("APP-200-404"));
    assert_eq!(records[0].message, "APP-200-404 - Account 7 not found");
    assert_eq!(records[1].fields, code_field("NOT-IN-CATALOG {}"));
    assert_eq!(records[1].message, "NOT-IN-CATALOG 7");
}

#[test]
fn test_severity_fidelity() {
    type Shim = fn(&ErrorCodeLogger, &str, &[&dyn std::fmt::Display]);
    let shims: [(Level, Shim); 5] = [
        (Level::Trace, ErrorCodeLogger::trace),
        (Level::Debug, ErrorCodeLogger::debug),
        (Level::Info, ErrorCodeLogger::info),
        (Level::Warn, ErrorCodeLogger::warn),
        (Level::Error, ErrorCodeLogger::error),
    ];

    for (level, shim) in shims {
        let (log, sink) = common::memory_logger("levels");
        shim(&log, "APP-200-404", &[&1]);

        let records = sink.take();
        assert_eq!(records.len(), 1, "{level}");
        assert_eq!(records[0].level, level);
    }
}

#[test]
fn test_severity_fidelity_for_error_and_marker_shapes() {
    let (log, sink) = common::memory_logger("shapes");
    let marker = Marker::from_static("OPS");
    let err = io::Error::other("boom");

    log.trace_with_error("APP-100-400", &err);
    log.debug_marked(&marker, "APP-100-400", &[]);
    log.info_marked_with_error(&marker, "APP-100-400", &err);
    log.warn_with_error("APP-100-400", &err);
    log.error_marked(&marker, "APP-100-400", &[&"x"]);

    let levels: Vec<Level> = sink.records().iter().map(|r| r.level).collect();
    assert_eq!(levels, Level::ALL);
}

#[test]
fn test_marker_pass_through() {
    let (log, sink) = common::memory_logger("markers");
    let security = Marker::new("SECURITY");

    log.error_marked(&security, "APP-100-400", &[&"ops@example.com"]);
    log.error("APP-100-400", &[&"ops@example.com"]);

    let records = sink.records();
    assert_eq!(records[0].marker, Some(security));
    assert_eq!(records[1].marker, None);
    assert_eq!(records[0].message, records[1].message);
}

#[test]
fn test_error_pass_through_without_substitution() {
    let (log, sink) = common::memory_logger("errors");
    let err = io::Error::new(io::ErrorKind::TimedOut, "connect timed out");

    log.error_with_error("APP-100-504", &err);
    log.error_with_error("RAW {}", &err);

    let records = sink.records();
    assert_eq!(records[0].message, "APP-100-504 - Mail server {} did not respond within {} ms");
    assert_eq!(records[0].error.as_deref(), Some("connect timed out"));
    assert!(records[0].args.is_empty());
    assert_eq!(records[1].message, "RAW {}");
    assert_eq!(records[1].field(ERROR_CODE_FIELD), Some("RAW {}"));
}

#[test]
fn test_resolution_is_idempotent() {
    let (log, sink) = common::memory_logger("idempotent");
    for _ in 0..2 {
        log.info("APP-100-504", &[&"smtp-1", &250]);
    }

    let records = sink.records();
    assert_eq!(records[0], records[1]);
    assert_eq!(
        records[0].message,
        "APP-100-504 - Mail server smtp-1 did not respond within 250 ms"
    );
}

#[test]
fn test_macros_match_method_calls() {
    let (log, sink) = common::memory_logger("macros");
    code_info!(log, "APP-100-504", "smtp-1", 250);
    log.info("APP-100-504", &[&"smtp-1", &250]);
    code_error!(log, marker: Marker::from_static("OPS"), "APP-200-404", 3);

    let records = sink.records();
    assert_eq!(records[0], records[1]);
    assert_eq!(records[2].level, Level::Error);
    assert_eq!(records[2].message, "APP-200-404 - Account 3 not found");
}

#[test]
fn test_disabled_levels_do_not_emit() {
    let sink = Arc::new(MemoryFacade::with_min_level("quiet", Level::Error));
    let log = ErrorCodeLogger::new(sink.clone(), common::test_catalog());

    log.trace("APP-200-404", &[&1]);
    log.warn("APP-200-404", &[&1]);
    assert!(sink.is_empty());
    assert!(!log.is_warn_enabled());
    assert_eq!(log.is_enabled(Level::Error, None), sink.is_enabled(Level::Error, None));

    log.error("APP-200-404", &[&1]);
    assert_eq!(sink.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_do_not_mix() {
    let (log, sink) = common::memory_logger("concurrent");
    let tasks = 64;
    let per_task = 50;

    let mut handles = Vec::with_capacity(tasks);
    for task in 0..tasks {
        let log = log.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..per_task {
                let account = format!("acct-{task}-{i}");
                if task % 2 == 0 {
                    log.warn("APP-200-404", &[&account]);
                } else {
                    log.info("MISS-{} {}", &[&task, &account]);
                }
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let records = sink.records();
    assert_eq!(records.len(), tasks * per_task);

    for record in &records {
        match record.level {
            Level::Warn => {
                assert_eq!(record.field(ERROR_CODE_FIELD), Some("APP-200-404"));
                assert_eq!(record.args.len(), 1);
                let expected = format!("APP-200-404 - Account {} not found", record.args[0]);
                assert_eq!(record.message, expected);
            }
            Level::Info => {
                assert_eq!(record.field(ERROR_CODE_FIELD), Some("MISS-{} {}"));
                assert_eq!(record.args.len(), 2);
                assert_eq!(record.message, format!("MISS-{} {}", record.args[0], record.args[1]));
                assert!(record.args[1].starts_with(&format!("acct-{}-", record.args[0])));
            }
            other => panic!("unexpected level {other}"),
        }
    }
}
