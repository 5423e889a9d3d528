// src/runner.rs
use std::io;
use std::process::Stdio;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::config::AppConfig;
use crate::errors::{EvalMockError, Result};
use crate::reader::{LineReader, ScanError, TeeReader};

/// Environment variable the evaluator reads to locate its record file.
pub const RECORD_PATH_ENV: &str = "OAIEVAL_RECORD_PATH";

/// One decoded line of evaluator output.
///
/// Only `final_report` is interpreted; everything else is carried through
/// `extra` so the matched line round-trips into the response unchanged.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub final_report: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    /// Whether this line carries the terminal report.
    pub fn has_final_report(&self) -> bool {
        self.final_report.as_ref().is_some_and(|m| !m.is_empty())
    }
}

/// Runs one end-to-end evaluation: decode the model identifier, spawn the
/// evaluator against a scratch record file, then scan that file for the
/// first line with a non-empty `final_report`.
///
/// The scratch file is deleted on every exit path, including cancellation:
/// the `NamedTempFile` guard travels with this future and unlinks on drop.
pub async fn run_eval(config: &AppConfig, body: &[u8]) -> Result<Report> {
    let model: String = serde_json::from_slice(body).map_err(EvalMockError::Decode)?;

    let scratch = scratch_file(&model)?;

    let status = Command::new(&config.evaluator)
        .arg(&model)
        .env(RECORD_PATH_ENV, scratch.path())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(config.kill_on_disconnect)
        .status()
        .await
        .map_err(|e| EvalMockError::Subprocess(e.to_string()))?;

    if !status.success() {
        return Err(EvalMockError::Subprocess(format!(
            "evaluator exited with {status}"
        )));
    }

    // The record file is complete once the evaluator exits; scan it off the
    // async runtime since the reads are plain blocking I/O.
    tokio::task::spawn_blocking(move || scan_final_report(&scratch))
        .await
        .map_err(scan_join_error)?
}

/// A scan task that panicked or was cancelled is a scan-phase failure, not an
/// evaluator failure.
fn scan_join_error(e: tokio::task::JoinError) -> EvalMockError {
    EvalMockError::Scan(ScanError::Read(io::Error::other(e)))
}

/// Creates the request-unique scratch file in the system temp directory,
/// named after the model for traceability.
fn scratch_file(model: &str) -> Result<NamedTempFile> {
    let tag = model.replace(['/', '\\'], "_");
    let scratch = tempfile::Builder::new()
        .prefix(&format!("eval-{tag}-"))
        .suffix(".jsonl")
        .tempfile()?;
    Ok(scratch)
}

/// Scans the record file for the first line whose `final_report` is
/// non-empty, mirroring the bytes to stdout as they are read.
fn scan_final_report(scratch: &NamedTempFile) -> Result<Report> {
    let file = scratch.reopen()?;
    let mut reader = LineReader::new(TeeReader::new(file, io::stdout()));

    let mut report = Report::default();
    while reader.read_next(&mut report) {
        if report.has_final_report() {
            return Ok(report);
        }
    }

    if let Some(err) = reader.take_error() {
        return Err(err.into());
    }

    Err(EvalMockError::MissingReport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn report_detects_non_empty_final_report() {
        let line: Report =
            serde_json::from_str(r#"{"final_report":{"accuracy":0.9},"run_id":"r1"}"#).unwrap();
        assert!(line.has_final_report());
        assert_eq!(line.extra.get("run_id"), Some(&Value::from("r1")));
    }

    #[test]
    fn report_ignores_absent_or_empty_final_report() {
        let absent: Report = serde_json::from_str(r#"{"run_id":"r1"}"#).unwrap();
        assert!(!absent.has_final_report());

        let empty: Report = serde_json::from_str(r#"{"final_report":{}}"#).unwrap();
        assert!(!empty.has_final_report());
    }

    #[test]
    fn report_round_trips_extra_fields() {
        let raw = r#"{"final_report":{"accuracy":0.9},"run_id":"r1","created_at":"now"}"#;
        let line: Report = serde_json::from_str(raw).unwrap();
        let encoded: Value = serde_json::to_value(&line).unwrap();

        assert_eq!(encoded["final_report"]["accuracy"], Value::from(0.9));
        assert_eq!(encoded["run_id"], Value::from("r1"));
        assert_eq!(encoded["created_at"], Value::from("now"));
    }

    #[test]
    fn scratch_file_name_carries_model_tag() {
        let scratch = scratch_file("gpt-4/mini").unwrap();
        let name = scratch.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("eval-gpt-4_mini-"), "got {name}");
        assert!(name.ends_with(".jsonl"), "got {name}");
    }

    #[test]
    fn scan_finds_first_matching_line() {
        let scratch = scratch_file("test").unwrap();
        writeln!(scratch.as_file(), r#"{{"run_id":"r1"}}"#).unwrap();
        writeln!(
            scratch.as_file(),
            r#"{{"final_report":{{"score":2}},"run_id":"r1"}}"#
        )
        .unwrap();
        writeln!(scratch.as_file(), r#"{{"final_report":{{"score":3}}}}"#).unwrap();

        let report = scan_final_report(&scratch).unwrap();
        assert_eq!(
            report.final_report.as_ref().and_then(|m| m.get("score")),
            Some(&Value::from(2))
        );
    }

    #[test]
    fn scan_without_final_report_is_an_error() {
        let scratch = scratch_file("test").unwrap();
        writeln!(scratch.as_file(), r#"{{"run_id":"r1"}}"#).unwrap();

        let err = scan_final_report(&scratch).unwrap_err();
        assert!(matches!(err, EvalMockError::MissingReport));
    }

    #[test]
    fn scan_surfaces_decode_errors() {
        let scratch = scratch_file("test").unwrap();
        writeln!(scratch.as_file(), "not json").unwrap();

        let err = scan_final_report(&scratch).unwrap_err();
        assert!(matches!(err, EvalMockError::Scan(_)));
    }

    #[tokio::test]
    async fn scan_task_failure_maps_to_scan_error() {
        let join_err = tokio::task::spawn_blocking(|| panic!("scan worker died"))
            .await
            .unwrap_err();
        assert!(matches!(scan_join_error(join_err), EvalMockError::Scan(_)));
    }

    #[tokio::test]
    async fn run_eval_rejects_malformed_body() {
        let config = AppConfig::default();
        let err = run_eval(&config, b"{not a string").await.unwrap_err();
        assert!(matches!(err, EvalMockError::Decode(_)));
    }
}
