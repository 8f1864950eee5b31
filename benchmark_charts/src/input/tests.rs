//!
//! The benchmark report input tests.
//!

use std::path::Path;

use super::error::Error as InputError;
use super::error::ReportError;
use super::Input;
use super::Report;

const EXEC_REPORT: &str = r#"{
    "total_blobs": 3,
    "total_blockexec_inputs": 12,
    "total_tx_count": 1520,
    "total_evm_gas": 31415926,
    "total_gas": 123456789,
    "total_instruction_count": 987654321,
    "total_syscall_count": 4242,
    "cycle_tracker_results": {
        "verify-blob-inclusion": 1200000,
        "execute-blocks": 98000000,
        "commit-outputs": 5000
    }
}"#;

#[test]
fn ok_all_fields() {
    let report: Report = EXEC_REPORT.parse().expect("Always valid");

    assert_eq!(report.total_blobs, Some(3));
    assert_eq!(report.total_blockexec_inputs, Some(12));
    assert_eq!(report.total_tx_count, Some(1520));
    assert_eq!(report.total_evm_gas, Some(31415926));
    assert_eq!(report.total_proofs, None);
    assert_eq!(report.total_gas, 123456789);
    assert_eq!(report.total_instruction_count, 987654321);
    assert_eq!(report.total_syscall_count, 4242);
    assert_eq!(report.cycle_tracker_results.len(), 3);
    assert_eq!(
        report.cycle_tracker_results.get("execute-blocks"),
        Some(&98000000)
    );
}

#[test]
fn ok_mandatory_only_with_unknown_keys() {
    let text = r#"{
        "total_gas": 1,
        "total_instruction_count": 2,
        "total_syscall_count": 3,
        "cycle_tracker_results": {},
        "proof_system": "sp1"
    }"#;

    let report: Report = text.parse().expect("Always valid");

    assert!(report.cycle_tracker_results.is_empty());
    assert_eq!(report.total_blobs, None);
    assert_eq!(report.total_proofs, None);
}

#[test]
fn error_missing_total_gas() {
    let text = r#"{
        "total_instruction_count": 2,
        "total_syscall_count": 3,
        "cycle_tracker_results": { "a": 1 }
    }"#;

    let result = text.parse::<Report>();

    assert!(matches!(
        result,
        Err(ReportError::MissingField("total_gas"))
    ));
}

#[test]
fn error_missing_syscall_count() {
    let text = r#"{
        "total_gas": 1,
        "total_instruction_count": 2,
        "cycle_tracker_results": {}
    }"#;

    let error = text.parse::<Report>().expect_err("Must fail");

    assert_eq!(error.to_string(), "missing field `total_syscall_count`");
}

#[test]
fn error_missing_cycle_tracker_results() {
    let text = r#"{
        "total_gas": 1,
        "total_instruction_count": 2,
        "total_syscall_count": 3
    }"#;

    assert!(matches!(
        text.parse::<Report>(),
        Err(ReportError::MissingField("cycle_tracker_results"))
    ));
}

#[test]
fn error_non_numeric_count() {
    let text = r#"{
        "total_gas": 1,
        "total_instruction_count": 2,
        "total_syscall_count": 3,
        "cycle_tracker_results": { "a": "many" }
    }"#;

    assert!(matches!(
        text.parse::<Report>(),
        Err(ReportError::Parsing(_))
    ));
}

#[test]
fn error_negative_total() {
    let text = r#"{
        "total_gas": -1,
        "total_instruction_count": 2,
        "total_syscall_count": 3,
        "cycle_tracker_results": {}
    }"#;

    assert!(matches!(
        text.parse::<Report>(),
        Err(ReportError::Parsing(_))
    ));
}

#[test]
fn error_not_json() {
    assert!(matches!(
        "total_gas = 1".parse::<Report>(),
        Err(ReportError::Parsing(_))
    ));
}

#[test]
fn file_ok() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("ev-exec.json");
    std::fs::write(&path, EXEC_REPORT).expect("Always valid");

    let input = Input::try_from(path.as_path()).expect("Always valid");

    assert_eq!(input.identifier(), "ev-exec.json");
    assert_eq!(input.path, path);
    assert_eq!(input.report.total_syscall_count, 4242);
}

#[test]
fn file_zero_bytes() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("empty.json");
    std::fs::write(&path, "").expect("Always valid");

    let error = Input::try_from(path.as_path()).expect_err("Always invalid");

    assert!(matches!(error, InputError::EmptyFile { .. }));
    assert!(error.to_string().contains("empty.json"));
}

#[test]
fn file_empty() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("empty.json");
    std::fs::write(&path, "  \n").expect("Always valid");

    let result = Input::try_from(path.as_path());

    assert!(matches!(result, Err(InputError::EmptyFile { .. })));
}

#[test]
fn file_missing() {
    let result = Input::try_from(Path::new("/nonexistent/benchmarks/report.json"));

    assert!(matches!(result, Err(InputError::Reading { .. })));
}

#[test]
fn file_missing_field_is_identified() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{ "total_instruction_count": 2, "total_syscall_count": 3, "cycle_tracker_results": {} }"#,
    )
    .expect("Always valid");

    let error = Input::try_from(path.as_path()).expect_err("Must fail");

    assert_eq!(error.missing_field(), Some("total_gas"));
    assert!(error.to_string().contains("broken.json"));
    assert!(error.to_string().contains("missing field `total_gas`"));
}
