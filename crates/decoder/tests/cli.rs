//! Runs the `zerd-decode` binary and checks its output and exit codes.

#![expect(unused_crate_dependencies, reason = "test dependencies")]

use std::process::{Command, Output};

const HELLO_SCRIPT_SIG: &str = "036f7264510a746578742f706c61696e000568656c6c6f";

/// Same envelope with `OP_2` where the protocol id belongs.
const WRONG_PROTOCOL_SCRIPT_SIG: &str = "036f7264520a746578742f706c61696e000568656c6c6f";

fn zerd_decode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zerd-decode"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("test: should run zerd-decode")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn error_line(out: &Output) -> String {
    stderr(out)
        .lines()
        .find(|l| l.starts_with("Error: "))
        .unwrap_or_else(|| panic!("test: no error line in {:?}", stderr(out)))
        .to_owned()
}

#[test]
fn tx_found_prints_json() {
    let out = zerd_decode(&["--tx", HELLO_SCRIPT_SIG]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = stdout(&out);
    assert!(stdout.contains(r#""content_type": "text/plain""#), "{stdout}");
    assert!(stdout.contains(r#""content": "hello""#), "{stdout}");
}

#[test]
fn tx_not_found_exits_one() {
    let out = zerd_decode(&["--tx", WRONG_PROTOCOL_SCRIPT_SIG]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out).trim_end(), "No inscription found in scriptSig");
    assert!(!stderr(&out).contains("missing OP_1"));
}

#[test]
fn tx_explain_logs_reason_at_warn() {
    let out = zerd_decode(&["--tx", WRONG_PROTOCOL_SCRIPT_SIG, "--explain"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out).trim_end(), "No inscription found in scriptSig");

    let stderr = stderr(&out);
    assert!(stderr.contains("WARN"), "{stderr}");
    assert!(stderr.contains("missing OP_1 protocol id at offset 4"), "{stderr}");
}

#[test]
fn tx_invalid_hex_is_an_error() {
    let out = zerd_decode(&["--tx", "036f72645"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(error_line(&out).contains("failed to decode scriptSig"));
}

#[test]
fn direct_decode_prints_json() {
    let out = zerd_decode(&["0x6869"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = stdout(&out);
    assert!(stdout.contains(r#""decoded": "hi""#), "{stdout}");
    assert!(stdout.contains(r#""encoding": "utf-8""#), "{stdout}");
}

#[test]
fn direct_invalid_hex_is_reported_once() {
    let out = zerd_decode(&["zz"]);
    assert_eq!(out.status.code(), Some(1));

    let line = error_line(&out);
    assert!(line.starts_with("Error: failed to decode hex: invalid hex string: "), "{line}");
    assert_eq!(line.matches("invalid hex string").count(), 1, "{line}");
}

#[test]
fn unknown_encoding_is_an_error() {
    let out = zerd_decode(&["6869", "ebcdic"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(error_line(&out), "Error: unknown encoding: ebcdic");
}

#[test]
fn missing_arguments_is_a_usage_error() {
    let out = zerd_decode(&[]);
    assert_eq!(out.status.code(), Some(2));
}
