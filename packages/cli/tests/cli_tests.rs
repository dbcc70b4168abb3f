//! End-to-end tests driving the `schemabuilder` binary

use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_schemabuilder"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_preview_prints_sample_json() {
    let output = bin()
        .args(["preview", "--field", "age:Number", "--field", "address.city"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let sample: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        sample,
        serde_json::json!({
            "name": "sample string",
            "age": 0,
            "address": { "city": "sample string" }
        })
    );
}

#[test]
fn test_preview_rejects_unknown_type() {
    let output = bin()
        .args(["preview", "--field", "tags:Array"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown field type 'Array'"));
}

#[test]
fn test_shell_reads_piped_script() {
    let mut child = bin()
        .args(["shell", "--empty"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add\npreview\nquit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("added field"));
    assert!(stdout.contains("\"newField\": \"sample string\""));
}
