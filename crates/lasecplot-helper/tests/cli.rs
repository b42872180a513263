//! End-to-end checks of the helper executable

use std::process::{Command, Output};

fn helper(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lasecplot-helper"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lasecplot-helper")
}

#[test]
fn test_open_missing_port_exits_3() {
    let out = helper(&["--open", "/nonexistent/lasecplot-port", "--baud", "9600"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("/nonexistent/lasecplot-port"), "stderr: {stderr}");
    assert_eq!(stderr.matches("Failed to open").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_open_missing_port_with_read_exits_3() {
    let out = helper(&["--open", "/nonexistent/lasecplot-port", "--read", "--timeout", "100"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_usage_errors_exit_2() {
    for args in [&["--bogus"][..], &["--baud", "fast"], &["scan"]] {
        let out = helper(args);
        assert_eq!(out.status.code(), Some(2), "args: {args:?}");
        assert!(out.stdout.is_empty());

        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Usage"), "stderr: {stderr}");
    }
}

#[test]
fn test_list_prints_json_array() {
    for args in [&[][..], &["list"]] {
        let out = helper(args);
        assert_eq!(out.status.code(), Some(0));

        let value: serde_json::Value =
            serde_json::from_slice(&out.stdout).expect("stdout is not JSON");
        let ports = value.as_array().expect("inventory is not an array");
        for port in ports {
            let obj = port.as_object().unwrap();
            assert_eq!(obj.len(), 9);
            assert!(obj["path"].is_string());
            assert!(obj["isVirtual"].is_boolean());
        }
    }
}
