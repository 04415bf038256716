use std::fs;

use addsub::render;
use assert_cmd::Command;
use tempfile::tempdir;

fn addsub() -> Command {
    Command::cargo_bin("addsub").expect("binary not built")
}

#[test]
fn render_joins_input_and_value() {
    assert_eq!(render("(13-4)-(12+1)", -4), "(13-4)-(12+1)=-4");
    assert_eq!(render("7", 7), "7=7");
}

#[test]
fn prints_result_line_and_succeeds() {
    let output = addsub().arg("10-2").output().expect("run addsub");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10-2=8\n");
}

#[test]
fn default_expression_is_evaluated() {
    let output = addsub().output().expect("run addsub");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(13-4)-(12+1)=-4\n");
}

#[test]
fn error_goes_to_stderr_with_failure_status() {
    let output = addsub().arg("2*3").output().expect("run addsub");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Error at offset 1: Unexpected character '*'."));
}

#[test]
fn balanced_flag_accepts_nested_groups() {
    let output = addsub().args(["--balanced", "((1+2)+3)"]).output().expect("run addsub");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "((1+2)+3)=6\n");

    let output = addsub().arg("((1+2)+3)").output().expect("run addsub");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn file_input_has_trailing_newline_trimmed() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("expr.txt");
    fs::write(&path, "(5-3)+10\n").unwrap();

    let output = addsub().arg("--file").arg(&path).output().expect("run addsub");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(5-3)+10=12\n");
}

#[test]
fn multi_line_file_is_rejected() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("expr.txt");
    fs::write(&path, "1+\n2\n").unwrap();

    let output = addsub().arg("-f").arg(&path).output().expect("run addsub");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("single-line expression"));
}

#[test]
fn missing_file_is_error() {
    let tmp = tempdir().unwrap();
    let output =
        addsub().arg("-f").arg(tmp.path().join("absent.txt")).output().expect("run addsub");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}

#[test]
fn dumps_and_stage_logs_go_to_stderr() {
    let output = addsub().args(["--tokens", "--tree", "-vv", "3+4"])
                         .env_remove("RUST_LOG")
                         .output()
                         .expect("run addsub");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3+4=7\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INTEGER 3"));
    assert!(stderr.contains("(3 + 4)"));
    assert!(stderr.contains("lexed 3 tokens"));
    assert!(stderr.contains("evaluated to 7"));
}
