use std::process::Command;
use tempfile::TempDir;

fn calrange() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calrange"))
}

#[test]
fn help_lists_flags() {
    let output = calrange().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--start", "--end", "--range", "--preset", "--min", "--max", "--config"] {
        assert!(stdout.contains(flag), "{flag} missing from help");
    }
}

#[test]
fn unknown_preset_is_rejected() {
    let output = calrange().args(["--preset", "fortnight"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fortnight"));
}

#[test]
fn conflicting_initial_flags_are_rejected() {
    let output = calrange()
        .args(["--start", "2024-03-01", "--range", "03/01/2024 - 03/02/2024"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn unreadable_bound_fails_before_ui() {
    let temp_dir = TempDir::new().unwrap();
    let output = calrange()
        .args(["--min", "someday", "--config"])
        .arg(temp_dir.path().join("config.toml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--min"));
}

#[test]
fn broken_config_fails_before_ui() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ndate_format = \"%Y\"\n").unwrap();
    let output = calrange().arg("--config").arg(&path).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("date_format"));
}
