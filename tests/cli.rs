mod common;

use std::process::Command;

fn biosim() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_biosim"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_years_override_and_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let run_file = common::write_toml_run(dir.path(), 0, "");

    let output = biosim()
        .arg("--years")
        .arg("4")
        .arg("--json")
        .arg(&run_file)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["years"], 4);
    assert_eq!(summary["year_end"], 3);
    let dat = std::fs::read_to_string(dir.path().join("out/calm.dat")).unwrap();
    assert_eq!(dat.lines().filter(|l| !l.starts_with('#') && !l.starts_with("Geografi")).count(), 5);
}

#[test]
fn test_seed_override_changes_fingerprint() {
    let dir = tempfile::tempdir().unwrap();
    let run_file = common::write_toml_run(dir.path(), 0, "");

    let fingerprint = |seed: &str| {
        let output = biosim()
            .args(["--json", "--seed", seed])
            .arg(&run_file)
            .output()
            .unwrap();
        assert!(output.status.success());
        let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        summary["fingerprint"].as_str().unwrap().to_string()
    };
    assert_eq!(fingerprint("7"), fingerprint("7"));
    assert_ne!(fingerprint("7"), fingerprint("8"));
}

#[test]
fn test_failing_file_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let run_file = common::write_toml_run(dir.path(), 1, "");
    let missing = dir.path().join("missing.sim");

    let output = biosim().arg(&missing).arg(&run_file).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.sim"));
    assert!(dir.path().join("out/calm.dat").exists());
}

#[test]
fn test_zero_years_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let run_file = common::write_toml_run(dir.path(), 0, "");

    let output = biosim().args(["--years", "0"]).arg(&run_file).output().unwrap();
    assert!(!output.status.success());
    assert!(!dir.path().join("out/calm.dat").exists());
}
