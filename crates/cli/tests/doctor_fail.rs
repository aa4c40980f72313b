use assert_cmd::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn doctor_fails_on_missing_explicit_config() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("rota"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap(), "doctor"]);

    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("FAIL rota doctor"))
        .stdout(predicates::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_unsupported_version() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(&cfg_path, "version = 7\n").unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("rota"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap(), "doctor"]);

    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("FAIL rota doctor"))
        .stdout(predicates::str::contains("version 7 is unsupported"));
}
