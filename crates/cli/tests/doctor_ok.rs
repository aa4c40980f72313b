use assert_cmd::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn doctor_reports_resolved_settings() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(
        &cfg_path,
        r#"
version = 1

[wizard]
free_by_default = true

[export]
dir = "/tmp/exports"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("rota"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap(), "doctor"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   rota doctor"))
        .stdout(predicates::str::contains("wizard.free_by_default: true"))
        .stdout(predicates::str::contains("export.dir: /tmp/exports"))
        .stdout(predicates::str::contains("logging.level: debug"));
}

#[test]
fn doctor_without_config_uses_defaults() {
    let tmp = tempdir().unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("rota"));
    // Point the default config path at an empty directory.
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.env("NO_COLOR", "1");
    cmd.arg("doctor");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   rota doctor"))
        .stdout(predicates::str::contains("wizard.free_by_default: false"))
        .stdout(predicates::str::contains("logging.level: info"));
}
