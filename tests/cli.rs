use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studio_cmd() -> Command {
    Command::cargo_bin("pixel-studio").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    studio_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pixel-art drawing surface for Wayland compositors",
        ))
        .stdout(predicate::str::contains("--paused"));
}

#[test]
fn launch_requires_wayland_env() {
    studio_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn invalid_color_is_rejected_before_connecting() {
    studio_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--color", "#12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn invalid_mode_is_rejected_before_connecting() {
    studio_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--mode", "spray"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode 'spray'"));
}

#[test]
fn init_config_writes_example_into_config_home() {
    let temp = TempDir::new().unwrap();

    studio_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("pixel-studio").join("config.toml");
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[canvas]"));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("pixel-studio");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "# mine\n").unwrap();

    studio_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let contents = std::fs::read_to_string(dir.join("config.toml")).unwrap();
    assert_eq!(contents, "# mine\n");
}
