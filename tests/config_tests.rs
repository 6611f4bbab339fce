use predicates::str::contains;
use staffbot::config::Config;
use staffbot::core::config::ConfigLogic;
use staffbot::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::sb;

/// Fresh fake home directory holding `.staffbot/staffbot.conf` with `yaml`.
fn home_with_config(name: &str, yaml: &str) -> PathBuf {
    let home = env::temp_dir().join(format!("{name}_staffbot_home"));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(home.join(".staffbot")).unwrap();
    fs::write(home.join(".staffbot").join("staffbot.conf"), yaml).unwrap();
    home
}

#[test]
fn test_full_config_loads() {
    let cfg = Config::from_yaml(
        "database: /tmp/bot.sqlite\ncommand_prefix: \"?\"\napprovers: [alice, josé]\n",
    )
    .unwrap();
    assert_eq!(cfg.command_prefix, "?");
    assert_eq!(cfg.approvers, vec!["alice", "josé"]);
}

#[test]
fn test_missing_optional_keys_take_defaults() {
    let cfg = Config::from_yaml("database: /tmp/bot.sqlite\n").unwrap();
    assert_eq!(cfg.command_prefix, "!");
    assert!(cfg.approvers.is_empty());
}

#[test]
fn test_empty_prefix_is_rejected() {
    let err = Config::from_yaml("database: /tmp/bot.sqlite\ncommand_prefix: \"\"\n").unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("command_prefix")));
}

#[test]
fn test_prefix_with_spaces_is_rejected() {
    let err = Config::from_yaml("database: /tmp/bot.sqlite\ncommand_prefix: \"! \"\n").unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("command_prefix")));
}

#[test]
fn test_unmentionable_approver_is_rejected() {
    for bad in ["\"bob smith\"", "\"<@bob>\"", "\"a:b\"", "\"\""] {
        let yaml = format!("database: /tmp/bot.sqlite\napprovers: [alice, {bad}]\n");
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(
            matches!(err, AppError::Config(ref m) if m.contains("approvers")),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_empty_database_is_rejected() {
    let err = Config::from_yaml("database: \"  \"\n").unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("database")));
}

#[test]
fn test_check_reports_missing_file() {
    let path = env::temp_dir().join("staffbot_no_such_config.conf");
    fs::remove_file(&path).ok();
    let err = ConfigLogic::check(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("staffbot init")));
}

#[test]
fn test_explicit_editor_wins() {
    assert_eq!(ConfigLogic::resolve_editor(Some("micro")), "micro");
}

#[cfg(unix)]
#[test]
fn test_cli_check_accepts_valid_file() {
    let home = home_with_config("cfg_ok", "database: /tmp/bot.sqlite\napprovers: [alice]\n");

    sb().env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("is valid"));
}

#[cfg(unix)]
#[test]
fn test_cli_check_reports_bad_prefix() {
    let home = home_with_config("cfg_bad", "database: /tmp/bot.sqlite\ncommand_prefix: \"\"\n");

    sb().env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("command_prefix"));

    // the broken file can still be printed
    sb().env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("command_prefix"));
}

#[cfg(unix)]
#[test]
fn test_cli_edit_validates_saved_file() {
    // `true` leaves the file untouched and exits 0
    let home = home_with_config("cfg_edit", "database: /tmp/bot.sqlite\napprovers: [\"x y\"]\n");

    sb().env("HOME", &home)
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .failure()
        .stderr(contains("approvers"));

    fs::write(
        home.join(".staffbot").join("staffbot.conf"),
        "database: /tmp/bot.sqlite\napprovers: [alice]\n",
    )
    .unwrap();

    sb().env("HOME", &home)
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("1 approver(s)"));
}

#[cfg(unix)]
#[test]
fn test_cli_edit_reports_failing_editor() {
    let home = home_with_config("cfg_false", "database: /tmp/bot.sqlite\n");

    sb().env("HOME", &home)
        .args(["config", "--edit", "--editor", "false"])
        .assert()
        .failure()
        .stderr(contains("editor `false`"));
}
