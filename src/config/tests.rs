// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, KEYS, paths};
use crate::error::ConfigError;
use crate::push::PushMode;
use std::time::Duration;

/// Loads `content` through a real settings file.
fn load_str(content: &str) -> crate::error::Result<Config> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    Config::load_file(&path)
}

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    defaults.branch      = main
    defaults.remote      = origin
    history.max_entries  = 20
    push.auto_push       = true
    push.max_concurrency = 5
    push.parallel        = true
    push.timeout_secs    = (not set)
    ui.show_emoji        = true
    ui.use_colors        = true
    user.email           = (not set)
    user.name            = (not set)
    ");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[user]
name = "Ada"

[defaults]
branch = "develop"

[push]
parallel = false
timeout_secs = 90
"#;
    let config = load_str(toml).unwrap();
    assert_eq!(config.user.name, "Ada");
    assert_eq!(config.user.email, "");
    assert_eq!(config.defaults.branch, "develop");
    assert_eq!(config.defaults.remote, "origin");
    assert_eq!(config.push.mode(), PushMode::Sequential);
    assert_eq!(config.push.timeout(), Some(Duration::from_secs(90)));
    assert_eq!(config.history.max_entries, 20);
}

#[test]
fn test_parallel_mode_uses_max_concurrency() {
    let config = load_str("[push]\nmax_concurrency = 3\n").unwrap();
    assert_eq!(
        config.push.mode(),
        PushMode::Parallel { max_concurrency: 3 }
    );
}

#[test]
fn test_unknown_section_key_rejected() {
    assert!(load_str("[push]\nretries = 3\n").is_err());
}

#[test]
fn test_invalid_default_branch_rejected() {
    let err = load_str("[defaults]\nbranch = \"bad name\"\n").unwrap_err();
    assert!(err.to_string().contains("defaults.branch"), "{err}");
}

#[test]
fn test_layering_later_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    let user = dir.path().join("config.toml");
    std::fs::write(&user, "[defaults]\nremote = \"upstream\"\n[ui]\nshow_emoji = false\n").unwrap();
    std::fs::write(
        paths::local_config_path(dir.path()),
        "[defaults]\nremote = \"mirror\"\n",
    )
    .unwrap();

    let loader = Config::builder()
        .add_toml_file_optional(&user)
        .add_toml_file_optional(paths::local_config_path(dir.path()));
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.defaults.remote, "mirror");
    assert!(!config.ui.show_emoji);
}

#[test]
fn test_missing_optional_file_is_not_listed() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("config.toml");
    std::fs::write(&present, "[history]\nmax_entries = 5\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .add_toml_file_optional(&present);

    let listed = loader.format_loaded_files();
    assert_eq!(listed, vec![format!("1. [file] {}", present.display())]);
    assert_eq!(loader.build().unwrap().history.max_entries, 5);
}

#[test]
fn test_invalid_toml_fails() {
    assert!(load_str("[push\nparallel = ").is_err());
}

#[test]
fn test_env_overrides_files() {
    let dir = tempfile::tempdir().unwrap();
    let user = dir.path().join("config.toml");
    std::fs::write(&user, "[push]\nmax_concurrency = 2\n").unwrap();

    // SAFETY: the variable name is unique to this test
    unsafe { std::env::set_var("GWTESTENV_PUSH__MAX_CONCURRENCY", "7") };
    let config = Config::builder()
        .add_toml_file_optional(&user)
        .with_env_prefix("GWTESTENV")
        .build()
        .unwrap();
    // SAFETY: Same as above
    unsafe { std::env::remove_var("GWTESTENV_PUSH__MAX_CONCURRENCY") };

    assert_eq!(config.push.max_concurrency, 7);
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set_key("user.email", "ada@example.com").unwrap();
    config.set_key("push.timeout_secs", "30").unwrap();
    config.set_key("defaults.remote", "upstream").unwrap();
    config.save(&path).unwrap();

    let reloaded = Config::load_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_load_file_missing_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_file(dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_set_key_parses_values() {
    let mut config = Config::default();
    config.set_key("push.parallel", "off").unwrap();
    config.set_key("ui.use_colors", "No").unwrap();
    config.set_key("push.max_concurrency", " 8 ").unwrap();
    config.set_key("history.max_entries", "50").unwrap();

    assert!(!config.push.parallel);
    assert!(!config.ui.use_colors);
    assert_eq!(config.push.max_concurrency, 8);
    assert_eq!(config.history.max_entries, 50);

    config.set_key("push.timeout_secs", "15").unwrap();
    config.set_key("push.timeout_secs", "none").unwrap();
    assert_eq!(config.push.timeout_secs, None);
}

#[test]
fn test_set_key_errors() {
    let mut config = Config::default();

    let err = config.set_key("push.retries", "3").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKey { ref key } if key == "push.retries"));

    let err = config.set_key("push.parallel", "maybe").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'push.parallel': expected true or false, got 'maybe'");

    let err = config.set_key("push.max_concurrency", "-1").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = config.set_key("defaults.branch", "feature..x").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "defaults.branch"));
    assert_eq!(config.defaults.branch, "main");
}

#[test]
fn test_toggle_key() {
    let mut config = Config::default();
    assert!(!config.toggle_key("push.auto_push").unwrap());
    assert!(config.toggle_key("push.auto_push").unwrap());
    assert!(!config.toggle_key("ui.show_emoji").unwrap());

    let err = config.toggle_key("user.name").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'user.name': not a boolean setting");

    assert!(matches!(
        config.toggle_key("nope").unwrap_err(),
        ConfigError::UnknownKey { .. }
    ));
}

#[test]
fn test_every_listed_key_is_settable() {
    for key in KEYS {
        let value = match *key {
            "defaults.branch" => "main",
            "defaults.remote" => "origin",
            "user.name" | "user.email" => "x",
            "push.max_concurrency" | "push.timeout_secs" | "history.max_entries" => "1",
            _ => "true",
        };
        Config::default()
            .set_key(key, value)
            .unwrap_or_else(|e| panic!("{key}: {e}"));
    }
}

#[test]
fn test_history_path_follows_config() {
    let path = paths::history_path_for(std::path::Path::new("/tmp/gw/config.toml"));
    assert_eq!(path, std::path::PathBuf::from("/tmp/gw/history.json"));
}
