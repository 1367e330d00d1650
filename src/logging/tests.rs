// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    let conversions: Vec<_> = [0, 3, 5, 100]
        .into_iter()
        .map(|n| LogLevel::from_int(n).to_filter_string())
        .collect();
    insta::assert_snapshot!(conversions.join(","), @"off,info,trace,trace");
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());

    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level': log level must be 0-6, got 7");
}

#[test]
fn test_log_level_tracing_mapping() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(
        LogLevel::WARN.to_tracing_level(),
        Some(tracing::Level::WARN)
    );
    assert_eq!(
        LogLevel::DUMP.to_tracing_level(),
        Some(tracing::Level::TRACE)
    );
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(ok, LogLevel::DEBUG);
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(config.ansi());
}
