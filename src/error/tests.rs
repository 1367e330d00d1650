// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ExecutionFault, GwError, GwResult, PushError};

#[test]
fn test_unknown_remote_display() {
    let err = PushError::UnknownRemote {
        names: vec!["backup".to_string(), "mirror".to_string()],
    };
    insta::assert_snapshot!(err.to_string(), @"unknown remote(s): backup, mirror");
}

#[test]
fn test_spawn_error_classification() {
    let not_found = ExecutionFault::from_spawn_error(
        "git",
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );
    assert!(matches!(not_found, ExecutionFault::NotFound { ref program } if program == "git"));

    let denied = ExecutionFault::from_spawn_error(
        "git",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
    );
    assert!(matches!(denied, ExecutionFault::PermissionDenied { .. }));

    let other = ExecutionFault::from_spawn_error("git", std::io::Error::other("boom"));
    assert!(matches!(other, ExecutionFault::Spawn { .. }));
}

#[test]
fn test_gw_error_boxes_sub_errors() {
    let err: GwError = PushError::NoRemotes.into();
    insta::assert_snapshot!(err.to_string(), @"push error: no remotes requested");
}

#[test]
fn test_gw_error_size() {
    let size = std::mem::size_of::<GwError>();
    assert!(size <= 16, "GwError is {size} bytes, expected <= 16");
}

#[test]
fn test_gw_result_size() {
    let size = std::mem::size_of::<GwResult<()>>();
    assert!(size <= 24, "GwResult<()> is {size} bytes, expected <= 24");
}
