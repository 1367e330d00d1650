// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use crate::core::runner::SystemRunner;
use crate::error::{GwError, RemoteError};
use crate::git::query::{
    AheadBehind, ChangedFile, ahead_behind, changed_files, parse_ahead_behind, parse_porcelain_z,
};
use crate::git::remote::{RemoteRegistry, RemoteTarget, add_remote, remove_remote, set_remote_url};
use crate::git::validate::{is_valid_branch_name, validate_remote_name, validate_remote_url};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Initialize a git repository with an initial commit.
fn init_test_repo_with_commit(path: &Path) {
    let steps: [&[&str]; 4] = [
        &["init", "--quiet"],
        &["config", "user.email", "test@example.com"],
        &["config", "user.name", "Test"],
        &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
    ];
    for args in steps {
        let output = Command::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .expect("git should run");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// --- validation ---

#[test]
fn test_validate_branch_name_valid() {
    for name in ["main", "feature/new-feature", "bugfix-123", "release-v1.0.0"] {
        assert!(is_valid_branch_name(name), "{name} should be valid");
    }
}

#[test]
fn test_validate_branch_name_invalid() {
    for name in [
        "",
        "feature branch",
        "feature~123",
        "feature^123",
        "feature:123",
        "feature?123",
        "feature*123",
        "feature[123]",
        "back\\slash",
        "-feature",
        "feature.",
        "feature.lock",
        "feature..branch",
    ] {
        assert!(!is_valid_branch_name(name), "{name:?} should be invalid");
    }
}

#[test]
fn test_validate_remote_url() {
    for url in [
        "https://github.com/user/repo.git",
        "http://gitlab.com/user/repo.git",
        "git@github.com:user/repo.git",
        "ssh://git@github.com/user/repo.git",
        "file:///path/to/repo",
        "/path/to/repo",
        "../repo",
    ] {
        assert!(validate_remote_url(url).is_ok(), "{url} should be valid");
    }

    for url in ["", "not-a-url", "ftp://example.com"] {
        assert_eq!(
            validate_remote_url(url),
            Err(RemoteError::InvalidUrl {
                url: url.to_string()
            })
        );
    }
}

#[test]
fn test_validate_remote_name() {
    assert!(validate_remote_name("origin").is_ok());
    assert_eq!(validate_remote_name(""), Err(RemoteError::EmptyName));
    assert!(matches!(
        validate_remote_name("has space"),
        Err(RemoteError::InvalidName { .. })
    ));
}

// --- registry ---

#[test]
fn test_parse_remote_verbose() {
    let output = "\
origin\tgit@github.com:me/repo.git (fetch)
origin\tgit@github.com:me/repo.git (push)
backup\t/srv/git/repo.git (fetch)
backup\t/srv/git/other.git (push)
mirror\thttps://example.com/repo.git (push)
garbage
";
    let registry = RemoteRegistry::parse_verbose(output);

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, ["origin", "backup", "mirror"]);
    assert_eq!(
        registry.get("backup").map(RemoteTarget::url),
        Some("/srv/git/repo.git")
    );
    assert_eq!(
        registry.get("mirror").map(RemoteTarget::url),
        Some("https://example.com/repo.git")
    );
}

#[test]
fn test_registry_rejects_empty_and_duplicate_names() {
    let mut registry = RemoteRegistry::new();
    registry
        .insert(RemoteTarget::new("origin", "/a"))
        .expect("first insert");

    assert_eq!(
        registry.insert(RemoteTarget::new("origin", "/b")),
        Err(RemoteError::DuplicateName {
            name: "origin".to_string()
        })
    );
    assert_eq!(
        registry.insert(RemoteTarget::new("", "/c")),
        Err(RemoteError::EmptyName)
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_remove() {
    let mut registry = RemoteRegistry::from_targets([
        RemoteTarget::new("origin", "/a"),
        RemoteTarget::new("backup", "/b"),
    ])
    .expect("valid registry");

    let removed = registry.remove("origin").expect("origin exists");
    assert_eq!(removed.name(), "origin");
    assert!(!registry.contains("origin"));
    assert_eq!(
        registry.remove("origin"),
        Err(RemoteError::NotFound {
            name: "origin".to_string()
        })
    );
}

// --- status parsing ---

#[test]
fn test_parse_porcelain_z() {
    let output = " M src/lib.rs\0?? new file.txt\0R  renamed.rs\0original.rs\0A  added.rs\0";
    let files = parse_porcelain_z(output);

    assert_eq!(
        files,
        vec![
            ChangedFile {
                status: " M".to_string(),
                path: "src/lib.rs".to_string()
            },
            ChangedFile {
                status: "??".to_string(),
                path: "new file.txt".to_string()
            },
            ChangedFile {
                status: "R ".to_string(),
                path: "renamed.rs".to_string()
            },
            ChangedFile {
                status: "A ".to_string(),
                path: "added.rs".to_string()
            },
        ]
    );
    assert!(files[1].is_untracked());
    assert!(!files[0].is_staged());
    assert!(files[3].is_staged());
}

#[test]
fn test_parse_ahead_behind() {
    assert_eq!(
        parse_ahead_behind("3\t1\n"),
        Some(AheadBehind {
            ahead: 3,
            behind: 1
        })
    );
    assert_eq!(parse_ahead_behind(""), None);
    assert_eq!(parse_ahead_behind("x y"), None);
}

// --- against a real repository ---

#[tokio::test]
async fn test_changed_files_in_repo() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    std::fs::write(temp.path().join("a.txt"), "a").expect("write");
    std::fs::write(temp.path().join("b.txt"), "b").expect("write");

    let runner = SystemRunner::new();
    let files = changed_files(&runner, temp.path())
        .await
        .expect("status should succeed");

    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["a.txt", "b.txt"]);
    assert!(files.iter().all(ChangedFile::is_untracked));
}

#[tokio::test]
async fn test_ahead_behind_without_upstream_is_none() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let runner = SystemRunner::new();
    let counts = ahead_behind(&runner, temp.path())
        .await
        .expect("git should start");
    assert_eq!(counts, None);
}

#[tokio::test]
async fn test_remote_lifecycle_in_repo() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    let runner = SystemRunner::new();

    let registry = RemoteRegistry::load(&runner, temp.path())
        .await
        .expect("remote -v should succeed");
    assert!(registry.is_empty());

    add_remote(&runner, temp.path(), &registry, "backup", "/srv/backup.git")
        .await
        .expect("add should succeed");
    let registry = RemoteRegistry::load(&runner, temp.path())
        .await
        .expect("reload");
    assert_eq!(
        registry.get("backup").map(RemoteTarget::url),
        Some("/srv/backup.git")
    );

    let err = add_remote(&runner, temp.path(), &registry, "backup", "/srv/other.git")
        .await
        .expect_err("duplicate must be rejected");
    assert!(matches!(err, GwError::Remote(ref e) if matches!(**e, RemoteError::DuplicateName { .. })));

    set_remote_url(&runner, temp.path(), &registry, "backup", "https://example.com/b.git")
        .await
        .expect("set-url should succeed");
    let registry = RemoteRegistry::load(&runner, temp.path())
        .await
        .expect("reload");
    assert_eq!(
        registry.get("backup").map(RemoteTarget::url),
        Some("https://example.com/b.git")
    );

    remove_remote(&runner, temp.path(), &registry, "backup")
        .await
        .expect("remove should succeed");
    let registry = RemoteRegistry::load(&runner, temp.path())
        .await
        .expect("reload");
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_git_output_failure_is_command_failed() {
    let temp = temp_dir();
    let runner = SystemRunner::new();

    let err = crate::git::query::git_output(&runner, temp.path(), &["rev-parse", "HEAD"])
        .await
        .expect_err("outside a repo rev-parse fails");
    assert!(matches!(err, GwError::Git(_)), "unexpected error: {err}");
}
