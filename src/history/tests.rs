// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{History, HistoryEntry};
use chrono::{TimeZone, Utc};

fn entry(command: &str, description: &str, secs: i64) -> HistoryEntry {
    HistoryEntry::new(
        command,
        description,
        Utc.timestamp_opt(secs, 0).single().unwrap(),
    )
}

#[test]
fn test_push_truncates_to_newest() {
    let mut history = History::new(3);
    for i in 0..5 {
        history.push(entry("commit", &format!("c{i}"), i));
    }

    let kept: Vec<_> = history.entries().iter().map(HistoryEntry::description).collect();
    assert_eq!(kept, ["c2", "c3", "c4"]);
}

#[test]
fn test_zero_limit_keeps_nothing() {
    let mut history = History::new(0);
    history.record("status", "Viewed status");
    assert!(history.is_empty());
}

#[test]
fn test_recent_and_search_are_newest_first() {
    let mut history = History::new(10);
    history.push(entry("commit", "Committed: fix parser", 1));
    history.push(entry("push", "Pushed main to origin", 2));
    history.push(entry("commit", "Committed: Parser tests", 3));

    let recent: Vec<_> = history.recent(2).into_iter().map(HistoryEntry::description).collect();
    assert_eq!(recent, ["Committed: Parser tests", "Pushed main to origin"]);

    let found: Vec<_> = history.search("PARSER").into_iter().map(HistoryEntry::description).collect();
    assert_eq!(found, ["Committed: Parser tests", "Committed: fix parser"]);

    assert_eq!(history.search("push").len(), 1);
    assert!(history.search("rebase").is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gw").join("history.json");

    let mut history = History::new(5);
    history.push(entry("add", "Added 2 files", 100));
    history.push(entry("push", "Pushed main to origin, backup", 200));
    history.save(&path).unwrap();

    let loaded = History::load(&path, 5);
    assert_eq!(loaded.entries(), history.entries());
}

#[test]
fn test_load_applies_smaller_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut history = History::new(10);
    for i in 0..6 {
        history.push(entry("status", &format!("s{i}"), i));
    }
    history.save(&path).unwrap();

    let loaded = History::load(&path, 2);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.entries()[0].description(), "s4");
}

#[test]
fn test_load_missing_or_corrupt_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(History::load(&dir.path().join("absent.json"), 20).is_empty());

    let corrupt = dir.path().join("history.json");
    std::fs::write(&corrupt, "{ not json").unwrap();
    let history = History::load(&corrupt, 20);
    assert!(history.is_empty());
    assert_eq!(history.max_entries(), 20);
}

#[test]
fn test_display_line_shape() {
    let line = entry("push", "Pushed main to origin", 0).display_line();
    assert!(line.starts_with('['), "{line}");
    assert!(line.ends_with("] push: Pushed main to origin"), "{line}");
    // [YYYY-MM-DD HH:MM]
    assert_eq!(line.find(']'), Some(17));
}
