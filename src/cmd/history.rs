// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! History command implementation for gw.

use super::session::Session;
use crate::cli::config::HistoryArgs;
use crate::history::History;

/// Renders matching entries, newest first and numbered from 1.
#[must_use]
pub fn render_history(history: &History, args: &HistoryArgs) -> Vec<String> {
    let entries = match &args.search {
        Some(term) => history.search(term),
        None => history.recent(args.limit),
    };
    if entries.is_empty() {
        return vec![match &args.search {
            Some(term) => format!("No history entries matching '{term}'"),
            None => "No command history available".to_string(),
        }];
    }

    entries
        .into_iter()
        .take(args.limit)
        .enumerate()
        .map(|(i, entry)| format!("  {}. {}", i + 1, entry.display_line()))
        .collect()
}

/// Main handler for history command.
pub fn run_history_command(args: &HistoryArgs, session: &Session) {
    for line in render_history(session.history(), args) {
        println!("{line}");
    }
}
