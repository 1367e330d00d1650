// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command history.
//!
//! ```text
//! History::load(path, max)     missing/corrupt file -> empty history
//!    |
//!    v
//! record(command, description) append, keep the newest `max`
//!    |
//!    v
//! save(path)                   JSON array, oldest first
//!
//! recent(n) / search(term)     newest first
//! ```

#[cfg(test)]
mod tests;

use std::path::Path;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// One completed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    command: String,
    description: String,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        command: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            timestamp,
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Case-insensitive match against command and description.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.command.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    /// `[YYYY-MM-DD HH:MM] command: description`, in local time.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            self.command,
            self.description
        )
    }
}

/// Bounded, persisted command history.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl History {
    #[must_use]
    pub const fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Loads the history file.
    ///
    /// History is best effort: a missing, unreadable or corrupt file yields an
    /// empty history instead of an error.
    #[must_use]
    pub fn load(path: &Path, max_entries: usize) -> Self {
        let mut history = Self::new(max_entries);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return history,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read history, starting empty");
                return history;
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
            Ok(entries) => {
                history.entries = entries;
                history.truncate();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt history, starting empty");
            }
        }
        history
    }

    /// Writes the history as a JSON array, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| write_error(std::io::Error::other(e)))?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, content).map_err(write_error)?;

        debug!(path = %path.display(), entries = self.entries.len(), "history saved");
        Ok(())
    }

    /// Appends an entry stamped with the current time.
    pub fn record(&mut self, command: impl Into<String>, description: impl Into<String>) {
        self.push(HistoryEntry::new(command, description, Utc::now()));
    }

    /// Appends an entry, dropping the oldest beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.truncate();
    }

    fn truncate(&mut self) {
        let excess = self.entries.len().saturating_sub(self.max_entries);
        self.entries.drain(..excess);
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Up to `limit` entries, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Entries matching `term`, newest first.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().filter(|e| e.matches(term)).collect()
    }
}
