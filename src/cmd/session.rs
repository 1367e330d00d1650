// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-scoped state shared by all commands.
//!
//! ```text
//! Session::open(&GlobalOptions)
//!   workdir      -C DIR or the current directory
//!   config_path  --config / GW_CONFIG or <config dir>/gw/config.toml
//!   config       user file + ./gw.toml + GW_* (layered)
//!   history      <config_path dir>/history.json
//!   runner       SystemRunner (git resolved up front)
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::{debug, warn};

use super::ui::Printer;
use crate::cli::global::GlobalOptions;
use crate::config::{Config, paths};
use crate::core::runner::{CommandRunner, SystemRunner};
use crate::error::{GitError, Result};
use crate::git::query;
use crate::history::History;

/// Loaded configuration, history and the command runner.
pub struct Session {
    config: Config,
    config_path: PathBuf,
    loaded_files: Vec<String>,
    history: History,
    history_path: PathBuf,
    runner: Arc<dyn CommandRunner>,
    workdir: PathBuf,
    printer: Printer,
}

impl Session {
    /// Opens a session for the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory does not exist, git is not
    /// installed, or the settings cannot be loaded.
    pub fn open(global: &GlobalOptions) -> Result<Self> {
        let workdir = match &global.workdir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot determine the current directory")?,
        };
        if !workdir.is_dir() {
            bail!("working directory does not exist: {}", workdir.display());
        }

        let config_path = match &global.config {
            Some(path) => path.clone(),
            None => paths::default_config_path()?,
        };

        SystemRunner::ensure_git().context("git is required")?;

        let mut session = Self::with_runner(&config_path, &workdir, Arc::new(SystemRunner::new()))?;
        session.printer = Printer::from_config(&session.config.ui, global.no_color);
        Ok(session)
    }

    /// Opens a session with an explicit runner and plain output.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be loaded.
    pub fn with_runner(
        config_path: &Path,
        workdir: &Path,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self> {
        let loader = Config::layered(config_path, workdir);
        let loaded_files = loader.format_loaded_files();
        let config = loader
            .build()
            .with_context(|| format!("failed to load settings from {}", config_path.display()))?;

        let history_path = paths::history_path_for(config_path);
        let history = History::load(&history_path, config.history.max_entries);

        debug!(
            workdir = %workdir.display(),
            config = %config_path.display(),
            history = history.len(),
            "session opened"
        );

        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
            loaded_files,
            history,
            history_path,
            runner,
            workdir: workdir.to_path_buf(),
            printer: Printer::plain(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the effective config after the user file was edited.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[String] {
        &self.loaded_files
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }

    #[must_use]
    pub fn shared_runner(&self) -> Arc<dyn CommandRunner> {
        Arc::clone(&self.runner)
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    #[must_use]
    pub const fn printer(&self) -> Printer {
        self.printer
    }

    /// Fails unless the working directory is inside a git work tree.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository`.
    pub fn ensure_repo(&self) -> Result<()> {
        if query::is_git_repo(&self.workdir) {
            Ok(())
        } else {
            Err(GitError::NotARepository {
                path: self.workdir.clone(),
            }
            .into())
        }
    }

    /// Appends to the history and saves it. History is best effort.
    pub fn record(&mut self, command: &str, description: impl Into<String>) {
        self.history.record(command, description);
        if let Err(e) = self.history.save(&self.history_path) {
            warn!(error = %e, "failed to save history");
        }
    }
}
