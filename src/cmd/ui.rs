// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing message formatting.
//!
//! ```text
//! Tone      emoji  color
//! Success   ✅     green
//! Error     ❌     red
//! Info      ℹ️     blue
//! Working   🔄     cyan
//! Warning   ⚠️     yellow
//! ```
//!
//! Emoji follow `ui.show_emoji`. Color needs `ui.use_colors`, no `--no-color`,
//! no `NO_COLOR` and a terminal on stdout.
//!
//! Line input for the menu and confirmations goes through [`Prompt`];
//! [`StdinPrompt`] is only handed out when stdin is a terminal.

use std::fmt::Display;
use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use crossterm::style::{Color, Stylize};

use crate::config::types::UiConfig;
use crate::error::Result;

/// Message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
    Working,
    Warning,
}

impl Tone {
    const fn emoji(self) -> &'static str {
        match self {
            Self::Success => "✅ ",
            Self::Error => "❌ ",
            Self::Info => "ℹ️  ",
            Self::Working => "🔄 ",
            Self::Warning => "⚠️  ",
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
            Self::Info => Color::Blue,
            Self::Working => Color::Cyan,
            Self::Warning => Color::Yellow,
        }
    }
}

/// Formats and prints messages according to the UI settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    emoji: bool,
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::plain()
    }
}

impl Printer {
    #[must_use]
    pub const fn new(emoji: bool, color: bool) -> Self {
        Self { emoji, color }
    }

    /// No emoji, no color.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false, false)
    }

    #[must_use]
    pub fn from_config(ui: &UiConfig, no_color: bool) -> Self {
        let color = ui.use_colors
            && !no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self::new(ui.show_emoji, color)
    }

    #[must_use]
    pub const fn emoji_enabled(&self) -> bool {
        self.emoji
    }

    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Returns `icon` when emoji are enabled, otherwise nothing.
    #[must_use]
    pub const fn icon<'a>(&self, icon: &'a str) -> &'a str {
        if self.emoji { icon } else { "" }
    }

    /// Formats one message line.
    #[must_use]
    pub fn format(&self, tone: Tone, message: impl Display) -> String {
        let text = format!("{}{message}", self.icon(tone.emoji()));
        if self.color {
            text.with(tone.color()).to_string()
        } else {
            text
        }
    }

    /// `"<icon><title>"` followed by a rule of `width` `=`.
    #[must_use]
    pub fn heading(&self, icon: &str, title: &str, width: usize) -> [String; 2] {
        let title = format!("{}{title}", self.icon(icon));
        let title = if self.color {
            title.bold().to_string()
        } else {
            title
        };
        [title, "=".repeat(width)]
    }

    pub fn success(&self, message: impl Display) {
        println!("{}", self.format(Tone::Success, message));
    }

    pub fn error(&self, message: impl Display) {
        eprintln!("{}", self.format(Tone::Error, message));
    }

    pub fn info(&self, message: impl Display) {
        println!("{}", self.format(Tone::Info, message));
    }

    pub fn working(&self, message: impl Display) {
        println!("{}", self.format(Tone::Working, message));
    }

    pub fn warning(&self, message: impl Display) {
        println!("{}", self.format(Tone::Warning, message));
    }
}

/// Source of typed answers.
pub trait Prompt: Send {
    /// Shows `question` and reads one line, without the line ending.
    ///
    /// `Ok(None)` means input ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Reads answers from the terminal.
#[derive(Debug)]
pub struct StdinPrompt(());

impl StdinPrompt {
    /// Returns a prompt when stdin is a terminal.
    #[must_use]
    pub fn for_terminal() -> Option<Self> {
        std::io::stdin()
            .is_terminal()
            .then_some(Self(()))
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut out = std::io::stdout().lock();
        write!(out, "{question} ").context("cannot write prompt")?;
        out.flush().context("cannot write prompt")?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("cannot read from the terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Asks a yes/no question.
///
/// An empty answer picks `default`; end of input is a no.
///
/// # Errors
///
/// Propagates prompt errors.
pub fn confirm(prompt: &mut dyn Prompt, question: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let Some(answer) = prompt.ask(&format!("{question} {hint}"))? else {
        return Ok(false);
    };
    Ok(match answer.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

/// Asks for a value, offering `default` when one exists.
///
/// Returns `None` for an empty answer without default, or at end of input.
///
/// # Errors
///
/// Propagates prompt errors.
pub fn ask_value(
    prompt: &mut dyn Prompt,
    question: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    let question = match default {
        Some(value) => format!("{question} [{value}]:"),
        None => format!("{question}:"),
    };
    let Some(answer) = prompt.ask(&question)? else {
        return Ok(None);
    };
    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default.map(str::to_string)
    } else {
        Some(answer.to_string())
    })
}
