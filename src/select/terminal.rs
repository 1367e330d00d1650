// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Crossterm driver for the selector.
//!
//! ```text
//! select_interactive()
//!   stdin/stderr are TTYs? --no--> SelectError::NotATerminal
//!   TerminalGuard (raw mode + alternate screen, restored on drop)
//!   run_session(CrosstermKeys, TerminalView)
//!
//! screen:
//!   <title> (Space=toggle, Enter=confirm, q=cancel)   header
//!   ==============================                    rule
//!   Up/Down or j/k to move, a=all, n=none             help
//!
//!   > [x] src/lib.rs                                  window of items,
//!     [ ] README.md                                   scrolled to cursor
//!
//!   Selected: 1/2 | Enter to confirm, q to cancel     footer
//! ```

use std::io::{self, IsTerminal, Write};
use std::ops::Range;

use bon::Builder;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::keymap::map_key;
use super::{KeySource, SelectionOutcome, Selector, SelectorEvent, SelectorView, run_session};
use crate::error::SelectError;

/// Rows taken by header, rule, help, two spacers and footer.
const CHROME_ROWS: usize = 6;

/// Presentation options.
#[derive(Debug, Clone, Builder)]
pub struct SelectorStyle {
    #[builder(into, setters(name = with_title), default = "Select items".to_string())]
    title: String,
    #[builder(setters(name = with_color), default = true)]
    color: bool,
    #[builder(setters(name = with_emoji), default = true)]
    emoji: bool,
}

impl Default for SelectorStyle {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub emphasis: Emphasis,
}

impl RenderedLine {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

/// Item indices visible in a window of `max_visible` rows that keeps the
/// cursor on screen.
#[must_use]
pub fn visible_window(cursor: usize, len: usize, max_visible: usize) -> Range<usize> {
    let max_visible = max_visible.max(1);
    let start = if cursor >= max_visible {
        cursor + 1 - max_visible
    } else {
        0
    };
    start..len.min(start + max_visible)
}

/// Lays out one frame for a terminal `height` rows tall.
#[must_use]
pub fn render_lines(selector: &Selector, style: &SelectorStyle, height: usize) -> Vec<RenderedLine> {
    let header = if style.emoji {
        format!("📁 {} (Space=toggle, Enter=confirm, q=cancel)", style.title)
    } else {
        format!("{} (Space=toggle, Enter=confirm, q=cancel)", style.title)
    };
    let rule = "=".repeat(header.chars().count().min(60));
    let checked = if style.emoji { "[✓]" } else { "[x]" };

    let mut lines = vec![
        RenderedLine::new(header, Emphasis::Bold),
        RenderedLine::new(rule, Emphasis::Plain),
        RenderedLine::new("Up/Down or j/k to move, a=all, n=none", Emphasis::Plain),
        RenderedLine::new("", Emphasis::Plain),
    ];

    let items = selector.items();
    let window = visible_window(
        selector.cursor(),
        items.len(),
        height.saturating_sub(CHROME_ROWS),
    );
    for index in window {
        let item = &items[index];
        let mark = if item.is_selected() { checked } else { "[ ]" };
        let line = if index == selector.cursor() {
            RenderedLine::new(format!("> {mark} {}", item.label()), Emphasis::Cursor)
        } else {
            RenderedLine::new(format!("  {mark} {}", item.label()), Emphasis::Plain)
        };
        lines.push(line);
    }

    lines.push(RenderedLine::new("", Emphasis::Plain));
    lines.push(RenderedLine::new(
        format!(
            "Selected: {}/{} | Enter to confirm, q to cancel",
            selector.selected_count(),
            items.len()
        ),
        Emphasis::Bold,
    ));
    lines
}

/// Raw mode and alternate screen for the lifetime of the guard.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stderr(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads key events from the terminal.
struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_event(&mut self) -> Result<Option<SelectorEvent>, SelectError> {
        loop {
            match event::read()? {
                Event::Key(key) => return Ok(map_key(&key)),
                // Redraw at the new size.
                Event::Resize(..) => return Ok(None),
                _ => {}
            }
        }
    }
}

/// Draws frames on stderr.
struct TerminalView<'a> {
    style: &'a SelectorStyle,
    out: io::Stderr,
}

impl SelectorView for TerminalView<'_> {
    fn render(&mut self, selector: &Selector) -> Result<(), SelectError> {
        let (cols, rows) = terminal::size()?;
        let width = usize::from(cols).saturating_sub(1);

        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in render_lines(selector, self.style, usize::from(rows))
            .into_iter()
            .enumerate()
        {
            let text: String = line.text.chars().take(width).collect();
            queue!(self.out, MoveTo(0, u16::try_from(row).unwrap_or(u16::MAX)))?;
            match (self.style.color, line.emphasis) {
                (true, Emphasis::Cursor) => queue!(
                    self.out,
                    SetAttribute(Attribute::Reverse),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?,
                (true, Emphasis::Bold) => queue!(
                    self.out,
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?,
                _ => queue!(self.out, Print(text))?,
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Runs `selector` on the controlling terminal.
///
/// # Errors
///
/// Returns [`SelectError::NotATerminal`] when stdin or stderr is not a TTY,
/// or [`SelectError::Terminal`] on terminal I/O failure.
pub fn select_interactive(
    selector: Selector,
    style: &SelectorStyle,
) -> Result<SelectionOutcome, SelectError> {
    if selector.is_done() {
        return Ok(selector.into_outcome());
    }
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return Err(SelectError::NotATerminal);
    }

    let _guard = TerminalGuard::acquire()?;
    let mut view = TerminalView {
        style,
        out: io::stderr(),
    };
    run_session(selector, &mut CrosstermKeys, &mut view)
}
