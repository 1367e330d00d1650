// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default key bindings.
//!
//! ```text
//! Up / k        MoveUp          a / A         SelectAll
//! Down / j      MoveDown        n / N         SelectNone
//! Space         Toggle          Enter         Confirm
//! q / Q / Esc / Ctrl+C          Cancel
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::SelectorEvent;

/// Maps a key press to an event; `None` for unbound keys and releases.
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<SelectorEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            SelectorEvent::Cancel
        }
        KeyCode::Up | KeyCode::Char('k') => SelectorEvent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => SelectorEvent::MoveDown,
        KeyCode::Char(' ') => SelectorEvent::Toggle,
        KeyCode::Char('a' | 'A') => SelectorEvent::SelectAll,
        KeyCode::Char('n' | 'N') => SelectorEvent::SelectNone,
        KeyCode::Enter => SelectorEvent::Confirm,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => SelectorEvent::Cancel,
        _ => return None,
    };
    Some(event)
}
