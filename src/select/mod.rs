// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive multi-select state machine.
//!
//! ```text
//!                 +---------------------------+
//!   key --> map --+  Active { cursor, items } |-- MoveUp/MoveDown (clamp | wrap)
//!                 |                           |-- Toggle / SelectAll / SelectNone
//!                 +------+-------------+------+
//!                        |             |
//!                    Confirm        Cancel
//!                        v             v
//!                   Confirmed      Cancelled      (terminal; later events ignored)
//!                  items frozen
//!
//! empty item list --> Cancelled immediately
//! ```
//!
//! The machine is pure. Keys come from a [`KeySource`] and every state is
//! shown through a [`SelectorView`]; [`terminal`] provides both for a real TTY.

pub mod keymap;
pub mod terminal;

use crate::error::SelectError;

/// Abstract input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    MoveUp,
    MoveDown,
    Toggle,
    SelectAll,
    SelectNone,
    Confirm,
    Cancel,
}

/// Cursor behaviour at the first and last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Stay on the boundary item.
    #[default]
    Clamp,
    /// Jump to the opposite end.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPhase {
    Active,
    Confirmed,
    Cancelled,
}

/// One candidate with its selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    label: String,
    selected: bool,
}

impl SelectableItem {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Selector state: items, cursor and phase.
#[derive(Debug, Clone)]
pub struct Selector {
    items: Vec<SelectableItem>,
    cursor: usize,
    phase: SelectorPhase,
    policy: BoundaryPolicy,
}

impl Selector {
    /// Creates a selector over `labels`, nothing selected.
    ///
    /// An empty list starts (and stays) `Cancelled`.
    pub fn new<I, S>(labels: I, policy: BoundaryPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<_> = labels.into_iter().map(SelectableItem::new).collect();
        let phase = if items.is_empty() {
            SelectorPhase::Cancelled
        } else {
            SelectorPhase::Active
        };
        Self {
            items,
            cursor: 0,
            phase,
            policy,
        }
    }

    /// Sets the initial selection of every item.
    #[must_use]
    pub fn with_preselect_all(mut self, selected: bool) -> Self {
        for item in &mut self.items {
            item.selected = selected;
        }
        self
    }

    #[must_use]
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn phase(&self) -> SelectorPhase {
        self.phase
    }

    #[must_use]
    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        !matches!(self.phase, SelectorPhase::Active)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }

    /// Applies one event and returns the resulting phase.
    ///
    /// Events after `Confirmed` or `Cancelled` are ignored.
    pub fn apply(&mut self, event: SelectorEvent) -> SelectorPhase {
        if self.is_done() {
            return self.phase;
        }

        let last = self.items.len() - 1;
        match event {
            SelectorEvent::MoveUp => {
                self.cursor = match (self.cursor, self.policy) {
                    (0, BoundaryPolicy::Clamp) => 0,
                    (0, BoundaryPolicy::Wrap) => last,
                    (n, _) => n - 1,
                };
            }
            SelectorEvent::MoveDown => {
                self.cursor = match self.policy {
                    _ if self.cursor < last => self.cursor + 1,
                    BoundaryPolicy::Clamp => last,
                    BoundaryPolicy::Wrap => 0,
                };
            }
            SelectorEvent::Toggle => {
                if let Some(item) = self.items.get_mut(self.cursor) {
                    item.selected = !item.selected;
                }
            }
            SelectorEvent::SelectAll => self.items.iter_mut().for_each(|i| i.selected = true),
            SelectorEvent::SelectNone => self.items.iter_mut().for_each(|i| i.selected = false),
            SelectorEvent::Confirm => self.phase = SelectorPhase::Confirmed,
            SelectorEvent::Cancel => self.phase = SelectorPhase::Cancelled,
        }

        self.phase
    }

    /// Final result. A selector still `Active` counts as cancelled.
    #[must_use]
    pub fn into_outcome(self) -> SelectionOutcome {
        match self.phase {
            SelectorPhase::Confirmed => SelectionOutcome::Confirmed(self.items),
            SelectorPhase::Active | SelectorPhase::Cancelled => SelectionOutcome::Cancelled,
        }
    }
}

/// Result of a selection session.
///
/// `Confirmed` with nothing selected is distinct from `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Every item in original order, with its final flag.
    Confirmed(Vec<SelectableItem>),
    Cancelled,
}

impl SelectionOutcome {
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Labels of the selected items, in original order.
    #[must_use]
    pub fn selected_labels(&self) -> Vec<&str> {
        match self {
            Self::Confirmed(items) => items
                .iter()
                .filter(|i| i.selected)
                .map(SelectableItem::label)
                .collect(),
            Self::Cancelled => Vec::new(),
        }
    }
}

/// Produces selector events, one key at a time.
pub trait KeySource {
    /// Blocks for the next key.
    ///
    /// `Ok(None)` is a key with no binding; it is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectError`] if input cannot be read.
    fn next_event(&mut self) -> Result<Option<SelectorEvent>, SelectError>;
}

/// Shows the selector after every transition.
pub trait SelectorView {
    /// # Errors
    ///
    /// Returns a [`SelectError`] if output fails.
    fn render(&mut self, selector: &Selector) -> Result<(), SelectError>;
}

/// Drives `selector` until it is confirmed or cancelled.
///
/// The view sees every state, including the final one.
///
/// # Errors
///
/// Propagates input and output errors.
pub fn run_session(
    mut selector: Selector,
    keys: &mut impl KeySource,
    view: &mut impl SelectorView,
) -> Result<SelectionOutcome, SelectError> {
    while !selector.is_done() {
        view.render(&selector)?;
        if let Some(event) = keys.next_event()? {
            selector.apply(event);
        }
    }
    view.render(&selector)?;
    Ok(selector.into_outcome())
}
