//! Cursor-based undo/redo history.
//!
//! `entries[..cursor]` have been applied to the scene; `entries[cursor..]`
//! are the redo branch, discarded as soon as a new command is recorded.
//! Moving the cursor only ever runs the commands' own `apply`/`revert`, one
//! step at a time.

use std::fmt;

use chrono::{DateTime, Utc};
use laserkit_core::constants::DEFAULT_HISTORY_CAPACITY;
use laserkit_core::{Result, SubscriptionId, UiDataCallback};
use serde::Serialize;

use crate::commands::EditCommand;
use crate::scene::Scene;

/// A recorded command and when it was recorded.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub command: EditCommand,
    pub recorded_at: DateTime<Utc>,
}

/// Delivered to observers after every change of the history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEvent {
    pub undo_available: bool,
    pub redo_available: bool,
    pub listing: Vec<String>,
    pub cursor: usize,
}

pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    capacity: usize,
    listeners: Vec<(SubscriptionId, UiDataCallback<HistoryEvent>)>,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates an empty history. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: capacity.max(1),
            listeners: Vec::new(),
        }
    }

    /// Records a command the caller has already applied.
    ///
    /// Drops the redo branch, appends, evicts the oldest entries beyond
    /// capacity and moves the cursor to the head.
    pub fn record(&mut self, command: EditCommand) {
        if self.cursor < self.entries.len() {
            tracing::debug!(
                discarded = self.entries.len() - self.cursor,
                "Discarding redo branch"
            );
            self.entries.truncate(self.cursor);
        }
        tracing::debug!(label = command.label(), "Recording command");
        self.entries.push(HistoryEntry {
            command,
            recorded_at: Utc::now(),
        });
        self.cursor = self.entries.len();
        self.evict();
        self.notify();
    }

    /// Reverts the command before the cursor. `Ok(false)` at the start.
    pub fn undo(&mut self, scene: &mut Scene) -> Result<bool> {
        let moved = self.step_back(scene)?;
        if moved {
            tracing::debug!(cursor = self.cursor, len = self.entries.len(), "Undo");
            self.notify();
        }
        Ok(moved)
    }

    /// Re-applies the command at the cursor. `Ok(false)` at the head.
    pub fn redo(&mut self, scene: &mut Scene) -> Result<bool> {
        let moved = self.step_forward(scene)?;
        if moved {
            tracing::debug!(cursor = self.cursor, len = self.entries.len(), "Redo");
            self.notify();
        }
        Ok(moved)
    }

    /// Moves the cursor to `target` (clamped) by repeated undo or redo
    /// steps. Observers hear about the settled state once.
    pub fn go_to(&mut self, scene: &mut Scene, target: usize) -> Result<bool> {
        let target = target.min(self.entries.len());
        let start = self.cursor;
        let mut outcome = Ok(());
        while self.cursor > target {
            if let Err(e) = self.step_back(scene) {
                outcome = Err(e);
                break;
            }
        }
        while outcome.is_ok() && self.cursor < target {
            if let Err(e) = self.step_forward(scene) {
                outcome = Err(e);
                break;
            }
        }

        let moved = self.cursor != start;
        if moved {
            tracing::debug!(from = start, to = self.cursor, "History jump");
            self.notify();
        }
        outcome.map(|_| moved)
    }

    /// Forgets every entry. The scene is left as it is.
    pub fn clear(&mut self) {
        tracing::info!(discarded = self.entries.len(), "Clearing history");
        self.entries.clear();
        self.cursor = 0;
        self.notify();
    }

    /// Changes the capacity, evicting the oldest entries if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        if self.evict() {
            self.notify();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn undo_label(&self) -> Option<&str> {
        self.cursor
            .checked_sub(1)
            .map(|i| self.entries[i].command.label())
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(|e| e.command.label())
    }

    /// Labels of all entries and the cursor position.
    pub fn listing(&self) -> (Vec<String>, usize) {
        (
            self.entries
                .iter()
                .map(|e| e.command.label().to_string())
                .collect(),
            self.cursor,
        )
    }

    pub fn subscribe(&mut self, callback: impl Fn(&HistoryEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.listeners.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    fn step_back(&mut self, scene: &mut Scene) -> Result<bool> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.entries[self.cursor - 1].command.revert(scene)?;
        self.cursor -= 1;
        Ok(true)
    }

    fn step_forward(&mut self, scene: &mut Scene) -> Result<bool> {
        if self.cursor >= self.entries.len() {
            return Ok(false);
        }
        self.entries[self.cursor].command.apply(scene)?;
        self.cursor += 1;
        Ok(true)
    }

    /// Drops entries beyond capacity. Applied entries go oldest first; if
    /// that is not enough, the far end of the redo branch goes next, so the
    /// entries left after the cursor still follow on from the scene.
    fn evict(&mut self) -> bool {
        if self.entries.len() <= self.capacity {
            return false;
        }
        let excess = self.entries.len() - self.capacity;
        let applied = excess.min(self.cursor);
        self.entries = self.entries.split_off(applied);
        self.cursor -= applied;
        self.entries.truncate(self.capacity);
        tracing::debug!(
            evicted = excess,
            redo_dropped = excess - applied,
            capacity = self.capacity,
            "Evicted history entries"
        );
        true
    }

    fn event(&self) -> HistoryEvent {
        let (listing, cursor) = self.listing();
        HistoryEvent {
            undo_available: self.can_undo(),
            redo_available: self.can_redo(),
            listing,
            cursor,
        }
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let event = self.event();
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }
}
