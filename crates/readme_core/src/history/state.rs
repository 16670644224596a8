//! History state value and its pure transitions.
//!
//! # Invariants
//! - `future` front is the next redo target.
//! - `undo`/`redo` conserve `past.len() + 1 + future.len()`.
//! - An accepted `commit` always clears `future`.

use crate::model::document::Document;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    past: Vec<Document>,
    present: Document,
    future: VecDeque<Document>,
    max_past: Option<usize>,
}

impl HistoryState {
    /// Starts a history whose only snapshot is `present`.
    pub fn new(present: Document) -> Self {
        Self {
            present,
            ..Self::default()
        }
    }

    /// Starts a history that keeps at most `max_past` undo snapshots.
    pub fn with_limit(present: Document, max_past: Option<usize>) -> Self {
        Self {
            present,
            max_past,
            ..Self::default()
        }
    }

    pub fn present(&self) -> &Document {
        &self.present
    }

    /// Undo snapshots, oldest first.
    pub fn past(&self) -> &[Document] {
        &self.past
    }

    /// Redo snapshots, next redo target first.
    pub fn future(&self) -> &VecDeque<Document> {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Makes `next` the present snapshot.
    ///
    /// Returns `false` and leaves the state untouched when `next` is
    /// structurally equal to `present`.
    pub fn commit(&mut self, next: Document) -> bool {
        if next == self.present {
            return false;
        }

        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();

        if let Some(limit) = self.max_past {
            let excess = self.past.len().saturating_sub(limit);
            if excess > 0 {
                self.past.drain(..excess);
            }
        }
        true
    }

    /// Steps back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Steps forward one snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Drops both navigation stacks; `present` is kept.
    pub fn clear_history(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Total snapshots held, `present` included.
    pub fn snapshot_count(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }
}
