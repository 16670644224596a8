//! History manager: history state plus best-effort persistence.
//!
//! # Responsibility
//! - Seed the session from the store and keep the store tracking `present`.
//! - Report each effective transition as a `HistoryEvent`.
//!
//! # Invariants
//! - Store failures are logged and swallowed; in-memory state stays the
//!   source of truth for the session.
//! - No-op transitions neither persist nor emit events.

use crate::history::keymap::HistoryCommand;
use crate::history::state::HistoryState;
use crate::history::HistoryConfig;
use crate::model::document::Document;
use crate::store::DocumentStore;
use log::{debug, info, warn};

/// Effective transition reported back to the editor shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Committed,
    Undone,
    Redone,
    Cleared,
}

impl HistoryEvent {
    /// Toast text for the editor, if this transition deserves one.
    pub fn notification(self) -> Option<&'static str> {
        match self {
            Self::Committed => None,
            Self::Undone => Some("Undo successful"),
            Self::Redone => Some("Redo successful"),
            Self::Cleared => Some("History cleared"),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Committed => "commit",
            Self::Undone => "undo",
            Self::Redone => "redo",
            Self::Cleared => "clear",
        }
    }
}

/// Owns the editing session's history and its persisted copy.
pub struct HistoryManager<S: DocumentStore> {
    state: HistoryState,
    store: S,
    config: HistoryConfig,
}

impl<S: DocumentStore> HistoryManager<S> {
    /// Opens a session seeded from `config.storage_key`.
    ///
    /// A missing, unreadable or corrupt stored value starts an empty document.
    pub fn open(store: S, config: HistoryConfig) -> Self {
        let present = match store.load(config.storage_key.as_str()) {
            Ok(Some(document)) => {
                info!(
                    "event=history_open module=history status=ok source=store elements={}",
                    document.len()
                );
                document
            }
            Ok(None) => {
                info!("event=history_open module=history status=ok source=empty");
                Document::new()
            }
            Err(err) => {
                warn!(
                    "event=history_open module=history status=error source=empty key={} error={}",
                    config.storage_key, err
                );
                Document::new()
            }
        };

        Self {
            state: HistoryState::with_limit(present, config.max_past),
            store,
            config,
        }
    }

    pub fn present(&self) -> &Document {
        self.state.present()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Makes `next` the present document and persists it.
    ///
    /// Returns `None` when `next` equals the present document.
    pub fn commit(&mut self, next: Document) -> Option<HistoryEvent> {
        if !self.state.commit(next) {
            debug!("event=history_commit module=history status=skipped reason=unchanged");
            return None;
        }
        Some(self.after_transition(HistoryEvent::Committed))
    }

    /// Restores the previous snapshot. Safe to call with nothing to undo.
    pub fn undo(&mut self) -> Option<HistoryEvent> {
        if !self.state.undo() {
            return None;
        }
        Some(self.after_transition(HistoryEvent::Undone))
    }

    /// Re-applies the next snapshot. Safe to call with nothing to redo.
    pub fn redo(&mut self) -> Option<HistoryEvent> {
        if !self.state.redo() {
            return None;
        }
        Some(self.after_transition(HistoryEvent::Redone))
    }

    /// Dispatches a key-bound command.
    pub fn apply(&mut self, command: HistoryCommand) -> Option<HistoryEvent> {
        match command {
            HistoryCommand::Undo => self.undo(),
            HistoryCommand::Redo => self.redo(),
        }
    }

    /// Drops undo/redo snapshots and erases the persisted copy.
    ///
    /// The in-memory present document is kept.
    pub fn clear_history(&mut self) -> HistoryEvent {
        self.state.clear_history();
        if let Err(err) = self.store.remove(self.config.storage_key.as_str()) {
            warn!(
                "event=history_persist module=history status=error op=remove key={} error={}",
                self.config.storage_key, err
            );
        }
        info!("event=history_clear module=history status=ok");
        HistoryEvent::Cleared
    }

    fn after_transition(&self, event: HistoryEvent) -> HistoryEvent {
        info!(
            "event=history_{} module=history status=ok past={} future={} elements={}",
            event.as_str(),
            self.state.past().len(),
            self.state.future().len(),
            self.state.present().len()
        );
        self.persist_present();
        event
    }

    fn persist_present(&self) {
        let key = self.config.storage_key.as_str();
        if let Err(err) = self.store.save(key, self.state.present()) {
            warn!(
                "event=history_persist module=history status=error op=save key={key} error={err}"
            );
        }
    }
}
