//! Core logic for the README builder.
//! Owns the element model, undo/redo history, persistence and markdown output.

pub mod badge;
pub mod history;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;
pub mod theme;

pub use badge::{resolve_badge, resolve_badge_url, BadgeStyle, IconFrame, ResolvedBadge};
pub use history::keymap::{command_for_chord, HistoryCommand, KeyChord};
pub use history::manager::{HistoryEvent, HistoryManager};
pub use history::state::HistoryState;
pub use history::HistoryConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::document::{Document, LossyDocument, SkippedElement};
pub use model::element::{Element, ElementId, ElementKind};
pub use model::validate::{is_valid_element, validate_element, ElementValidationError};
pub use render::{render, render_element, render_value, RenderContext};
pub use store::{
    DocumentStore, MemoryDocumentStore, SqliteDocumentStore, StoreError, StoreResult,
};
pub use theme::Theme;

/// Minimal health-check API for embedding collaborators.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
