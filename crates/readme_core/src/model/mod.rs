//! README document model.
//!
//! # Responsibility
//! - Define the element schema shared by the editor, history and renderer.
//! - Offer strict validation and lossy decoding of collaborator JSON.
//!
//! # Invariants
//! - A document is a value: it is replaced wholesale, never patched in place.
//! - Element order is render order.

pub mod document;
pub mod element;
pub mod validate;
