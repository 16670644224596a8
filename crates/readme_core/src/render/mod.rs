//! Markdown generation.
//!
//! # Responsibility
//! - Turn a [`Document`] into README markdown, one renderer per element kind.
//! - Degrade instead of failing: malformed or unknown entries render nothing.
//!
//! # Invariants
//! - Rendering is pure and deterministic; the same input yields the same text.
//! - Output is the in-order concatenation of per-element output.
//! - Persona tags never affect output.

pub mod blocks;
pub mod table;
pub mod tech_stack;

use crate::model::document::Document;
use crate::model::element::{Element, ElementKind};
use crate::theme::Theme;
use log::debug;
use serde_json::Value;

/// Inputs shared by every renderer for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub theme: Theme,
}

impl RenderContext {
    /// Builds a context from a theme key; unknown keys select the dark theme.
    pub fn new(theme_key: &str) -> Self {
        Self {
            theme: Theme::from_key(theme_key),
        }
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }
}

/// Renders a whole document.
pub fn render(document: &Document, ctx: &RenderContext) -> String {
    let output: String = document
        .iter()
        .map(|element| render_element(element, ctx))
        .collect();
    debug!(
        "event=render module=render status=ok elements={} bytes={} theme={}",
        document.len(),
        output.len(),
        ctx.theme.key()
    );
    output
}

/// Renders a single element.
pub fn render_element(element: &Element, ctx: &RenderContext) -> String {
    match &element.kind {
        ElementKind::Header(block) => blocks::header(block),
        ElementKind::Text(block) => blocks::text(block),
        ElementKind::Banner(block) => blocks::banner(block, ctx),
        ElementKind::Badge(block) => blocks::badge(block, ctx),
        ElementKind::Installation(block) => blocks::installation(block),
        ElementKind::CodeBlock(block) => blocks::code_block(block),
        ElementKind::Table(block) => table::render_table(block),
        ElementKind::TechStack(block) => tech_stack::render_tech_stack(block, ctx),
        ElementKind::GitContribution(block) => blocks::git_contribution(block),
        ElementKind::Divider(block) => blocks::divider(block),
        ElementKind::Image(block) => blocks::image(block),
    }
}

/// Renders raw collaborator JSON.
///
/// Entries that fail to decode contribute nothing; the rest render normally.
pub fn render_value(value: &Value, ctx: &RenderContext) -> String {
    let decoded = Document::from_value_lossy(value);
    render(&decoded.document, ctx)
}

/// Escapes text for a double-quoted HTML attribute.
pub(crate) fn escape_attr(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes brackets so text stays inside markdown image alt text.
pub(crate) fn escape_alt(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
