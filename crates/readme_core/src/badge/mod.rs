//! Badge and icon URL resolution.
//!
//! # Responsibility
//! - Turn a technology name plus a style-family key into one image URL.
//! - Resolve alias families by recursing with a substituted style.
//!
//! # Invariants
//! - Resolution is total: every input yields a non-empty URL.
//! - Unrecognized style keys fall back to flat shields badges in the
//!   default theme colour.
//! - Alias recursion is bounded to one level.

pub mod catalog;
pub mod svg;

use crate::theme::Theme;
use log::debug;

const SHIELDS_BASE: &str = "https://img.shields.io/badge";
const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";
const SKILL_ICONS_BASE: &str = "https://skillicons.dev/icons?i=";
const SIMPLE_ICONS_BASE: &str = "https://cdn.simpleicons.org";
const ICONS8_BASE: &str = "https://img.icons8.com/color/96";

const DEVICON_FALLBACK: &str = "devicon/devicon-original.svg";
const SKILL_ICONS_FALLBACK: &str = "github";
const SIMPLE_ICONS_FALLBACK: &str = "simpleicons";
const ICONS8_FALLBACK: &str = "source-code";

const MAX_ALIAS_DEPTH: u8 = 1;

/// Rendering style of a shields.io badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShieldsStyle {
    #[default]
    Flat,
    FlatSquare,
    ForTheBadge,
    Plastic,
    Social,
}

impl ShieldsStyle {
    pub const ALL: [ShieldsStyle; 5] = [
        Self::Flat,
        Self::FlatSquare,
        Self::ForTheBadge,
        Self::Plastic,
        Self::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::FlatSquare => "flat-square",
            Self::ForTheBadge => "for-the-badge",
            Self::Plastic => "plastic",
            Self::Social => "social",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == value)
    }
}

/// Closed set of badge style families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Plain shields.io badge in the theme colour.
    Shields(ShieldsStyle),
    /// Devicon icon font served from the jsDelivr CDN.
    Devicon,
    /// Legacy key rendering exactly like [`BadgeStyle::Devicon`].
    Devicons,
    /// Devicon icons wrapped in a keycap frame.
    DeviconFramed,
    SkillIcons,
    SimpleIcons,
    Icons8,
    /// Inline SVG name card.
    SvgCard,
}

impl BadgeStyle {
    pub const ICON_FAMILIES: [BadgeStyle; 7] = [
        Self::Devicon,
        Self::Devicons,
        Self::DeviconFramed,
        Self::SkillIcons,
        Self::SimpleIcons,
        Self::Icons8,
        Self::SvgCard,
    ];

    /// Parses a style-family key. Shields keys map onto their rendering style.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        if let Some(style) = ShieldsStyle::parse(key) {
            return Some(Self::Shields(style));
        }
        Self::ICON_FAMILIES
            .into_iter()
            .find(|style| style.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Shields(style) => style.as_str(),
            Self::Devicon => "devicon",
            Self::Devicons => "devicons",
            Self::DeviconFramed => "devicon-framed",
            Self::SkillIcons => "skill-icons",
            Self::SimpleIcons => "simple-icons",
            Self::Icons8 => "icons8",
            Self::SvgCard => "svg-card",
        }
    }

    /// Whether this family draws icons (laid out in tables) rather than
    /// text badges (laid out inline).
    pub fn is_icon_based(self) -> bool {
        !matches!(self, Self::Shields(_))
    }
}

/// How an icon image is wrapped in the generated markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconFrame {
    #[default]
    Bare,
    /// Wrapped in `<kbd>...</kbd>`.
    Keycap,
}

/// A resolved image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBadge {
    pub url: String,
    /// `true` for icon families; `false` for text badges.
    pub icon: bool,
    pub frame: IconFrame,
}

impl ResolvedBadge {
    fn badge(url: String) -> Self {
        Self {
            url,
            icon: false,
            frame: IconFrame::Bare,
        }
    }

    fn icon(url: String) -> Self {
        Self {
            url,
            icon: true,
            frame: IconFrame::Bare,
        }
    }
}

/// Alias families and what they resolve through.
fn alias_target(style: BadgeStyle) -> Option<(BadgeStyle, IconFrame)> {
    match style {
        BadgeStyle::Devicons => Some((BadgeStyle::Devicon, IconFrame::Bare)),
        BadgeStyle::DeviconFramed => Some((BadgeStyle::Devicon, IconFrame::Keycap)),
        _ => None,
    }
}

/// Resolves `technology` under the style-family `style_key`.
///
/// An empty key means "no style chosen" and yields a flat shields badge in
/// the caller's theme. Any other unrecognized key yields a flat shields badge
/// in the default theme colour.
pub fn resolve_badge(technology: &str, style_key: &str, theme: Theme) -> ResolvedBadge {
    if style_key.trim().is_empty() {
        return shields(technology, ShieldsStyle::Flat, theme);
    }
    match BadgeStyle::parse(style_key) {
        Some(style) => resolve_style(technology, style, theme),
        None => {
            debug!("event=badge_resolve module=badge status=fallback reason=unknown_style");
            shields(technology, ShieldsStyle::Flat, Theme::default())
        }
    }
}

/// URL-only form of [`resolve_badge`].
pub fn resolve_badge_url(technology: &str, style_key: &str, theme: Theme) -> String {
    resolve_badge(technology, style_key, theme).url
}

/// Resolves `technology` under an already parsed style family.
pub fn resolve_style(technology: &str, style: BadgeStyle, theme: Theme) -> ResolvedBadge {
    resolve_at_depth(technology, style, theme, 0, alias_target)
}

fn resolve_at_depth(
    technology: &str,
    style: BadgeStyle,
    theme: Theme,
    depth: u8,
    aliases: fn(BadgeStyle) -> Option<(BadgeStyle, IconFrame)>,
) -> ResolvedBadge {
    if let Some((target, frame)) = aliases(style) {
        if depth >= MAX_ALIAS_DEPTH {
            debug!(
                "event=badge_resolve module=badge status=fallback reason=alias_depth style={}",
                style.key()
            );
            return shields(technology, ShieldsStyle::Flat, Theme::default());
        }
        let mut resolved = resolve_at_depth(technology, target, theme, depth + 1, aliases);
        resolved.frame = frame;
        return resolved;
    }

    match style {
        BadgeStyle::Shields(shields_style) => shields(technology, shields_style, theme),
        BadgeStyle::Devicon => ResolvedBadge::icon(devicon_url(technology)),
        BadgeStyle::SkillIcons => ResolvedBadge::icon(skill_icons_url(technology)),
        BadgeStyle::SimpleIcons => ResolvedBadge::icon(simple_icons_url(technology)),
        BadgeStyle::Icons8 => ResolvedBadge::icon(icons8_url(technology)),
        BadgeStyle::SvgCard => ResolvedBadge::icon(svg::card_data_url(technology, theme)),
        // Alias families only land here when the alias table disowns them.
        BadgeStyle::Devicons | BadgeStyle::DeviconFramed => {
            shields(technology, ShieldsStyle::Flat, Theme::default())
        }
    }
}

/// Builds a shields.io static badge URL without a logo.
pub fn static_badge_url(label: &str, color: &str, style: ShieldsStyle) -> String {
    format!(
        "{SHIELDS_BASE}/{}-{color}?style={}",
        shields_escape(label),
        style.as_str()
    )
}

/// Shields badge; the logo is left out when the name has no usable slug.
fn shields(technology: &str, style: ShieldsStyle, theme: Theme) -> ResolvedBadge {
    let logo = catalog::lookup(technology)
        .and_then(|entry| entry.simple_icon)
        .map_or_else(|| catalog::slug(technology), str::to_string);
    let base = static_badge_url(technology.trim(), theme.badge_color(), style);
    if logo.is_empty() {
        return ResolvedBadge::badge(base);
    }
    ResolvedBadge::badge(format!("{base}&logo={logo}&logoColor=white"))
}

fn devicon_url(technology: &str) -> String {
    let path = match catalog::lookup(technology) {
        Some(entry) => entry.devicon.to_string(),
        None => match catalog::slug(technology) {
            key if key.is_empty() => DEVICON_FALLBACK.to_string(),
            key => format!("{key}/{key}-original.svg"),
        },
    };
    format!("{DEVICON_BASE}/{path}")
}

fn skill_icons_url(technology: &str) -> String {
    let id = catalog::lookup(technology)
        .and_then(|entry| entry.skill_icon)
        .unwrap_or(SKILL_ICONS_FALLBACK);
    format!("{SKILL_ICONS_BASE}{id}")
}

fn simple_icons_url(technology: &str) -> String {
    let slug = catalog::lookup(technology)
        .and_then(|entry| entry.simple_icon)
        .unwrap_or(SIMPLE_ICONS_FALLBACK);
    format!("{SIMPLE_ICONS_BASE}/{slug}")
}

fn icons8_url(technology: &str) -> String {
    let id = catalog::lookup(technology)
        .and_then(|entry| entry.icons8)
        .unwrap_or(ICONS8_FALLBACK);
    format!("{ICONS8_BASE}/{id}.png")
}

/// Escapes text for a shields.io static-badge path segment.
///
/// Dashes and underscores are doubled (single ones are separators), then the
/// result is percent-encoded with spaces as `%20`.
pub fn shields_escape(text: &str) -> String {
    encode_component(&text.replace('-', "--").replace('_', "__"))
}

/// Percent-encodes a URL component, spelling spaces as `%20`.
pub fn encode_component(text: &str) -> String {
    // Literal `+` is already encoded as `%2B`, so every remaining `+` was a space.
    url::form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
