//! Tech-stack panel assembly.
//!
//! # Responsibility
//! - Resolve each technology through the badge resolver.
//! - Arrange the resolved images according to the panel layout.
//!
//! # Invariants
//! - Icon tables never exceed 6 columns, grids never exceed 3.
//! - Grouped output keeps every technology; unknown ones land in "Others".
//! - Blank technology names are dropped before layout.

use crate::badge::catalog::{group_of, TechGroup};
use crate::badge::{resolve_badge, BadgeStyle, IconFrame, ResolvedBadge};
use crate::model::element::{TechLayout, TechStackBlock};
use crate::render::table::{centered_grid, escape_cell};
use crate::render::{escape_alt, escape_attr, RenderContext};
use crate::theme::Theme;

pub const TECH_STACK_HEADING: &str = "## ⚡ Tech Stack\n\n";

const ICON_TABLE_COLUMNS: usize = 6;
const GRID_COLUMNS: usize = 3;
const TABLE_ICON_SIZE: u32 = 40;
const LIST_ICON_SIZE: u32 = 20;
const GRID_ICON_SIZE: u32 = 48;
const INLINE_SEPARATOR: &str = " • ";

const GROUPS: [(TechGroup, &str); 3] = [
    (TechGroup::Language, "Languages"),
    (TechGroup::Framework, "Frameworks"),
    (TechGroup::Tool, "Others"),
];

/// Resolution inputs shared by every technology of one panel.
struct Panel<'a> {
    style_key: &'a str,
    theme: Theme,
}

impl Panel<'_> {
    fn resolve(&self, technology: &str) -> ResolvedBadge {
        resolve_badge(technology, self.style_key, self.theme)
    }

    fn has_style(&self) -> bool {
        !self.style_key.is_empty()
    }

    fn is_icon_based(&self) -> bool {
        BadgeStyle::parse(self.style_key).is_some_and(BadgeStyle::is_icon_based)
    }
}

pub fn render_tech_stack(block: &TechStackBlock, ctx: &RenderContext) -> String {
    let technologies: Vec<&str> = block
        .technologies
        .iter()
        .map(|technology| technology.trim())
        .filter(|technology| !technology.is_empty())
        .collect();
    if technologies.is_empty() {
        return String::new();
    }

    let theme = if block.theme.trim().is_empty() {
        ctx.theme
    } else {
        Theme::from_key(&block.theme)
    };
    let panel = Panel {
        style_key: block.badge_style.trim(),
        theme,
    };

    let body = match block.layout {
        TechLayout::Badges => badges_body(&technologies, &panel),
        TechLayout::List => list_body(&technologies, &panel),
        TechLayout::Inline => format!("{}\n\n", technologies.join(INLINE_SEPARATOR)),
        TechLayout::Grouped => grouped_body(&technologies, &panel),
        TechLayout::Grid => grid_body(&technologies, &panel),
    };
    format!("{TECH_STACK_HEADING}{body}")
}

fn badges_body(technologies: &[&str], panel: &Panel<'_>) -> String {
    if panel.is_icon_based() {
        let cells: Vec<String> = technologies
            .iter()
            .map(|technology| {
                escape_cell(&image_markup(
                    technology,
                    &panel.resolve(technology),
                    TABLE_ICON_SIZE,
                ))
            })
            .collect();
        return format!("{}\n\n", centered_grid(&cells, ICON_TABLE_COLUMNS));
    }

    let images: Vec<String> = technologies
        .iter()
        .map(|technology| image_markup(technology, &panel.resolve(technology), TABLE_ICON_SIZE))
        .collect();
    format!("{}\n\n", images.join(" "))
}

fn list_body(technologies: &[&str], panel: &Panel<'_>) -> String {
    let items: Vec<String> = technologies
        .iter()
        .map(|technology| {
            if !panel.has_style() {
                return format!("- {technology}");
            }
            let badge = panel.resolve(technology);
            let markup = image_markup(technology, &badge, LIST_ICON_SIZE);
            if badge.icon {
                format!("- {markup} {technology}")
            } else {
                format!("- {markup}")
            }
        })
        .collect();
    format!("{}\n\n", items.join("\n"))
}

fn grouped_body(technologies: &[&str], panel: &Panel<'_>) -> String {
    let mut output = String::new();
    for (group, title) in GROUPS {
        let members: Vec<&str> = technologies
            .iter()
            .copied()
            .filter(|technology| group_of(technology) == group)
            .collect();
        if members.is_empty() {
            continue;
        }
        output.push_str(&format!("### {title}\n\n"));
        output.push_str(&badges_body(&members, panel));
    }
    output
}

fn grid_body(technologies: &[&str], panel: &Panel<'_>) -> String {
    let cells: Vec<String> = technologies
        .iter()
        .map(|technology| {
            let markup = image_markup(technology, &panel.resolve(technology), GRID_ICON_SIZE);
            escape_cell(&format!("{markup}<br>{technology}"))
        })
        .collect();
    format!("{}\n\n", centered_grid(&cells, GRID_COLUMNS))
}

/// Markup for one resolved image: an `<img>` tag for icons, a markdown image
/// for text badges.
fn image_markup(name: &str, badge: &ResolvedBadge, size: u32) -> String {
    if !badge.icon {
        return format!("![{}]({})", escape_alt(name), badge.url);
    }

    let img = format!(
        r#"<img src="{}" alt="{}" width="{size}" height="{size}" />"#,
        badge.url,
        escape_attr(name)
    );
    match badge.frame {
        IconFrame::Bare => img,
        IconFrame::Keycap => format!("<kbd>{img}</kbd>"),
    }
}
