//! Renderers for single-block element kinds.
//!
//! Tables and tech-stack panels live in their own modules.

use crate::badge::{encode_component, static_badge_url, ShieldsStyle};
use crate::model::element::{
    BadgeBlock, BannerBlock, CodeBlock, DividerBlock, DividerStyle, GitContributionBlock,
    HeaderBlock, ImageBlock, InstallationBlock, TextBlock,
};
use crate::render::{escape_alt, escape_attr, RenderContext};

const CAPSULE_RENDER_BASE: &str = "https://capsule-render.vercel.app/api";
const TYPING_SVG_BASE: &str = "https://readme-typing-svg.demolab.com";
const CONTRIB_ROCKS_BASE: &str = "https://contrib.rocks/image";

const MIN_HEADER_LEVEL: u8 = 1;
const MAX_HEADER_LEVEL: u8 = 6;
const BOLD_WEIGHT_THRESHOLD: u32 = 600;
const DEFAULT_CODE_LANGUAGE: &str = "text";

pub fn header(block: &HeaderBlock) -> String {
    let level = block.level.clamp(MIN_HEADER_LEVEL, MAX_HEADER_LEVEL);
    format!("{} {}\n\n", "#".repeat(usize::from(level)), block.content)
}

pub fn text(block: &TextBlock) -> String {
    let content = if is_bold(block.style.font_weight.as_deref()) && !block.content.is_empty() {
        format!("**{}**", block.content)
    } else {
        block.content.clone()
    };

    match block.style.text_align.as_deref().map(str::trim) {
        Some(align @ ("center" | "right")) => {
            format!("<div align=\"{align}\">\n\n{content}\n\n</div>\n\n")
        }
        _ => format!("{content}\n\n"),
    }
}

fn is_bold(weight: Option<&str>) -> bool {
    let Some(weight) = weight.map(str::trim) else {
        return false;
    };
    match weight {
        "bold" | "bolder" => true,
        numeric => numeric
            .parse::<u32>()
            .is_ok_and(|value| value >= BOLD_WEIGHT_THRESHOLD),
    }
}

pub fn banner(block: &BannerBlock, ctx: &RenderContext) -> String {
    let color = banner_color(block, ctx);
    let text = encode_component(block.content.trim());
    let alt = escape_alt(&block.content);

    match block.variant.trim() {
        "wave" => format!(
            "![{alt}]({CAPSULE_RENDER_BASE}?type=waving&color={color}&height=200&section=header&text={text}&fontSize=50&fontColor=ffffff)\n\n"
        ),
        "gradient" => format!(
            "![{alt}]({CAPSULE_RENDER_BASE}?type=rect&color=gradient&height=120&text={text}&fontSize=40&fontColor=ffffff)\n\n"
        ),
        "typing" => format!(
            "![{alt}]({TYPING_SVG_BASE}?lines={text}&color={color}&center=true&vCenter=true&width=600)\n\n"
        ),
        _ => format!("<div align=\"center\">\n\n# {}\n\n</div>\n\n", block.content),
    }
}

fn banner_color(block: &BannerBlock, ctx: &RenderContext) -> String {
    let custom = block.color.trim().trim_start_matches('#');
    if custom.is_empty() {
        ctx.theme.badge_color().to_string()
    } else {
        encode_component(custom)
    }
}

pub fn badge(block: &BadgeBlock, ctx: &RenderContext) -> String {
    let style = ShieldsStyle::parse(block.variant.trim()).unwrap_or_default();
    let url = static_badge_url(&block.content, ctx.theme.badge_color(), style);
    format!("![{}]({url})\n\n", escape_alt(&block.content))
}

pub fn installation(block: &InstallationBlock) -> String {
    format!("## 📦 Installation\n\n{}", fenced(&block.content, "bash"))
}

pub fn code_block(block: &CodeBlock) -> String {
    let language = block
        .language
        .as_deref()
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .unwrap_or(DEFAULT_CODE_LANGUAGE);
    fenced(&block.content, language)
}

/// Wraps `content` in a backtick fence longer than any run inside it.
fn fenced(content: &str, language: &str) -> String {
    let fence = "`".repeat(longest_backtick_run(content).max(2) + 1);
    format!("{fence}{language}\n{content}\n{fence}\n\n")
}

fn longest_backtick_run(content: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in content.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

pub fn git_contribution(block: &GitContributionBlock) -> String {
    let username = block.username.trim();
    let repository = block.repository.trim();
    if username.is_empty() || repository.is_empty() {
        return String::new();
    }

    let slug = format!(
        "{}/{}",
        escape_attr(&encode_component(username)),
        escape_attr(&encode_component(repository))
    );
    format!(
        "## 🤝 Contributors\n\n<a href=\"https://github.com/{slug}/graphs/contributors\">\n  <img src=\"{CONTRIB_ROCKS_BASE}?repo={slug}\" alt=\"Contributors\" />\n</a>\n\n"
    )
}

pub fn divider(block: &DividerBlock) -> String {
    match block.divider_style {
        DividerStyle::Line => "---\n\n".to_string(),
        DividerStyle::Dots => centered("• • • • •"),
        DividerStyle::Stars => centered("★ ★ ★ ★ ★"),
    }
}

fn centered(line: &str) -> String {
    format!("<div align=\"center\">\n\n{line}\n\n</div>\n\n")
}

pub fn image(block: &ImageBlock) -> String {
    let src = block.src.trim();
    if src.is_empty() {
        return String::new();
    }

    let width = dimension(block.width.as_deref());
    let height = dimension(block.height.as_deref());
    if width.is_none() && height.is_none() {
        return format!("![{}]({src})\n\n", escape_alt(&block.alt));
    }

    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_attr(src),
        escape_attr(&block.alt)
    );
    if let Some(width) = width {
        tag.push_str(&format!(" width=\"{}\"", escape_attr(width)));
    }
    if let Some(height) = height {
        tag.push_str(&format!(" height=\"{}\"", escape_attr(height)));
    }
    tag.push_str(" />\n\n");
    tag
}

fn dimension(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
