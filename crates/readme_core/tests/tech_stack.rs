use readme_core::model::element::{TechLayout, TechStackBlock};
use readme_core::render::table::cell_count;
use readme_core::render::tech_stack::render_tech_stack;
use readme_core::RenderContext;

fn panel(technologies: &[&str], layout: TechLayout, badge_style: &str) -> TechStackBlock {
    TechStackBlock {
        technologies: technologies.iter().map(|name| name.to_string()).collect(),
        layout,
        badge_style: badge_style.to_string(),
        theme: String::new(),
    }
}

fn table_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|line| line.starts_with('|')).collect()
}

#[test]
fn list_without_style_prints_names_only() {
    let output = render_tech_stack(
        &panel(&["React"], TechLayout::List, ""),
        &RenderContext::default(),
    );
    assert_eq!(output, "## ⚡ Tech Stack\n\n- React\n\n");
}

#[test]
fn list_with_icons_prefixes_small_images() {
    let output = render_tech_stack(
        &panel(&["Rust", "Go"], TechLayout::List, "devicon"),
        &RenderContext::default(),
    );
    assert_eq!(
        output,
        "## ⚡ Tech Stack\n\n\
         - <img src=\"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg\" alt=\"Rust\" width=\"20\" height=\"20\" /> Rust\n\
         - <img src=\"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/go/go-original-wordmark.svg\" alt=\"Go\" width=\"20\" height=\"20\" /> Go\n\n"
    );
}

#[test]
fn inline_joins_names_with_bullets() {
    let output = render_tech_stack(
        &panel(&["Rust", " ", "SQLite"], TechLayout::Inline, "devicon"),
        &RenderContext::default(),
    );
    assert_eq!(output, "## ⚡ Tech Stack\n\nRust • SQLite\n\n");
}

#[test]
fn empty_technology_list_renders_nothing() {
    let output = render_tech_stack(&panel(&[], TechLayout::Grid, "devicon"), &RenderContext::default());
    assert!(output.is_empty());
    let blanks = render_tech_stack(&panel(&["", "  "], TechLayout::List, ""), &RenderContext::default());
    assert!(blanks.is_empty());
}

#[test]
fn shields_badges_are_space_separated_markdown_images() {
    let output = render_tech_stack(
        &panel(&["Rust", "Docker"], TechLayout::Badges, "flat-square"),
        &RenderContext::new("orange"),
    );
    let body = output.strip_prefix("## ⚡ Tech Stack\n\n").unwrap();
    assert!(body.starts_with("![Rust](https://img.shields.io/badge/Rust-f66a0a?style=flat-square&logo=rust&logoColor=white) "));
    assert!(body.contains("![Docker](https://img.shields.io/badge/Docker-f66a0a?style=flat-square&logo=docker&logoColor=white)"));
    assert!(body.ends_with(")\n\n"));
    assert!(table_lines(&output).is_empty());
}

#[test]
fn icon_badges_form_padded_six_column_table() {
    let names = ["Rust", "Go", "Python", "Docker", "Git", "Redis", "Linux", "Bash"];
    let output = render_tech_stack(
        &panel(&names, TechLayout::Badges, "skill-icons"),
        &RenderContext::default(),
    );

    let rows = table_lines(&output);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], "|  |  |  |  |  |  |");
    assert!(rows.iter().all(|row| cell_count(row) == 6));
    assert!(rows[3].ends_with("|  |  |  |  |"));
    assert!(output.contains(r#"<img src="https://skillicons.dev/icons?i=rust" alt="Rust" width="40" height="40" />"#));
}

#[test]
fn small_icon_table_uses_one_column_per_item() {
    let output = render_tech_stack(
        &panel(&["Rust", "Go"], TechLayout::Badges, "simple-icons"),
        &RenderContext::default(),
    );
    let rows = table_lines(&output);
    assert_eq!(rows[1], "| :---: | :---: |");
    assert!(rows.iter().all(|row| cell_count(row) == 2));
}

#[test]
fn framed_alias_wraps_icons_in_keycaps() {
    let output = render_tech_stack(
        &panel(&["Rust"], TechLayout::Badges, "devicon-framed"),
        &RenderContext::default(),
    );
    assert!(output.contains("<kbd><img src=\"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg\""));
    assert!(output.contains("</kbd>"));
}

#[test]
fn grouped_layout_buckets_every_technology() {
    let output = render_tech_stack(
        &panel(&["React", "Rust", "Terraform", "TypeScript"], TechLayout::Grouped, "devicon"),
        &RenderContext::default(),
    );

    let languages = output.find("### Languages").unwrap();
    let frameworks = output.find("### Frameworks").unwrap();
    let others = output.find("### Others").unwrap();
    assert!(languages < frameworks && frameworks < others);
    for name in ["React", "Rust", "Terraform", "TypeScript"] {
        assert!(output.contains(&format!("alt=\"{name}\"")), "{name} missing");
    }
    assert!(output.contains("terraform/terraform-original.svg"));
}

#[test]
fn grouped_layout_skips_empty_buckets() {
    let output = render_tech_stack(
        &panel(&["Rust"], TechLayout::Grouped, ""),
        &RenderContext::default(),
    );
    assert!(output.contains("### Languages\n\n![Rust]"));
    assert!(!output.contains("### Frameworks"));
    assert!(!output.contains("### Others"));
}

#[test]
fn grid_uses_three_columns_with_names_under_icons() {
    let output = render_tech_stack(
        &panel(&["Rust", "Go", "Python", "Docker"], TechLayout::Grid, "devicon"),
        &RenderContext::default(),
    );
    let rows = table_lines(&output);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| cell_count(row) == 3));
    assert!(output.contains(r#"width="48" height="48" /><br>Rust"#));
    assert!(rows[3].ends_with("<br>Docker |  |  |"));
}

#[test]
fn element_theme_overrides_context_theme() {
    let mut block = panel(&["Rust"], TechLayout::Badges, "flat");
    block.theme = "green".to_string();
    let output = render_tech_stack(&block, &RenderContext::new("blue"));
    assert!(output.contains("Rust-2ea44f"));
}

#[test]
fn unknown_style_falls_back_to_dark_shields() {
    let output = render_tech_stack(
        &panel(&["Rust"], TechLayout::Badges, "holographic"),
        &RenderContext::new("blue"),
    );
    assert!(output.contains("https://img.shields.io/badge/Rust-0d1117?style=flat"));
}
