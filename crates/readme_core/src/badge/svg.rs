//! Self-contained SVG name cards, embedded as data URLs.

use crate::theme::Theme;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const CARD_HEIGHT: usize = 32;
const CARD_MIN_WIDTH: usize = 64;
const CARD_MAX_WIDTH: usize = 320;
const CHAR_WIDTH: usize = 8;
const CARD_PADDING: usize = 24;

/// Builds a `data:image/svg+xml;base64,...` card labelled with `name`.
pub fn card_data_url(name: &str, theme: Theme) -> String {
    let label = name.trim();
    let width = (CARD_PADDING + CHAR_WIDTH * label.chars().count())
        .clamp(CARD_MIN_WIDTH, CARD_MAX_WIDTH);
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" rx="6" fill="{fill}"/>"#,
            r#"<text x="{cx}" y="21" font-family="Verdana,Geneva,sans-serif" font-size="13" fill="{fg}" text-anchor="middle">{label}</text>"#,
            "</svg>"
        ),
        w = width,
        h = CARD_HEIGHT,
        fill = theme.hex(),
        cx = width / 2,
        fg = theme.foreground_hex(),
        label = escape_xml(label),
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{card_data_url, escape_xml};
    use crate::theme::Theme;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    fn decode(url: &str) -> String {
        let payload = url
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data url prefix");
        String::from_utf8(STANDARD.decode(payload).expect("valid base64")).expect("utf-8 svg")
    }

    #[test]
    fn card_embeds_escaped_label_and_theme_colour() {
        let svg = decode(&card_data_url("R&D <lab>", Theme::Purple));
        assert!(svg.contains("R&amp;D &lt;lab&gt;"));
        assert!(svg.contains(r##"fill="#6f42c1""##));
    }

    #[test]
    fn card_width_is_clamped() {
        let svg = decode(&card_data_url(&"x".repeat(200), Theme::Dark));
        assert!(svg.contains(r#"width="320""#));
        let svg = decode(&card_data_url("", Theme::Dark));
        assert!(svg.contains(r#"width="64""#));
    }

    #[test]
    fn escape_xml_handles_quotes() {
        assert_eq!(escape_xml(r#"a"b'c"#), "a&quot;b&apos;c");
    }
}
