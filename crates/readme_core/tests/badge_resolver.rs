use readme_core::badge::catalog::normalize_tech;
use readme_core::badge::{shields_escape, static_badge_url, ShieldsStyle};
use readme_core::{resolve_badge, resolve_badge_url, BadgeStyle, IconFrame, Theme};

const STYLE_KEYS: [&str; 15] = [
    "flat",
    "flat-square",
    "for-the-badge",
    "plastic",
    "social",
    "devicon",
    "devicons",
    "devicon-framed",
    "skill-icons",
    "simple-icons",
    "icons8",
    "svg-card",
    "",
    "unknown-style",
    "  ",
];

#[test]
fn resolution_is_total_for_any_name_and_key() {
    let names = ["React", "", "   ", "C++", "Node.js", "日本語", "a|b", "x-y_z", "🦀"];
    for key in STYLE_KEYS {
        for name in names {
            let url = resolve_badge_url(name, key, Theme::Dark);
            assert!(!url.is_empty(), "empty url for {name:?} under {key:?}");
            assert!(
                url.starts_with("https://") || url.starts_with("data:image/svg+xml;base64,"),
                "unexpected url {url}"
            );
        }
    }
}

#[test]
fn normalization_folds_js_suffix_and_whitespace() {
    assert_eq!(normalize_tech("Node.js"), "nodejs");
    assert_eq!(normalize_tech("Vue.js"), "vuejs");
    assert_eq!(normalize_tech("  Next JS "), "nextjs");
}

#[test]
fn devicon_uses_table_path_or_original_fallback() {
    assert_eq!(
        resolve_badge_url("Node.js", "devicon", Theme::Dark),
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg"
    );
    assert_eq!(
        resolve_badge_url("Zig Lang", "devicon", Theme::Dark),
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/ziglang/ziglang-original.svg"
    );
}

#[test]
fn names_without_an_ascii_slug_use_fixed_fallbacks() {
    for name in ["日本語", "🦀", "   "] {
        assert_eq!(
            resolve_badge_url(name, "devicon", Theme::Dark),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/devicon/devicon-original.svg"
        );
        for key in ["flat", "for-the-badge", "unknown-style"] {
            let url = resolve_badge_url(name, key, Theme::Dark);
            assert!(!url.contains("logo="), "empty logo slug in {url}");
            assert!(!url.contains("//-original.svg"), "broken path in {url}");
        }
    }
    assert!(resolve_badge_url("Unheard", "flat", Theme::Dark).contains("&logo=unheard&logoColor=white"));
}

#[test]
fn provider_fallbacks_for_unknown_technologies() {
    assert_eq!(
        resolve_badge_url("Unheard", "skill-icons", Theme::Dark),
        "https://skillicons.dev/icons?i=github"
    );
    assert_eq!(
        resolve_badge_url("Unheard", "simple-icons", Theme::Dark),
        "https://cdn.simpleicons.org/simpleicons"
    );
    assert_eq!(
        resolve_badge_url("Unheard", "icons8", Theme::Dark),
        "https://img.icons8.com/color/96/source-code.png"
    );
    assert_eq!(
        resolve_badge_url("FastAPI", "icons8", Theme::Dark),
        "https://img.icons8.com/color/96/source-code.png"
    );
}

#[test]
fn known_technologies_use_provider_ids() {
    assert_eq!(
        resolve_badge_url("TypeScript", "skill-icons", Theme::Dark),
        "https://skillicons.dev/icons?i=ts"
    );
    assert_eq!(
        resolve_badge_url("Vue.js", "simple-icons", Theme::Dark),
        "https://cdn.simpleicons.org/vuedotjs"
    );
    assert_eq!(
        resolve_badge_url("Python", "icons8", Theme::Dark),
        "https://img.icons8.com/color/96/python.png"
    );
}

#[test]
fn shields_badges_escape_label_and_use_theme_colour() {
    assert_eq!(
        resolve_badge_url("Visual Basic", "for-the-badge", Theme::Purple),
        "https://img.shields.io/badge/Visual%20Basic-6f42c1?style=for-the-badge&logo=visualbasic&logoColor=white"
    );
    assert_eq!(
        resolve_badge_url("C#", "flat", Theme::Light),
        "https://img.shields.io/badge/C%23-f6f8fa?style=flat&logo=dotnet&logoColor=white"
    );
    assert_eq!(shields_escape("a-b_c d"), "a--b__c%20d");
    assert_eq!(
        static_badge_url("v1.0", "0d1117", ShieldsStyle::Social),
        "https://img.shields.io/badge/v1.0-0d1117?style=social"
    );
}

#[test]
fn empty_key_uses_caller_theme_and_unknown_key_uses_dark() {
    let empty = resolve_badge("Rust", "", Theme::Blue);
    assert!(!empty.icon);
    assert!(empty.url.contains("Rust-0366d6?style=flat"));

    let unknown = resolve_badge("Rust", "neon", Theme::Blue);
    assert!(!unknown.icon);
    assert!(unknown.url.contains("Rust-0d1117?style=flat"));
}

#[test]
fn aliases_resolve_through_devicon() {
    let plain = resolve_badge("React", "devicon", Theme::Dark);
    let legacy = resolve_badge("React", "devicons", Theme::Dark);
    let framed = resolve_badge("React", "devicon-framed", Theme::Dark);

    assert_eq!(legacy, plain);
    assert_eq!(framed.url, plain.url);
    assert_eq!(framed.frame, IconFrame::Keycap);
    assert_eq!(plain.frame, IconFrame::Bare);
    assert!(plain.icon);
}

#[test]
fn svg_card_is_inline_data_url() {
    let card = resolve_badge("Rust", "svg-card", Theme::Green);
    assert!(card.icon);
    assert!(card.url.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn style_keys_round_trip_through_parse() {
    for key in &STYLE_KEYS[..12] {
        let style = BadgeStyle::parse(key).unwrap();
        assert_eq!(style.key(), *key);
        assert_eq!(style.is_icon_based(), !matches!(style, BadgeStyle::Shields(_)));
    }
    assert_eq!(BadgeStyle::parse("unknown-style"), None);
}
