//! Colour themes for generated badges and banners.
//!
//! Unrecognized theme keys resolve to [`Theme::Dark`].

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Blue,
    Purple,
    Green,
    Orange,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Self::Dark,
        Self::Light,
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
    ];

    /// Resolves a theme key, case-insensitively, falling back to dark.
    pub fn from_key(key: &str) -> Self {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.key().eq_ignore_ascii_case(key))
            .unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }

    /// Background colour as `#rrggbb`.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Dark => "#0d1117",
            Self::Light => "#f6f8fa",
            Self::Blue => "#0366d6",
            Self::Purple => "#6f42c1",
            Self::Green => "#2ea44f",
            Self::Orange => "#f66a0a",
        }
    }

    /// Background colour without the leading `#`, as badge URLs expect.
    pub fn badge_color(self) -> &'static str {
        self.hex().trim_start_matches('#')
    }

    /// Foreground colour that stays readable on [`Theme::hex`].
    pub fn foreground_hex(self) -> &'static str {
        match self {
            Self::Light => "#24292f",
            _ => "#ffffff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn unknown_keys_fall_back_to_dark() {
        assert_eq!(Theme::from_key("neon"), Theme::Dark);
        assert_eq!(Theme::from_key(""), Theme::Dark);
        assert_eq!(Theme::from_key(" Purple "), Theme::Purple);
    }

    #[test]
    fn badge_color_strips_hash() {
        assert_eq!(Theme::Blue.badge_color(), "0366d6");
    }
}
