use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the whole site. Serialized values match the strings the
/// site has always stored under its `theme` preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "light-theme")]
    Light,
    #[serde(rename = "dark-theme")]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Accepts both the stored form (`"dark-theme"`) and the short form
    /// people actually type (`"dark"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" | "light-theme" => Some(Self::Light),
            "dark" | "dark-theme" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::White,
                surface: Color::Gray,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Rgb(0xc2, 0x6a, 0x2d),
                error: Color::Red,
                success: Color::Green,
            },
            Self::Dark => Palette {
                background: Color::Rgb(0x12, 0x12, 0x16),
                surface: Color::DarkGray,
                text: Color::Rgb(0xe8, 0xe6, 0xe0),
                muted: Color::Gray,
                accent: Color::Rgb(0xe8, 0x9a, 0x4f),
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }
}

/// Palette derived from the active theme; every widget draws from this.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn stored_strings_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }
}
