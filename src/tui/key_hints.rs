use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use super::app::Mode;

pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    fn new<S: Into<String>>(key: S, action: S) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    #[must_use]
    pub fn from_mode(mode: &Mode) -> Vec<KeyHint> {
        match mode {
            Mode::Browsing => vec![
                Self::new("q", "quit"),
                Self::new("t", "theme"),
                Self::new("m", "menu"),
                Self::new("↑↓", "scroll"),
                Self::new("←→", "filter"),
                Self::new("tab", "next project"),
                Self::new("enter", "open project"),
                Self::new("c", "contact"),
            ],
            Mode::Menu => vec![
                Self::new("↑↓", "select"),
                Self::new("enter", "go"),
                Self::new("m", "close"),
            ],
            Mode::Form => vec![
                Self::new("tab", "next field"),
                Self::new("enter", "next / send"),
                Self::new("esc", "back"),
            ],
            Mode::Modal => vec![Self::new("esc", "close")],
            Mode::Exiting => vec![],
        }
    }
}

impl<'a> From<KeyHint> for Vec<Span<'a>> {
    fn from(hint: KeyHint) -> Self {
        let hint_style = Style::default();
        vec![
            Span::styled(hint.key, hint_style.add_modifier(Modifier::BOLD)),
            Span::styled(": ", hint_style),
            Span::styled(hint.action, hint_style.fg(Color::Gray)),
            Span::raw("  "),
        ]
    }
}
