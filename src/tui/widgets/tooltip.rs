//! The floating tooltip label: rendered beneath its source element,
//! horizontally centered and clamped to the screen. Styling is fixed (dark
//! on light, light text) independent of the theme, as the site always drew
//! its tooltips.

use crate::tui::tooltip::Tooltip;
use ratatui::{
    prelude::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, tooltip: &Tooltip) {
    let text = format!(" {} ", tooltip.text);
    let width = u16::try_from(text.chars().count()).unwrap_or(area.width);
    if width > area.width || area.height == 0 {
        return;
    }

    let anchor = tooltip.anchor;
    let center = anchor.x + anchor.width / 2;
    let x = center
        .saturating_sub(width / 2)
        .min(area.x + area.width - width)
        .max(area.x);
    let y = (anchor.y + anchor.height).min(area.y + area.height - 1);

    let rect = Rect::new(x, y, width, 1);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().bg(Color::Rgb(0x33, 0x33, 0x33)).fg(Color::White),
        )),
        rect,
    );
}
