//! The sticky header bar: site mark on the left, nav toggle and theme
//! toggle on the right. When the page scrolls down past the floor the whole
//! bar is translated out of view, so nothing renders and nothing is
//! clickable until it comes back.

use crate::theme::{Palette, Theme};
use crate::tui::hits::{HitMap, Target};
use crate::tui::nav::NavMenu;
use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    theme: Theme,
    nav: &NavMenu,
    hits: &mut HitMap,
) {
    if area.height == 0 {
        return;
    }

    let bar_style = Style::default().bg(palette.surface).fg(palette.text);
    let mark = Paragraph::new(Line::from(vec![
        Span::styled(
            " PHOZZEL",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Designs", Style::default().fg(palette.text)),
    ]))
    .style(bar_style);
    frame.render_widget(mark, area);

    // controls flush right: nav toggle then theme toggle
    let controls = format!("[{}]  [{}] ", nav.glyph(), theme.icon());
    let controls_width = 9;
    if area.width > controls_width + 17 {
        let controls_area = Rect::new(
            area.x + area.width - controls_width,
            area.y,
            controls_width,
            1,
        );
        frame.render_widget(Paragraph::new(controls).style(bar_style), controls_area);
        let nav_rect = Rect::new(controls_area.x, area.y, 3, 1);
        let theme_rect = Rect::new(controls_area.x + 5, area.y, 3, 1);
        hits.push(nav_rect, Target::NavToggle);
        hits.push(theme_rect, Target::ThemeToggle);
    }
}
