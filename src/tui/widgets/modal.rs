//! The project-detail modal overlay. The backdrop spans the whole screen
//! and registers behind the content, so a click resolves to the content
//! (ignored) or the backdrop (closes).

use crate::site::projects::ProjectDetails;
use crate::theme::Palette;
use crate::tui::hits::{HitMap, Target};
use crate::tui::ui::centered_rect;
use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    entry: &ProjectDetails,
    hits: &mut HitMap,
) {
    hits.push(area, Target::ModalBackdrop);

    let content = centered_rect(area, 62, 14, Some(2));
    hits.push(content, Target::ModalContent);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title("Project");

    let lines = vec![
        Line::from(Span::styled(
            entry.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            entry.description.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            entry.details.clone(),
            Style::default().fg(palette.text),
        )),
    ];

    frame.render_widget(Clear, content);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(palette.background))
            .block(block),
        content,
    );
}
