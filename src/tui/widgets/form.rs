//! The contact section: labelled input fields with inline error messages,
//! the submit button with its busy state, and the status banner.

use super::sections::{abs_rect, render_lines, title_line, PageView};
use crate::tui::form::{ContactForm, FormFocus, StatusKind};
use crate::tui::hits::{HitMap, Target};
use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_ROWS: u16 = 3;

#[allow(clippy::too_many_arguments)]
pub fn render_section(
    frame: &mut Frame,
    content: Rect,
    view: &PageView,
    y0: i64,
    rect: Rect,
    skip: u16,
    form: &ContactForm,
    hits: &mut HitMap,
) -> Option<(u16, u16)> {
    render_lines(
        frame,
        rect,
        skip,
        vec![
            title_line("Contact", view.palette),
            Line::from(Span::styled(
                "Tell us about your project.",
                Style::default().fg(view.palette.muted),
            )),
        ],
    );

    let width = content.width.saturating_sub(2).min(48);
    let mut cursor = None;

    for (index, field) in form.fields.iter().enumerate() {
        let y = y0 + 2 + i64::from(FIELD_ROWS) * i64::try_from(index).unwrap_or(0);
        let Some(field_rect) = abs_rect(content, y, content.x + 1, width, FIELD_ROWS) else {
            continue;
        };

        let focused = view.form_active && form.focus() == FormFocus::Field(index);
        let border_style = if field.error.is_some() {
            Style::default().fg(view.palette.error)
        } else if focused {
            Style::default().fg(view.palette.accent)
        } else {
            Style::default().fg(view.palette.muted)
        };

        let mut title = vec![Span::styled(
            field.kind.label(),
            Style::default().fg(view.palette.text),
        )];
        if let Some(message) = field.error {
            title.push(Span::raw(" "));
            title.push(Span::styled(
                message,
                Style::default().fg(view.palette.error),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title));

        // long values scroll horizontally inside the box
        let inner_width = usize::from(width.saturating_sub(2));
        let input_scroll = field.input.visual_scroll(inner_width);
        #[allow(clippy::cast_possible_truncation)]
        let paragraph = Paragraph::new(field.input.value())
            .scroll((0, input_scroll as u16))
            .block(block);
        frame.render_widget(paragraph, field_rect);
        hits.push(field_rect, Target::FormField(index));

        if focused {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = field_rect.x
                + (field.input.visual_cursor().max(input_scroll) - input_scroll) as u16
                + 1;
            cursor = Some((cursor_x, field_rect.y + 1));
        }
    }

    render_submit(frame, content, view, y0, form, hits);
    render_banner(frame, content, view, y0, form);

    cursor
}

fn render_submit(
    frame: &mut Frame,
    content: Rect,
    view: &PageView,
    y0: i64,
    form: &ContactForm,
    hits: &mut HitMap,
) {
    let label = format!("[ {} ]", form.submit_label());
    let width = u16::try_from(label.len()).unwrap_or(16);
    let y = y0 + 2 + i64::from(FIELD_ROWS) * 4 + 1;
    let Some(button_rect) = abs_rect(content, y, content.x + 1, width, 1) else {
        return;
    };

    let style = if form.is_busy() {
        Style::default()
            .fg(view.palette.muted)
            .add_modifier(Modifier::DIM)
    } else if view.form_active && form.focus() == FormFocus::Submit {
        Style::default()
            .fg(view.palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(view.palette.accent)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), button_rect);
    hits.push(button_rect, Target::SubmitButton);
}

fn render_banner(frame: &mut Frame, content: Rect, view: &PageView, y0: i64, form: &ContactForm) {
    let Some(banner) = form.status() else {
        return;
    };
    let y = y0 + 2 + i64::from(FIELD_ROWS) * 4 + 3;
    let width = content.width.saturating_sub(2).min(60);
    let Some(banner_rect) = abs_rect(content, y, content.x + 1, width, 1) else {
        return;
    };
    let color = match banner.kind {
        StatusKind::Success => view.palette.success,
        StatusKind::Error => view.palette.error,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            banner.message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        banner_rect,
    );
}
