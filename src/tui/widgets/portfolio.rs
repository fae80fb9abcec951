//! The portfolio section: filter bar plus the item grid. Item visuals come
//! from the filter's transition state; artwork renders lazily.

use super::sections::{abs_rect, render_lines, title_line, PageView};
use crate::site::page::UNITS_PER_ROW;
use crate::site::portfolio::{PortfolioItem, FILTER_BAR_UNITS, ITEM_UNITS};
use crate::tui::filter::{PortfolioFilter, CONTROLS};
use crate::tui::hits::{CardId, HitMap, Target};
use ratatui::{
    prelude::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Paragraph},
    Frame,
};

#[allow(clippy::too_many_arguments)]
pub fn render_section(
    frame: &mut Frame,
    content: Rect,
    view: &PageView,
    y0: i64,
    rect: Rect,
    skip: u16,
    items: &[PortfolioItem],
    filter: &PortfolioFilter,
    hits: &mut HitMap,
) {
    render_lines(frame, rect, skip, vec![title_line("Portfolio", view.palette)]);
    render_filter_bar(frame, content, view, y0 + 2, filter, hits);

    let bar_rows = FILTER_BAR_UNITS / i64::from(UNITS_PER_ROW);
    let item_rows = ITEM_UNITS / i64::from(UNITS_PER_ROW);

    for (index, item) in items.iter().enumerate() {
        let visual = filter.visual(index);
        if !visual.displayed {
            continue;
        }
        let y = y0 + bar_rows + item_rows * i64::try_from(index).unwrap_or(0);
        let width = content.width.saturating_sub(2).min(56);

        if visual.full {
            let Some(card_rect) = abs_rect(
                content,
                y,
                content.x + 1,
                width,
                u16::try_from(item_rows).unwrap_or(4),
            ) else {
                continue;
            };
            render_item_card(frame, card_rect, view, item, index);
            hits.push(card_rect, Target::Card(CardId::Portfolio(index)));
        } else {
            // mid-transition: shrunk and transparent, still occupying the page
            let Some(row_rect) = abs_rect(content, y + 1, content.x + 1, width, 1) else {
                continue;
            };
            let faded = Paragraph::new(Line::from(Span::styled(
                format!("· {} ·", item.title),
                Style::default()
                    .fg(view.palette.muted)
                    .add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(faded, row_rect);
        }
    }
}

fn render_filter_bar(
    frame: &mut Frame,
    content: Rect,
    view: &PageView,
    y: i64,
    filter: &PortfolioFilter,
    hits: &mut HitMap,
) {
    let Some(bar_rect) = abs_rect(content, y, content.x + 1, content.width.saturating_sub(2), 1)
    else {
        return;
    };

    let mut spans = Vec::new();
    let mut x = bar_rect.x;
    for (index, control) in CONTROLS.iter().enumerate() {
        let active = filter.active_index() == index;
        let text = if active {
            format!("[{}]", control.label())
        } else {
            format!(" {} ", control.label())
        };
        let width = u16::try_from(text.len()).unwrap_or(0);
        let style = if active {
            Style::default()
                .fg(view.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(view.palette.muted)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));

        if x + width <= bar_rect.x + bar_rect.width {
            hits.push(
                Rect::new(x, bar_rect.y, width, 1),
                Target::FilterButton(index),
            );
        }
        x += width + 1;
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), bar_rect);
}

fn render_item_card(
    frame: &mut Frame,
    rect: Rect,
    view: &PageView,
    item: &PortfolioItem,
    index: usize,
) {
    let elevated = view.hover == Some(CardId::Portfolio(index));
    let border_style = if elevated {
        Style::default().fg(view.palette.accent)
    } else {
        Style::default().fg(view.palette.muted)
    };
    let mut title_style = Style::default().fg(view.palette.text);
    if elevated {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if elevated {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(border_style)
        .title(Span::styled(item.title, title_style))
        .title(
            Title::from(Span::styled(
                item.category.label(),
                Style::default().fg(view.palette.muted),
            ))
            .alignment(Alignment::Right),
        );

    let art_line = if item.art_loaded {
        Line::from(Span::styled(
            item.art.join("  "),
            Style::default().fg(view.palette.accent),
        ))
    } else {
        Line::from(Span::styled(
            "░░ loading ░░",
            Style::default()
                .fg(view.palette.muted)
                .add_modifier(Modifier::DIM),
        ))
    };
    let body = Paragraph::new(vec![
        art_line,
        Line::from(Span::styled(
            item.blurb,
            Style::default().fg(view.palette.muted),
        )),
    ])
    .block(block);
    frame.render_widget(body, rect);
}
