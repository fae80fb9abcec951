//! Renders the virtual page into the content area: sections are positioned
//! by their unit coordinates, clipped to the viewport, and drawn according
//! to their reveal state. Interactive regions register in the hit map as
//! they render.

use super::{form as form_widget, portfolio as portfolio_widget};
use crate::site::page::{Card, PageMap, Section, SectionId, SERVICES, TEAM, UNITS_PER_ROW};
use crate::site::portfolio::PortfolioItem;
use crate::theme::Palette;
use crate::tui::filter::PortfolioFilter;
use crate::tui::form::ContactForm;
use crate::tui::hits::{CardId, HitMap, Target};
use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct PageView<'a> {
    pub palette: &'a Palette,
    pub offset: i64,
    pub hover: Option<CardId>,
    pub form_active: bool,
}

/// Draws every section that intersects the viewport. Returns the terminal
/// cursor position when the contact form has a focused field.
pub fn render_page(
    frame: &mut Frame,
    content: Rect,
    view: &PageView,
    page: &PageMap,
    items: &[PortfolioItem],
    filter: &PortfolioFilter,
    form: &ContactForm,
    hits: &mut HitMap,
) -> Option<(u16, u16)> {
    let mut cursor = None;

    for section in page.sections() {
        let rows = section.height / i64::from(UNITS_PER_ROW);
        let y0 = i64::from(content.y)
            + (section.top - view.offset).div_euclid(i64::from(UNITS_PER_ROW));
        let Some((rect, skip)) = clip_rows(content, y0, rows) else {
            continue;
        };

        if !section.revealed {
            render_placeholder(frame, rect, skip, section, view.palette);
            continue;
        }

        match section.id {
            SectionId::Home => render_hero(frame, rect, skip, view.palette),
            SectionId::About => render_about(frame, rect, skip, view.palette),
            SectionId::Services => render_card_row(
                frame, content, view, y0, rect, skip, "Services", &SERVICES, false, hits,
            ),
            SectionId::Team => render_card_row(
                frame, content, view, y0, rect, skip, "Team", &TEAM, true, hits,
            ),
            SectionId::Portfolio => {
                portfolio_widget::render_section(
                    frame, content, view, y0, rect, skip, items, filter, hits,
                );
            }
            SectionId::Contact => {
                cursor = form_widget::render_section(
                    frame, content, view, y0, rect, skip, form, hits,
                );
            }
        }
    }

    cursor
}

/// Clips a run of `rows` terminal rows starting at absolute row `y0` to the
/// content area. Returns the visible rect and how many rows were cut off
/// the top.
pub(super) fn clip_rows(content: Rect, y0: i64, rows: i64) -> Option<(Rect, u16)> {
    let content_top = i64::from(content.y);
    let content_bottom = content_top + i64::from(content.height);
    let top = y0.max(content_top);
    let bottom = (y0 + rows).min(content_bottom);
    if bottom <= top {
        return None;
    }
    let rect = Rect::new(
        content.x,
        u16::try_from(top).ok()?,
        content.width,
        u16::try_from(bottom - top).ok()?,
    );
    Some((rect, u16::try_from(top - y0).ok()?))
}

/// A rect at absolute row `y`, rendered only when it fits entirely inside
/// the content area. Elements near the viewport edge pop in whole rather
/// than rendering torn.
pub(super) fn abs_rect(content: Rect, y: i64, x: u16, width: u16, height: u16) -> Option<Rect> {
    let content_top = i64::from(content.y);
    let content_bottom = content_top + i64::from(content.height);
    if y < content_top || y + i64::from(height) > content_bottom {
        return None;
    }
    if x < content.x || x + width > content.x + content.width {
        return None;
    }
    Some(Rect::new(x, u16::try_from(y).ok()?, width, height))
}

pub(super) fn render_lines(frame: &mut Frame, rect: Rect, skip: u16, lines: Vec<Line>) {
    frame.render_widget(Paragraph::new(lines).scroll((skip, 0)), rect);
}

pub(super) fn title_line(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_placeholder(
    frame: &mut Frame,
    rect: Rect,
    skip: u16,
    section: &Section,
    palette: &Palette,
) {
    let dim = Style::default().fg(palette.muted).add_modifier(Modifier::DIM);
    let lines = vec![
        Line::from(Span::styled(section.title, dim)),
        Line::from(Span::styled("· · ·", dim)),
    ];
    render_lines(frame, rect, skip, lines);
}

fn render_hero(frame: &mut Frame, rect: Rect, skip: u16, palette: &Palette) {
    let muted = Style::default().fg(palette.muted);
    let lines = vec![
        Line::from(Span::styled(
            "PHOZZEL Designs",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Interiors with intent."),
        Line::default(),
        Line::from(Span::styled(
            "Residential, commercial and hospitality spaces,",
            muted,
        )),
        Line::from(Span::styled(
            "shaped around the people who use them.",
            muted,
        )),
        Line::default(),
        Line::from(Span::styled("Scroll to explore, or press c to say hello.", muted)),
    ];
    render_lines(frame, rect, skip, lines);
}

fn render_about(frame: &mut Frame, rect: Rect, skip: u16, palette: &Palette) {
    let lines = vec![
        title_line("About", palette),
        Line::default(),
        Line::from("A small studio with strong opinions about light,"),
        Line::from("materials and the rooms people actually live in."),
        Line::default(),
        Line::from("Fifteen years, three cities, one standard:"),
        Line::from("every project earns its keep."),
    ];
    render_lines(frame, rect, skip, lines);
}

#[allow(clippy::too_many_arguments)]
fn render_card_row(
    frame: &mut Frame,
    content: Rect,
    view: &PageView,
    y0: i64,
    rect: Rect,
    skip: u16,
    title: &'static str,
    cards: &[Card],
    team: bool,
    hits: &mut HitMap,
) {
    render_lines(frame, rect, skip, vec![title_line(title, view.palette)]);

    let count = u16::try_from(cards.len()).unwrap_or(1);
    if content.width < count * 8 {
        return;
    }
    let card_width = (content.width - 2) / count;

    for (index, card) in cards.iter().enumerate() {
        let x = content.x + 1 + u16::try_from(index).unwrap_or(0) * card_width;
        let Some(card_rect) = abs_rect(content, y0 + 2, x, card_width - 1, 5) else {
            continue;
        };
        let id = if team {
            CardId::Team(index)
        } else {
            CardId::Service(index)
        };
        render_card(frame, card_rect, card, view, id);
        hits.push(card_rect, Target::Card(id));
    }
}

fn render_card(frame: &mut Frame, rect: Rect, card: &Card, view: &PageView, id: CardId) {
    let elevated = view.hover == Some(id);
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
        .title(Span::styled(card.title, title_style));

    let body = Paragraph::new(Line::from(Span::styled(
        card.blurb,
        Style::default().fg(view.palette.muted),
    )))
    .block(block);
    frame.render_widget(body, rect);
}
