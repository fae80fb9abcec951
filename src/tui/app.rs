use super::{
    filter::{PortfolioFilter, CONTROLS},
    form::{ContactForm, FormFocus},
    hits::{CardId, HitMap, Target},
    key_hints::KeyHint,
    modal::Modal,
    nav::{NavMenu, LINKS},
    timers::{Effect, TimerQueue},
    tooltip::TooltipSlot,
    viewport::{Viewport, SCROLL_STEP},
    widgets,
};
use crate::{
    site::{
        page::{PageMap, SectionId, SERVICES},
        portfolio::{self, PortfolioItem, ITEM_UNITS},
        projects::{ProjectSource, SampleProjects},
    },
    storage::config_manager::ConfigManager,
    theme::Theme,
};
use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Menu,
    Form,
    Modal,
    Exiting,
}

/// Owns every behavior's state and wires events through to them.
pub struct App<'a> {
    pub mode: Mode,
    theme: Theme,
    config: Option<&'a ConfigManager<'a>>,
    page: PageMap,
    viewport: Viewport,
    nav: NavMenu,
    items: Vec<PortfolioItem>,
    filter: PortfolioFilter,
    form: ContactForm,
    modal: Modal,
    projects: Box<dyn ProjectSource>,
    tooltip: TooltipSlot,
    hover: Option<CardId>,
    hits: HitMap,
    timers: TimerQueue,
    clock_ms: u64,
    project_cursor: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let page = PageMap::new();
        let items = portfolio::sample_items();
        let viewport = Viewport::new(page.total_height());
        let filter = PortfolioFilter::new(items.len());
        Self {
            mode: Mode::Browsing,
            theme,
            config: None,
            page,
            viewport,
            nav: NavMenu::default(),
            items,
            filter,
            form: ContactForm::new(),
            modal: Modal::default(),
            projects: Box::new(SampleProjects),
            tooltip: TooltipSlot::default(),
            hover: None,
            hits: HitMap::default(),
            timers: TimerQueue::default(),
            clock_ms: 0,
            project_cursor: 0,
        }
    }

    /// Persist theme toggles through this config manager.
    #[must_use]
    pub fn with_config(mut self, config: &'a ConfigManager<'a>) -> Self {
        self.config = Some(config);
        self
    }

    /// Swap in a different project catalog behind the modal.
    #[must_use]
    pub fn with_projects(mut self, projects: Box<dyn ProjectSource>) -> Self {
        self.projects = projects;
        self
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and writes the new value to storage; a failed write
    /// is logged, never fatal.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(config) = self.config {
            if let Err(error) = config.write_theme(self.theme) {
                tracing::warn!(%error, "could not persist theme preference");
            }
        }
    }

    /// Shows the detail modal for a project id; unknown ids render the
    /// catalog's fallback entry. Reachable from outside the event loop.
    pub fn open_modal(&mut self, project_id: &str) {
        self.modal.open(self.projects.as_ref(), project_id);
        self.mode = Mode::Modal;
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        if self.mode == Mode::Modal {
            self.mode = Mode::Browsing;
        }
    }

    /// Manages how the whole app reacts to an individual user keypress.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Browsing => match key.code {
                KeyCode::Char('q') => {
                    self.mode = Mode::Exiting;
                }
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('m') => {
                    self.nav.toggle();
                    self.mode = Mode::Menu;
                }
                KeyCode::Char('c') => {
                    if let Some(top) = self.page.resolve_anchor("#contact") {
                        self.viewport.scroll_to(top);
                    }
                    self.form.set_focus(FormFocus::Field(0));
                    self.mode = Mode::Form;
                }
                KeyCode::Up => self.scroll(-SCROLL_STEP),
                KeyCode::Down => self.scroll(SCROLL_STEP),
                KeyCode::PageUp => {
                    self.viewport.page_up();
                    self.after_scroll();
                }
                KeyCode::PageDown => {
                    self.viewport.page_down();
                    self.after_scroll();
                }
                KeyCode::Left => self.cycle_filter(-1),
                KeyCode::Right => self.cycle_filter(1),
                KeyCode::Tab => self.cursor_next_project(),
                KeyCode::Enter => {
                    if let Some(item) = self.items.get(self.project_cursor) {
                        if self.filter.visual(self.project_cursor).displayed {
                            let project_id = item.project_id;
                            self.open_modal(project_id);
                        }
                    }
                }
                _ => {}
            },
            Mode::Menu => match key.code {
                KeyCode::Esc | KeyCode::Char('m') => {
                    self.nav.close();
                    self.mode = Mode::Browsing;
                }
                KeyCode::Up => self.nav.select_previous(),
                KeyCode::Down => self.nav.select_next(),
                KeyCode::Enter => self.activate_link(self.nav.selected_index()),
                _ => {}
            },
            Mode::Form => match key.code {
                KeyCode::Esc => {
                    self.form.blur();
                    self.mode = Mode::Browsing;
                }
                KeyCode::Tab => self.form.focus_next(),
                KeyCode::BackTab => self.form.focus_previous(),
                KeyCode::Enter => {
                    if self.form.focus() == FormFocus::Submit {
                        self.submit_form();
                    } else {
                        self.form.focus_next();
                    }
                }
                _ => self.form.handle_input(&Event::Key(key)),
            },
            Mode::Modal => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_modal(),
                _ => {}
            },
            Mode::Exiting => {}
        }
    }

    /// Pointer events resolve against the hit map built during the last
    /// render, so regions react exactly as drawn.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll(-SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll(SCROLL_STEP),
            MouseEventKind::Moved => self.pointer_moved(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn pointer_moved(&mut self, column: u16, row: u16) {
        let target = self.hits.target_at(column, row);

        self.hover = match target {
            Some(Target::Card(id)) => Some(id),
            _ => None,
        };

        match target.and_then(|t| tooltip_text(t).map(|text| (t, text))) {
            Some((t, text)) => {
                if let Some(anchor) = self.hits.area_of(t) {
                    self.tooltip.show(text, anchor);
                }
            }
            None => self.tooltip.clear(),
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let Some(target) = self.hits.target_at(column, row) else {
            return;
        };
        match target {
            Target::ModalContent => {}
            Target::ModalBackdrop => self.close_modal(),
            Target::ThemeToggle => self.toggle_theme(),
            Target::NavToggle => {
                self.nav.toggle();
                self.mode = if self.nav.is_open() {
                    Mode::Menu
                } else {
                    Mode::Browsing
                };
            }
            Target::NavLink(index) => self.activate_link(index),
            Target::FilterButton(index) => self.select_filter(index),
            Target::Card(CardId::Portfolio(index)) => {
                self.project_cursor = index;
                if let Some(item) = self.items.get(index) {
                    let project_id = item.project_id;
                    self.open_modal(project_id);
                }
            }
            Target::Card(_) => {}
            Target::FormField(index) => {
                // a click that moves focus off a field is still a blur
                if self.mode == Mode::Form {
                    self.form.blur();
                }
                self.mode = Mode::Form;
                self.form.set_focus(FormFocus::Field(index));
            }
            Target::SubmitButton => self.submit_form(),
        }
    }

    /// Advances animations and fires due timers. `now_ms` is the caller's
    /// clock, which tests drive by hand.
    pub fn tick(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
        if self.viewport.tick() {
            self.after_scroll();
        }
        for effect in self.timers.fire_due(now_ms) {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::HideStatus => self.form.hide_status(),
            Effect::RestoreSubmit => self.form.restore_submit(),
            Effect::ShowItem(index) => self.filter.show_item(index),
            Effect::HideItem(index) => self.filter.hide_item(index),
        }
    }

    fn scroll(&mut self, delta: i64) {
        self.viewport.scroll_by(delta);
        self.after_scroll();
    }

    /// Runs after every offset change: monotonic reveals plus the fire-once
    /// lazy artwork check.
    fn after_scroll(&mut self) {
        self.page
            .reveal_in_view(self.viewport.offset(), self.viewport.height_units());

        let portfolio_top = self.page.section(SectionId::Portfolio).top;
        let view_top = self.viewport.offset();
        let view_bottom = view_top + self.viewport.height_units();
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.art_loaded {
                continue;
            }
            let top = portfolio::item_top(portfolio_top, index);
            if top < view_bottom && top + ITEM_UNITS > view_top {
                item.art_loaded = true;
            }
        }
    }

    /// Nav link activation: the menu closes either way; the scroll only
    /// happens when the anchor resolves to a section.
    fn activate_link(&mut self, index: usize) {
        self.nav.select(index);
        let anchor = self.nav.selected_link().anchor;
        self.nav.close();
        self.mode = Mode::Browsing;
        if let Some(top) = self.page.resolve_anchor(anchor) {
            self.viewport.scroll_to(top);
        }
    }

    fn select_filter(&mut self, index: usize) {
        self.filter
            .select(index, &self.items, &mut self.timers, self.clock_ms);
    }

    fn cycle_filter(&mut self, delta: i64) {
        let count = i64::try_from(CONTROLS.len()).unwrap_or(1);
        let current = i64::try_from(self.filter.active_index()).unwrap_or(0);
        let next = (current + delta).rem_euclid(count);
        self.select_filter(usize::try_from(next).unwrap_or(0));
    }

    fn cursor_next_project(&mut self) {
        let displayed: Vec<usize> = (0..self.items.len())
            .filter(|&index| self.filter.visual(index).displayed)
            .collect();
        if displayed.is_empty() {
            return;
        }
        let next = displayed
            .iter()
            .find(|&&index| index > self.project_cursor)
            .or_else(|| displayed.first());
        if let Some(&index) = next {
            self.project_cursor = index;
        }
    }

    fn submit_form(&mut self) {
        self.form.submit(&mut self.timers, self.clock_ms);
    }

    /// Renders the app state into a terminal frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let palette = self.theme.palette();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            area,
        );

        let header_rows = u16::from(!self.viewport.header_hidden());
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_rows),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        let header_area = layout[0];
        let content_area = layout[1];
        let hints_area = layout[2];

        // first draw and terminal resizes re-run the scroll handlers
        if self.viewport.resize(content_area.height) {
            self.after_scroll();
        }

        self.hits.clear();
        widgets::header::render(
            frame,
            header_area,
            &palette,
            self.theme,
            &self.nav,
            &mut self.hits,
        );

        let view = widgets::sections::PageView {
            palette: &palette,
            offset: self.viewport.offset(),
            hover: self.hover,
            form_active: self.mode == Mode::Form,
        };
        let cursor = widgets::sections::render_page(
            frame,
            content_area,
            &view,
            &self.page,
            &self.items,
            &self.filter,
            &self.form,
            &mut self.hits,
        );

        let key_hints = KeyHint::from_mode(&self.mode);
        let key_hint_line: Line = Line::from(
            key_hints
                .into_iter()
                .flat_map(Into::<Vec<Span>>::into)
                .collect::<Vec<Span>>(),
        );
        frame.render_widget(Paragraph::new(key_hint_line), hints_area);

        if self.nav.is_open() {
            self.render_nav_overlay(frame, content_area, &palette);
        }

        if let Some(entry) = self.modal.entry() {
            widgets::modal::render(frame, area, &palette, entry, &mut self.hits);
        }

        if self.mode == Mode::Form {
            if let Some((x, y)) = cursor {
                frame.set_cursor(x, y);
            }
        }

        if let Some(tooltip) = self.tooltip.active() {
            widgets::tooltip::render(frame, area, tooltip);
        }
    }

    fn render_nav_overlay(
        &mut self,
        frame: &mut Frame,
        content: Rect,
        palette: &crate::theme::Palette,
    ) {
        let width = 20u16.min(content.width);
        let height = (u16::try_from(LINKS.len()).unwrap_or(6) + 2).min(content.height);
        let x = content.x + content.width.saturating_sub(width + 1);
        let rect = Rect::new(x, content.y, width, height);

        let lines: Vec<Line> = LINKS
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let style = if index == self.nav.selected_index() {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(palette.text)
                };
                Line::from(Span::styled(link.label, style))
            })
            .collect();

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().bg(palette.background))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(palette.accent))
                        .title(format!("Menu {}", self.nav.glyph())),
                ),
            rect,
        );

        for index in 0..LINKS.len() {
            let row = rect.y + 1 + u16::try_from(index).unwrap_or(0);
            if row + 1 < rect.y + rect.height && rect.width > 2 {
                self.hits.push(
                    Rect::new(rect.x + 1, row, rect.width - 2, 1),
                    Target::NavLink(index),
                );
            }
        }
    }
}

fn tooltip_text(target: Target) -> Option<&'static str> {
    match target {
        Target::NavToggle => Some("Toggle navigation"),
        Target::ThemeToggle => Some("Switch between light and dark"),
        Target::Card(CardId::Service(index)) => SERVICES.get(index).and_then(|card| card.tooltip),
        _ => None,
    }
}
