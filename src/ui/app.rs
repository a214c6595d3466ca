use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::store::{Alert, EntryStore};
use crate::view::build_groups;

use super::forms::{EntryField, EntryForm};
use super::helpers::{centered_rect, section_body_height, section_lines, section_title};
use super::screens::{RatingsScreen, Screen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows taken by the screen title.
const TITLE_HEIGHT: u16 = 2;

/// Modal layer drawn over the current screen.
enum Mode {
    Normal,
    Alert(Alert),
}

/// Central application state shared across the TUI.
pub struct App {
    store: EntryStore,
    form: EntryForm,
    screen: Screen,
    mode: Mode,
    status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(EntryStore::new())
    }
}

impl App {
    pub fn new(store: EntryStore) -> Self {
        Self {
            store,
            form: EntryForm::default(),
            screen: Screen::Home,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Entries admitted during this session.
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Process a key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Alert(alert) => match code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Mode::Normal,
                _ => Mode::Alert(alert),
            },
        };

        exit
    }

    /// Route a full key event. Control chords are shortcuts only: Ctrl-C
    /// quits, Ctrl-R opens the ratings screen, and any other chord is ignored
    /// so it never types into the form. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('c') => return true,
                KeyCode::Char('r') => self.handle_ctrl_r(),
                _ => {}
            }
            return false;
        }
        self.handle_key(event.code)
    }

    /// Ctrl-R: the "view ratings" action from the home screen.
    fn handle_ctrl_r(&mut self) {
        if matches!(self.screen, Screen::Home) && matches!(self.mode, Mode::Normal) {
            self.open_ratings();
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match self.screen {
            Screen::Home => match code {
                KeyCode::Esc => {
                    *exit = true;
                }
                KeyCode::Tab | KeyCode::Down => self.form.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form.previous_field(),
                KeyCode::Left => self.form.adjust(-1),
                KeyCode::Right => self.form.adjust(1),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Enter => return self.submit_entry(),
                KeyCode::Char(ch) => {
                    if self.form.push_char(ch) {
                        self.clear_status();
                    }
                }
                _ => {}
            },
            Screen::Ratings(ref mut ratings) => {
                let mut back = false;
                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => back = true,
                    KeyCode::Tab | KeyCode::Right => ratings.focus_next(),
                    KeyCode::BackTab | KeyCode::Left => ratings.focus_previous(),
                    KeyCode::Up | KeyCode::Down => {
                        let step = if code == KeyCode::Up { -1 } else { 1 };
                        let len = build_groups(self.store.entries())
                            .get(ratings.focused)
                            .len();
                        ratings.scroll(step, len);
                    }
                    _ => {}
                }
                if back {
                    self.go_home();
                }
            }
        }
        Mode::Normal
    }

    /// Hand the form contents to the store. Successful adds clear the form;
    /// duplicates and oversized comments raise an alert; incomplete input is
    /// ignored.
    fn submit_entry(&mut self) -> Mode {
        match self.store.try_add(self.form.candidate()) {
            Ok(entry) => {
                info!(category = %entry.category(), "entry added");
                self.set_status(format!("Added {}", entry.name()));
                self.form.reset_after_submit();
                Mode::Normal
            }
            Err(reason) if reason.is_silent() => {
                debug!(%reason, "incomplete entry ignored");
                Mode::Normal
            }
            Err(reason) => {
                debug!(%reason, "entry refused");
                reason.alert().map_or(Mode::Normal, Mode::Alert)
            }
        }
    }

    fn open_ratings(&mut self) {
        debug!("switching to ratings screen");
        self.clear_status();
        self.screen = Screen::Ratings(RatingsScreen::new());
    }

    fn go_home(&mut self) {
        debug!("switching to home screen");
        self.screen = Screen::Home;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.screen.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        match &self.screen {
            Screen::Home => self.draw_home(frame, chunks[1]),
            Screen::Ratings(ratings) => self.draw_ratings(frame, chunks[1], ratings),
        }

        self.draw_footer(frame, chunks[2]);

        if let Mode::Alert(alert) = &self.mode {
            self.draw_alert(frame, area, alert);
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" New rating ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let form = &self.form;
        let lines = vec![
            form.category_line(),
            Line::from(""),
            form.text_line("Name", EntryField::Name),
            Line::from(""),
            form.rating_line(),
            Line::from(""),
            form.text_line("Comment", EntryField::Comment),
            Line::from(Span::styled(
                form.comment_counter(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ]", form.submit_label()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "View Ratings →",
                Style::default().fg(Color::Cyan),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        if matches!(self.mode, Mode::Normal) {
            let cursor = match form.active {
                EntryField::Name => Some(("Name: ".len(), 2)),
                EntryField::Comment => Some(("Comment: ".len(), 6)),
                EntryField::Category | EntryField::Rating => None,
            };
            if let Some((prefix, row)) = cursor {
                let max_col = inner.width.saturating_sub(1) as usize;
                let col = (prefix + form.value_len(form.active)).min(max_col) as u16;
                frame.set_cursor_position((inner.x.saturating_add(col), inner.y + row));
            }
        }
    }

    fn draw_ratings(&self, frame: &mut Frame, area: Rect, ratings: &RatingsScreen) {
        let groups = build_groups(self.store.entries());

        let body_width = area.width.saturating_sub(2) as usize;
        let mut constraints: Vec<Constraint> = groups
            .iter()
            .map(|group| {
                Constraint::Length(section_body_height(group, body_width).saturating_add(2))
            })
            .collect();
        constraints.push(Constraint::Min(0));
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (group, section) in groups.iter().zip(sections.iter()) {
            let offset = ratings.offset(group.category);
            let border_style = if group.category == ratings.focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(section_title(group, offset));
            let inner = block.inner(*section);
            let lines = section_lines(group, offset, inner.width as usize);
            frame.render_widget(Paragraph::new(lines).block(block), *section);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(Span::styled(status.clone(), Style::default().fg(Color::Green)))
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let pairs: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::Alert(_)) => &[("[Enter]", " Dismiss")],
            (Screen::Home, Mode::Normal) => &[
                ("[Tab]", " Next field   "),
                ("[←→]", " Change   "),
                ("[Enter]", " Add   "),
                ("[Ctrl-R]", " View ratings   "),
                ("[Esc]", " Quit"),
            ],
            (Screen::Ratings(_), Mode::Normal) => &[
                ("[Tab]", " Next section   "),
                ("[↑↓]", " Scroll   "),
                ("[Esc]", " Back   "),
                ("[q]", " Quit"),
            ],
        };

        let spans: Vec<Span<'static>> = pairs
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
            .collect();
        Line::from(spans)
    }

    fn draw_alert(&self, frame: &mut Frame, area: Rect, alert: &Alert) {
        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", alert.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let lines = vec![
            Line::from(alert.message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn set_status<S: Into<String>>(&mut self, text: S) {
        self.status = Some(text.into());
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
