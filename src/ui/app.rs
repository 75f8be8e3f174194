//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::session::{MessageCategory, Screen, Session, View};
use super::screens::{builds, quests, skill_tree};
use super::screens::skill_tree::Heading;
use super::widgets::centered_rect;

/// Main UI application
#[derive(Debug, Default)]
pub struct App {
    /// Index into the catalog's node list
    skill_cursor: usize,
    /// Index into the quest display order
    quest_cursor: usize,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_cursor(&self) -> usize {
        self.skill_cursor
    }

    pub fn quest_cursor(&self) -> usize {
        self.quest_cursor
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_input(&mut self, key: KeyEvent, session: &mut Session) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match session.screen() {
            Screen::Welcome => self.handle_welcome_input(key, session),
            Screen::Main(view) => self.handle_main_input(key, session, view),
            Screen::Quit => Ok(true),
        }
    }

    fn handle_welcome_input(&mut self, key: KeyEvent, session: &mut Session) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => session.set_screen(Screen::Main(View::SkillTree)),
            KeyCode::Char('L') => session.switch_language(),
            KeyCode::Char('q') | KeyCode::Esc => {
                session.quit();
                return Ok(true);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_main_input(&mut self, key: KeyEvent, session: &mut Session, view: View) -> Result<bool> {
        // View switching and app keys first
        match key.code {
            KeyCode::Tab => {
                session.set_screen(Screen::Main(view.next()));
                return Ok(false);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                session.set_screen(Screen::Main(View::ALL[index]));
                return Ok(false);
            }
            KeyCode::Char('L') => {
                session.switch_language();
                return Ok(false);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                session.quit();
                return Ok(true);
            }
            _ => {}
        }

        match view {
            View::SkillTree => self.handle_skill_tree_input(key, session),
            View::Builds => self.handle_builds_input(key, session),
            View::Quests => self.handle_quests_input(key, session),
        }
        Ok(false)
    }

    fn handle_skill_tree_input(&mut self, key: KeyEvent, session: &mut Session) {
        let heading = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Heading::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Heading::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Heading::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Heading::Right),
            _ => None,
        };
        if let Some(heading) = heading {
            let nodes = session.planner().catalog().nodes();
            if let Some(next) = skill_tree::nearest_in_direction(nodes, self.skill_cursor, heading) {
                self.skill_cursor = next;
            }
            return;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = session
                    .planner()
                    .catalog()
                    .nodes()
                    .get(self.skill_cursor)
                    .map(|node| node.id.clone());
                if let Some(id) = id {
                    // Outcome is reported through the message log
                    let _ = session.toggle_skill(&id);
                }
            }
            KeyCode::Char('r') => session.reset_skills(),
            KeyCode::Char('g') => session.grant_points(1),
            _ => {}
        }
    }

    fn handle_builds_input(&mut self, key: KeyEvent, session: &mut Session) {
        let count = session.builds().len();
        if count == 0 {
            return;
        }
        let current = session.selected_build_index().unwrap_or(0);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => session.select_build(current.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => session.select_build((current + 1).min(count - 1)),
            KeyCode::Char('a') | KeyCode::Enter => {
                // A rejected request is reported through the message log
                let _ = session.analyze_selected_build();
            }
            _ => {}
        }
    }

    fn handle_quests_input(&mut self, key: KeyEvent, session: &mut Session) {
        let order = quests::quest_order(session.quests());
        if order.is_empty() {
            return;
        }
        self.quest_cursor = self.quest_cursor.min(order.len() - 1);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.quest_cursor = self.quest_cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.quest_cursor = (self.quest_cursor + 1).min(order.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = order[self.quest_cursor];
                if session.toggle_quest(id) {
                    // Follow the quest into its new column
                    if let Some(pos) = quests::quest_order(session.quests()).iter().position(|&q| q == id) {
                        self.quest_cursor = pos;
                    }
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, session: &Session) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match session.screen() {
            Screen::Welcome => self.render_welcome(frame, session),
            Screen::Main(view) => self.render_main(frame, session, view),
            Screen::Quit => {}
        }
    }

    fn render_welcome(&self, frame: &mut Frame, session: &Session) {
        let panel = centered_rect(70, 50, frame.area());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(34, 211, 238)));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let title = vec![
            Line::from(""),
            Line::from(Span::styled(
                session.t("header.title"),
                Style::default().fg(Color::Rgb(34, 211, 238)).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                session.t("welcome.title"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                session.t("welcome.subtitle"),
                Style::default().fg(Color::Gray),
            )),
        ];
        let title_para = Paragraph::new(title)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(title_para, chunks[0]);

        let footer = vec![
            Line::from(Span::styled(
                session.t("welcome.enter"),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                session.t("footer.keys"),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let footer_para = Paragraph::new(footer).alignment(Alignment::Center);
        frame.render_widget(footer_para, chunks[1]);
    }

    fn render_main(&self, frame: &mut Frame, session: &Session, view: View) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, session, view, chunks[0]);

        match view {
            View::SkillTree => skill_tree::render(frame, session, self.skill_cursor, chunks[1]),
            View::Builds => builds::render(frame, session, chunks[1]),
            View::Quests => quests::render(frame, session, self.quest_cursor, chunks[1]),
        }

        self.render_messages(frame, session, chunks[2]);

        let footer = Paragraph::new(Span::styled(
            session.t("footer.keys"),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(footer, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, session: &Session, view: View, area: Rect) {
        let titles: Vec<Line> = View::ALL
            .iter()
            .enumerate()
            .map(|(i, v)| Line::from(format!("{} {}", i + 1, session.t(v.label_key()))))
            .collect();
        let selected = View::ALL.iter().position(|v| *v == view).unwrap_or(0);

        let lang = session.translator().language();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", session.t("header.title")),
                Style::default().fg(Color::Rgb(34, 211, 238)).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(format!(" {} ", lang.code().to_uppercase())).right_aligned())
            .border_style(Style::default().fg(Color::DarkGray));

        let tabs = Tabs::new(titles)
            .block(block)
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    fn render_messages(&self, frame: &mut Frame, session: &Session, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);

        let messages: Vec<Line> = session
            .messages()
            .iter()
            .rev()
            .take(inner.height as usize)
            .rev()
            .map(|msg| {
                let color = match msg.category {
                    MessageCategory::Info => Color::Cyan,
                    MessageCategory::Success => Color::Green,
                    MessageCategory::Warning => Color::LightRed,
                };
                Line::from(Span::styled(&msg.text, Style::default().fg(color)))
            })
            .collect();

        let para = Paragraph::new(messages).block(block);
        frame.render_widget(para, area);
    }
}
