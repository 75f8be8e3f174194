//! Quest log screen

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::quests::{Quest, QuestLog};
use crate::session::Session;
use crate::ui::widgets::rgb;

/// Quest ids in display order: in progress first, then completed
pub fn quest_order(log: &QuestLog) -> Vec<u32> {
    log.in_progress()
        .into_iter()
        .chain(log.completed())
        .map(|q| q.id)
        .collect()
}

pub fn render(frame: &mut Frame, session: &Session, cursor: usize, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(10)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let log = session.quests();
    let selected = quest_order(log).get(cursor).copied();

    render_column(frame, &log.in_progress(), &session.t("quests.in_progress"), selected, Color::Yellow, columns[0]);
    render_column(frame, &log.completed(), &session.t("quests.completed"), selected, Color::Green, columns[1]);

    render_detail(frame, session, selected.and_then(|id| log.get(id)), rows[1]);
}

fn render_column(
    frame: &mut Frame,
    quests: &[&Quest],
    title: &str,
    selected: Option<u32>,
    accent: Color,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", title, quests.len()))
        .border_style(Style::default().fg(accent));

    let lines: Vec<Line> = quests
        .iter()
        .flat_map(|quest| {
            let is_selected = selected == Some(quest.id);
            let mut title_style = Style::default().fg(Color::White);
            if is_selected {
                title_style = title_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            if quest.is_complete() {
                title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
            }
            [
                Line::from(vec![
                    Span::styled(if is_selected { "▸ " } else { "  " }, Style::default().fg(accent)),
                    Span::styled(quest.title.clone(), title_style),
                    Span::styled(
                        format!("  [{}]", quest.faction.name()),
                        Style::default().fg(rgb(quest.faction.color())),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", quest.description),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

fn render_detail(frame: &mut Frame, session: &Session, quest: Option<&Quest>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", session.t("quests.title")))
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = Vec::new();
    if let Some(quest) = quest {
        lines.push(Line::from(Span::styled(
            session.t("quests.objectives"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.extend(quest.objectives.iter().map(|o| Line::from(format!("  • {}", o))));
        lines.push(Line::from(Span::styled(
            session.t("quests.rewards"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.extend(quest.rewards.iter().map(|r| Line::from(format!("  • {}", r))));
    }
    lines.push(Line::from(Span::styled(
        session.t("quests.keys"),
        Style::default().fg(Color::DarkGray),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
