//! Builds screen
//!
//! Build list on the left, the selected loadout and its analysis on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::analysis::AnalysisState;
use crate::items::Build;
use crate::session::Session;
use crate::ui::widgets::rgb;

pub fn render(frame: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(area);

    render_build_list(frame, session, chunks[0]);

    match session.selected_build() {
        Some(build) => render_build_detail(frame, session, build, chunks[1]),
        None => {
            let para = Paragraph::new(Span::styled(
                session.t("builds.select_hint"),
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(para, chunks[1]);
        }
    }
}

fn render_build_list(frame: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", session.t("builds.available")))
        .border_style(Style::default().fg(Color::DarkGray));

    let selected = session.selected_build_index();
    let mut lines = Vec::new();
    for (i, build) in session.builds().iter().enumerate() {
        let is_selected = selected == Some(i);
        let marker = if is_selected { "▸ " } else { "  " };
        let name_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(build.name.clone(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", build.raider.name()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        session.t("builds.keys"),
        Style::default().fg(Color::DarkGray),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn render_build_detail(frame: &mut Frame, session: &Session, build: &Build, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", build.name, build.raider.name()))
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(Span::styled(
            build.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            session.t("builds.loadout"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];

    for item in &build.equipment {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", item.name),
                Style::default().fg(rgb(item.rarity.color())).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}, {}]", item.kind.name(), item.rarity.name()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        let stats = item.stats_summary();
        if !stats.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", stats),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, chunks[0]);

    render_analysis(frame, session, chunks[1]);
}

fn render_analysis(frame: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", session.t("builds.analysis_title")))
        .border_style(Style::default().fg(Color::Magenta));

    let line = match session.analysis_state() {
        AnalysisState::Idle => Line::from(Span::styled(
            session.t("builds.analyze"),
            Style::default().fg(Color::Yellow),
        )),
        AnalysisState::Pending => Line::from(Span::styled(
            session.t("builds.analyzing"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )),
        AnalysisState::Ready(text) => Line::from(Span::styled(text, Style::default().fg(Color::White))),
        AnalysisState::Failed(_) => Line::from(Span::styled(
            session.t("builds.analysis_error"),
            Style::default().fg(Color::LightRed),
        )),
    };

    let para = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
