//! Skill tree screen
//!
//! Nodes are drawn at their catalog coordinates on a canvas, with an info
//! panel for the selected skill and the point budget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Wrap,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::progression::{NodeState, SkillNode};
use crate::session::Session;
use crate::ui::widgets::{rgb, truncate_name};

const EDGE_LOCKED: Color = Color::Rgb(74, 85, 104);
const EDGE_UNLOCKED: Color = Color::Rgb(34, 211, 238);

/// Cursor movement direction on the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

/// Index of the closest node in `heading` from `nodes[from]`
///
/// Distance along the heading counts once, sideways drift counts double, so
/// moving down from a parent prefers the child straight below it.
pub fn nearest_in_direction(nodes: &[SkillNode], from: usize, heading: Heading) -> Option<usize> {
    let origin = nodes.get(from)?;
    let (ox, oy) = (i32::from(origin.x), i32::from(origin.y));

    nodes
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != from)
        .filter_map(|(i, node)| {
            let dx = i32::from(node.x) - ox;
            let dy = i32::from(node.y) - oy;
            let (along, across) = match heading {
                Heading::Up => (-dy, dx),
                Heading::Down => (dy, dx),
                Heading::Left => (-dx, dy),
                Heading::Right => (dx, dy),
            };
            (along > 0).then_some((i, along + 2 * across.abs()))
        })
        .min_by_key(|&(i, score)| (score, i))
        .map(|(i, _)| i)
}

pub fn render(frame: &mut Frame, session: &Session, cursor: usize, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(area);

    render_info_panel(frame, session, cursor, chunks[0]);
    render_tree(frame, session, cursor, chunks[1]);
}

fn render_info_panel(frame: &mut Frame, session: &Session, cursor: usize, area: Rect) {
    let planner = session.planner();
    let allocation = planner.allocation();
    let t = session.translator();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", t.t("skills.points")))
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(Span::styled(
            t.t_args(
                "skills.remaining",
                &[
                    ("remaining", allocation.remaining().to_string().as_str()),
                    ("total", allocation.budget().to_string().as_str()),
                ],
            ),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match planner.catalog().nodes().get(cursor) {
        Some(node) => {
            let state = planner.node_state(&node.id);
            lines.push(Line::from(Span::styled(
                format!("{} {}", node.icon.glyph(), node.name),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                node.description.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                t.t_args("skills.state", &[("state", state.name())]),
                Style::default().fg(rgb(state.color())),
            )));
            if let Some(prereq) = node.prereq.as_deref().and_then(|id| planner.catalog().get(id)) {
                lines.push(Line::from(Span::styled(
                    t.t_args("skills.requires", &[("skill", prereq.name.as_str())]),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            t.t("skills.hover_hint"),
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        t.t("skills.keys"),
        Style::default().fg(Color::DarkGray),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn render_tree(frame: &mut Frame, session: &Session, cursor: usize, area: Rect) {
    let planner = session.planner();
    let catalog = planner.catalog();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", session.t("skills.title")))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner_width = f64::from(block.inner(area).width.max(1));

    // Tier 2 nodes sit 20% apart; keep labels inside that spacing
    let label_len = ((inner_width / 5.0) as usize).saturating_sub(1).max(3);
    let units_per_col = 100.0 / inner_width;

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for (prereq, node) in catalog.edges() {
                let color = if planner.is_path_unlocked(&node.id) {
                    EDGE_UNLOCKED
                } else {
                    EDGE_LOCKED
                };
                ctx.draw(&CanvasLine::new(
                    f64::from(prereq.x),
                    100.0 - f64::from(prereq.y),
                    f64::from(node.x),
                    100.0 - f64::from(node.y),
                    color,
                ));
            }

            ctx.layer();

            for (i, node) in catalog.nodes().iter().enumerate() {
                let state = planner.node_state(&node.id);
                let name = truncate_name(&node.name, label_len.saturating_sub(2));
                let label = if i == cursor {
                    format!("▸{} {}", node.icon.glyph(), name)
                } else {
                    format!(" {} {}", node.icon.glyph(), name)
                };

                let mut style = Style::default().fg(rgb(state.color()));
                match state {
                    NodeState::Unlocked => style = style.add_modifier(Modifier::BOLD),
                    NodeState::Available => {}
                    NodeState::Locked => style = style.add_modifier(Modifier::DIM),
                }
                if i == cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                let half = label.chars().count() as f64 / 2.0 * units_per_col;
                let x = (f64::from(node.x) - half).max(0.0);
                ctx.print(x, 100.0 - f64::from(node.y), Line::styled(label, style));
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_skill_nodes;

    fn index_of(nodes: &[SkillNode], id: &str) -> usize {
        nodes.iter().position(|n| n.id == id).unwrap()
    }

    #[test]
    fn test_down_from_root_goes_to_middle_branch() {
        let nodes = default_skill_nodes();
        let root = index_of(&nodes, "core_systems");
        let next = nearest_in_direction(&nodes, root, Heading::Down).unwrap();
        assert_eq!(nodes[next].id, "atk_up");
    }

    #[test]
    fn test_sideways_within_tier() {
        let nodes = default_skill_nodes();
        let middle = index_of(&nodes, "atk_up");
        let left = nearest_in_direction(&nodes, middle, Heading::Left).unwrap();
        let right = nearest_in_direction(&nodes, middle, Heading::Right).unwrap();
        assert_eq!(nodes[left].id, "def_up");
        assert_eq!(nodes[right].id, "util_up");
    }

    #[test]
    fn test_edge_of_tree_has_no_neighbour() {
        let nodes = default_skill_nodes();
        let root = index_of(&nodes, "core_systems");
        assert_eq!(nearest_in_direction(&nodes, root, Heading::Up), None);
        assert_eq!(nearest_in_direction(&nodes, 999, Heading::Up), None);
    }
}
