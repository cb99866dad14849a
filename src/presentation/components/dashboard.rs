use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::DashboardGroup;

/// The landing screen: one bordered card per group, entries beneath it.
pub(crate) fn render_dashboard(
    frame: &mut Frame<'_>,
    area: Rect,
    groups: &[DashboardGroup],
    position: (usize, usize),
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let header = Paragraph::new("داشبورد مالی شهرداری اصفهان")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let constraints: Vec<Constraint> = groups
        .iter()
        .map(|group| Constraint::Length(group.entries.len() as u16 + 2))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    for (group_index, (group, card)) in groups.iter().zip(cards.iter()).enumerate() {
        let lines: Vec<Line<'static>> = group
            .entries
            .iter()
            .enumerate()
            .map(|(entry_index, (label, _))| {
                let selected = position == (group_index, entry_index);
                if selected {
                    Line::from(Span::styled(
                        format!("» {label}"),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(format!("  {label}")))
                }
            })
            .collect();
        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(group.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(widget, *card);
    }
}
