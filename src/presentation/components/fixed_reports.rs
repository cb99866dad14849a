use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::fixed_reports::FixedReportsPage;

pub(crate) fn render_fixed_reports(frame: &mut Frame<'_>, area: Rect, page: &FixedReportsPage) {
    let items: Vec<ListItem<'static>> = page
        .entries
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    entry.title.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", entry.description),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("  {} · {}", entry.category, entry.last_update),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let mut state = ListState::default();
    if !page.entries.is_empty() {
        state.select(Some(page.selected.min(page.entries.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title("گزارش‌های ثابت (Enter مشاهده، Ctrl+D دانلود)")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}
