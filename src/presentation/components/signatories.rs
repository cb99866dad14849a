use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::app::signatories::{SignatoriesPage, SignatoryFocus};

use super::form::field_lines;

pub(crate) fn render_signatories(frame: &mut Frame<'_>, area: Rect, page: &SignatoriesPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(4)])
        .split(area);

    let entry_focused = page.focus == SignatoryFocus::Entry;
    let content_width = chunks[0].width.saturating_sub(6);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (index, field) in page.entry.fields.iter().enumerate() {
        let focused = entry_focused && index == page.entry.field_index;
        lines.extend(field_lines(field, focused, content_width));
    }
    let entry = Paragraph::new(lines).block(
        Block::default()
            .title("افزودن صاحب امضا (Enter)")
            .borders(Borders::ALL)
            .border_style(border_style(entry_focused)),
    );
    frame.render_widget(entry, chunks[0]);

    let rows: Vec<Row<'static>> = page
        .list
        .iter()
        .map(|signatory| {
            Row::new(vec![
                signatory.id.clone(),
                signatory.first_name.clone(),
                signatory.last_name.clone(),
                signatory.position.clone(),
                signatory.reference.clone(),
            ])
        })
        .collect();
    let table_focused = page.focus == SignatoryFocus::Table;
    let mut state = TableState::default();
    if table_focused && !page.list.is_empty() {
        state.select(Some(page.table_index.min(page.list.len() - 1)));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Min(10),
            Constraint::Min(12),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["#", "نام", "نام خانوادگی", "سمت", "معرف"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title("صاحبان امضا (Ctrl+S ذخیره)")
            .borders(Borders::ALL)
            .border_style(border_style(table_focused)),
    )
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("» ");
    frame.render_stateful_widget(table, chunks[1], &mut state);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
