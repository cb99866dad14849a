use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::PopupRender;
use super::layout::centered_rect;

pub(crate) fn render_popup(frame: &mut Frame<'_>, popup: &PopupRender<'_>) {
    if popup.options.is_empty() {
        return;
    }
    let max_width = popup
        .options
        .iter()
        .map(|option| UnicodeWidthStr::width(option.as_str()))
        .max()
        .unwrap_or(10)
        .max(UnicodeWidthStr::width(popup.title)) as u16;
    let width = max_width.saturating_add(6);
    let height = popup.options.len().saturating_add(2) as u16;
    let area = centered_rect(frame.area(), width, height.max(3));
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'static>> = popup
        .options
        .iter()
        .map(|option| ListItem::new(option.clone()))
        .collect();
    let mut state = ListState::default();
    state.select(Some(popup.selected.min(popup.options.len() - 1)));

    let list = List::new(items)
        .block(Block::default().title(popup.title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}
