use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};

pub(crate) fn render_footer(frame: &mut Frame<'_>, area: Rect, status: &str, help: Option<&str>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status_widget = Paragraph::new(format!("Status: {status}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));
    frame.render_widget(status_widget, rows[0]);

    if let Some(help) = help {
        let help_widget = Paragraph::new(help).style(Style::default().fg(Color::Yellow));
        frame.render_widget(help_widget, rows[1]);
    }
}
