use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::report_builder::{BuilderFocus, ReportBuilderPage};

pub(crate) fn render_report_builder(frame: &mut Frame<'_>, area: Rect, page: &ReportBuilderPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    let focus = page.focus();
    let name = if page.config.name.is_empty() {
        "نام گزارش را وارد کنید".to_string()
    } else {
        page.config.name.clone()
    };
    let source = page.data_source_label().unwrap_or("انتخاب کنید");
    let range = page.date_range_label().unwrap_or("انتخاب کنید");
    let header_lines = vec![
        control_line("نام گزارش", &name, focus == BuilderFocus::Name),
        control_line("منبع داده", source, focus == BuilderFocus::DataSource),
        control_line("بازه زمانی", range, focus == BuilderFocus::DateRange),
    ];
    let ready = if page.config.can_generate() {
        "آماده تولید (Ctrl+S)"
    } else {
        "نام، منبع داده و حداقل یک فیلد لازم است"
    };
    let header = Paragraph::new(header_lines).block(
        Block::default()
            .title(format!("گزارش‌ساز — {ready}"))
            .borders(Borders::ALL),
    );
    frame.render_widget(header, chunks[0]);

    let fields = page.config.available_fields();
    let lines: Vec<Line<'static>> = if fields.is_empty() {
        vec![Line::from(Span::styled(
            "ابتدا منبع داده را انتخاب کنید",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let mark = if page.config.fields.contains(field) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let focused = focus == BuilderFocus::Field(index);
                let style = if focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let marker = if focused { "» " } else { "  " };
                Line::from(Span::styled(format!("{marker}{mark} {field}"), style))
            })
            .collect()
    };
    let list = Paragraph::new(lines).block(
        Block::default()
            .title("فیلدهای گزارش")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, chunks[1]);
}

fn control_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if focused { "» " } else { "  " };
    Line::from(vec![
        Span::styled(format!("{marker}{label}: "), style),
        Span::styled(value.to_string(), style.fg(Color::White)),
    ])
}
