use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use crate::{app::ModalState, domain::FieldKind, form::FieldState};

use super::layout::centered_rect;

/// Renders one field as a label line, its value and an optional error line.
/// Shared between the modal dialogs and the signatories entry buffer.
pub(super) fn field_lines(
    field: &FieldState,
    focused: bool,
    max_width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut label = field.spec.label.to_string();
    if field.spec.required {
        label.push_str(" *");
    }
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let marker = if focused { "» " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(label, label_style),
    ]));

    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value = field.display_value();
    let wrapped = wrap(&value, max_width.max(8) as usize);
    let mut first = true;
    for segment in &wrapped {
        let mut spans = vec![
            Span::raw("    "),
            Span::styled(segment.clone().into_owned(), value_style),
        ];
        if first
            && let Some(unit) = field.spec.unit
        {
            spans.push(Span::styled(
                format!(" {unit}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        first = false;
        lines.push(Line::from(spans));
    }
    if wrapped.is_empty() {
        lines.push(Line::from(Span::raw("    ")));
    }

    if let FieldKind::Numeric {
        min: Some(min),
        max: Some(max),
        step,
    } = &field.spec.kind
    {
        let mut hint = format!("    {min} تا {max}");
        if let Some(step) = step {
            hint.push_str(&format!("، گام {step}"));
        }
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            format!("    {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

/// Draws the mounted dialog as a centered overlay above the active screen.
pub(crate) fn render_modal(frame: &mut Frame<'_>, modal: &ModalState) {
    let base = frame.area();
    let width = base.width.saturating_sub(base.width / 4).clamp(30, 72);
    let content_width = width.saturating_sub(6);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (index, field) in modal.form.fields.iter().enumerate() {
        lines.extend(field_lines(field, index == modal.form.field_index, content_width));
        lines.push(Line::from(" "));
    }
    lines.push(Line::from(Span::styled(
        format!("[ {} : Ctrl+S ]", modal.spec().submit_label),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    let height = (lines.len() as u16).saturating_add(2).min(base.height);
    let area = centered_rect(base, width, height);
    frame.render_widget(Clear, area);

    let title_pad = format!(" {} ", modal.spec().title);
    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(title_pad)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(dialog, area);
}
