use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::{
        ModalState, fixed_reports::FixedReportsPage, report_builder::ReportBuilderPage,
        signatories::SignatoriesPage,
    },
    domain::DashboardGroup,
};

use super::components::{
    render_dashboard, render_fixed_reports, render_footer, render_modal, render_popup,
    render_report_builder, render_signatories,
};

/// The active full-screen content behind any modal.
pub(crate) enum ScreenView<'a> {
    Dashboard {
        groups: &'static [DashboardGroup],
        position: (usize, usize),
    },
    Signatories(&'a SignatoriesPage),
    FixedReports(&'a FixedReportsPage),
    ReportBuilder(&'a ReportBuilderPage),
}

/// Everything a single frame needs, borrowed from the app for the duration
/// of the draw call.
pub(crate) struct UiContext<'a> {
    pub screen: ScreenView<'a>,
    pub modal: Option<&'a ModalState>,
    pub popup: Option<PopupRender<'a>>,
    pub status: &'a str,
    pub help: Option<&'a str>,
}

pub(crate) struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub(crate) fn draw(frame: &mut Frame<'_>, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(2)])
        .split(frame.area());

    match &ctx.screen {
        ScreenView::Dashboard { groups, position } => {
            render_dashboard(frame, chunks[0], groups, *position);
        }
        ScreenView::Signatories(page) => render_signatories(frame, chunks[0], page),
        ScreenView::FixedReports(page) => render_fixed_reports(frame, chunks[0], page),
        ScreenView::ReportBuilder(page) => render_report_builder(frame, chunks[0], page),
    }

    render_footer(frame, chunks[1], ctx.status, ctx.help);

    if let Some(modal) = ctx.modal {
        render_modal(frame, modal);
    }
    if let Some(popup) = &ctx.popup {
        render_popup(frame, popup);
    }
}
