use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use tracing::debug;

use crate::{
    backend::Backend,
    domain::{DashboardAction, FormKind, FormSpec, View, dashboard_groups, data_sources, date_ranges},
    form::{FormState, validate},
    presentation::{self, ScreenView, UiContext},
};

use super::{
    dashboard::DashboardState,
    fixed_reports::FixedReportsPage,
    input::{KeyCommand, classify},
    options::UiOptions,
    popup::{PopupState, PopupTarget},
    report_builder::{BuilderFocus, ReportBuilderPage},
    signatories::{SignatoriesPage, SignatoryFocus},
    status::StatusLine,
    terminal::TerminalGuard,
};

const DASHBOARD_HELP: &str = "↑/↓ move · Enter open · Ctrl+Q quit";
const MODAL_HELP: &str = "Tab/↓ next · Enter choose · Ctrl+S save · Esc cancel";
const SIGNATORIES_HELP: &str = "Tab/↓ move · Enter add · Del remove · Ctrl+S save · Esc back";
const FIXED_REPORTS_HELP: &str = "↑/↓ move · Enter view · Ctrl+D download · Esc back";
const BUILDER_HELP: &str = "↑/↓ move · Enter choose/toggle · Ctrl+S generate · Esc back";
const POPUP_HELP: &str = "↑/↓ choose · Enter apply · Esc dismiss";

/// One mounted form dialog. Built fresh on every open, so a reopened form
/// never shows values from an earlier session.
pub(crate) struct ModalState {
    pub kind: FormKind,
    pub form: FormState,
}

impl ModalState {
    fn open(kind: FormKind) -> Self {
        Self {
            kind,
            form: FormState::new(kind.spec()),
        }
    }

    pub(crate) fn spec(&self) -> &FormSpec {
        &self.form.spec
    }
}

/// Top-level application state and event loop. At most one modal is mounted
/// at a time, and page state lives only while its view is active.
pub(crate) struct App {
    view: View,
    dashboard: DashboardState,
    modal: Option<ModalState>,
    popup: Option<PopupState>,
    signatories: Option<SignatoriesPage>,
    fixed_reports: Option<FixedReportsPage>,
    report_builder: Option<ReportBuilderPage>,
    status: StatusLine,
    backend: Box<dyn Backend>,
    options: UiOptions,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(backend: Box<dyn Backend>, options: UiOptions) -> Self {
        Self {
            view: View::Dashboard,
            dashboard: DashboardState::new(),
            modal: None,
            popup: None,
            signatories: None,
            fixed_reports: None,
            report_builder: None,
            status: StatusLine::new(),
            backend,
            options,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            if event::poll(self.options.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(..) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let screen = match self.view {
            View::Dashboard => ScreenView::Dashboard {
                groups: dashboard_groups(),
                position: self.dashboard.selected_position(),
            },
            View::Signatories => match &self.signatories {
                Some(page) => ScreenView::Signatories(page),
                None => ScreenView::Dashboard {
                    groups: dashboard_groups(),
                    position: self.dashboard.selected_position(),
                },
            },
            View::FixedReports => match &self.fixed_reports {
                Some(page) => ScreenView::FixedReports(page),
                None => ScreenView::Dashboard {
                    groups: dashboard_groups(),
                    position: self.dashboard.selected_position(),
                },
            },
            View::ReportBuilder => match &self.report_builder {
                Some(page) => ScreenView::ReportBuilder(page),
                None => ScreenView::Dashboard {
                    groups: dashboard_groups(),
                    position: self.dashboard.selected_position(),
                },
            },
        };
        let ctx = UiContext {
            screen,
            modal: self.modal.as_ref(),
            popup: self.popup.as_ref().map(PopupState::as_render),
            status: self.status.message(),
            help: self.options.show_help.then(|| self.help_text()),
        };
        presentation::draw(frame, &ctx);
    }

    fn help_text(&self) -> &'static str {
        if self.popup.is_some() {
            POPUP_HELP
        } else if self.modal.is_some() {
            MODAL_HELP
        } else {
            match self.view {
                View::Dashboard => DASHBOARD_HELP,
                View::Signatories => SIGNATORIES_HELP,
                View::FixedReports => FIXED_REPORTS_HELP,
                View::ReportBuilder => BUILDER_HELP,
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(&key) {
            return;
        }
        match classify(&key) {
            KeyCommand::Save => self.on_save(),
            KeyCommand::Quit => self.on_quit(),
            KeyCommand::Back => self.on_back(),
            KeyCommand::Activate => self.on_activate(),
            KeyCommand::Download => self.on_download(),
            KeyCommand::NextField => self.on_next(),
            KeyCommand::PrevField => self.on_prev(),
            KeyCommand::Edit(event) => self.on_edit(&event),
            KeyCommand::None => {}
        }
    }

    /// A mounted popup swallows every key until it is applied or dismissed.
    fn handle_popup_key(&mut self, key: &KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                let target = popup.target();
                let selection = popup.selection();
                self.popup = None;
                self.apply_popup(target, selection);
            }
            _ => {}
        }
        true
    }

    fn apply_popup(&mut self, target: PopupTarget, selection: usize) {
        match target {
            PopupTarget::ModalField => {
                if let Some(modal) = &mut self.modal
                    && let Some(field) = modal.form.focused_field_mut()
                {
                    field.set_selected(selection);
                    let label = field.spec.label;
                    self.status.editing(label);
                    self.exit_armed = false;
                }
            }
            PopupTarget::BuilderDataSource => {
                if let Some(page) = &mut self.report_builder {
                    page.set_data_source_index(selection);
                    self.status.set_raw("Data source updated");
                }
            }
            PopupTarget::BuilderDateRange => {
                if let Some(page) = &mut self.report_builder {
                    page.set_date_range_index(selection);
                    self.status.set_raw("Date range updated");
                }
            }
        }
    }

    fn on_save(&mut self) {
        if self.modal.is_some() {
            self.submit_modal();
            return;
        }
        match self.view {
            View::Signatories => self.commit_signatories(),
            View::ReportBuilder => self.generate_report(),
            View::Dashboard | View::FixedReports => {}
        }
    }

    fn on_quit(&mut self) {
        let dirty = self
            .modal
            .as_ref()
            .map(|modal| modal.form.is_dirty())
            .unwrap_or(false);
        if self.options.confirm_exit && dirty && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn on_back(&mut self) {
        self.exit_armed = false;
        if self.modal.take().is_some() {
            self.status.ready();
            return;
        }
        if self.view != View::Dashboard {
            self.navigate(View::Dashboard);
        }
    }

    fn on_activate(&mut self) {
        if self.modal.is_some() {
            self.open_modal_field_popup();
            return;
        }
        match self.view {
            View::Dashboard => match self.dashboard.selected_action() {
                DashboardAction::OpenModal(kind) => self.open_modal(kind),
                DashboardAction::Navigate(view) => self.navigate(view),
            },
            View::Signatories => self.append_signatory(),
            View::FixedReports => self.view_report(),
            View::ReportBuilder => self.activate_builder_control(),
        }
    }

    fn on_download(&mut self) {
        if self.view != View::FixedReports || self.modal.is_some() {
            return;
        }
        let Some(page) = &self.fixed_reports else {
            return;
        };
        let title = page.selected_entry().map(|entry| entry.title);
        match page.download_selected(self.backend.as_mut()) {
            Ok(()) => {
                if let Some(title) = title {
                    self.status.set_raw(format!("Downloading '{title}'"));
                }
            }
            Err(error) => self.status.backend_failed(&error),
        }
    }

    fn on_next(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.form.focus_next_field();
            return;
        }
        match self.view {
            View::Dashboard => self.dashboard.select_next(),
            View::Signatories => {
                if let Some(page) = &mut self.signatories {
                    page.focus_next();
                }
            }
            View::FixedReports => {
                if let Some(page) = &mut self.fixed_reports {
                    page.select_next();
                }
            }
            View::ReportBuilder => {
                if let Some(page) = &mut self.report_builder {
                    page.focus_next();
                }
            }
        }
    }

    fn on_prev(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.form.focus_prev_field();
            return;
        }
        match self.view {
            View::Dashboard => self.dashboard.select_prev(),
            View::Signatories => {
                if let Some(page) = &mut self.signatories {
                    page.focus_prev();
                }
            }
            View::FixedReports => {
                if let Some(page) = &mut self.fixed_reports {
                    page.select_prev();
                }
            }
            View::ReportBuilder => {
                if let Some(page) = &mut self.report_builder {
                    page.focus_prev();
                }
            }
        }
    }

    fn on_edit(&mut self, key: &KeyEvent) {
        if let Some(modal) = &mut self.modal {
            if let Some(field) = modal.form.focused_field_mut()
                && field.handle_key(key)
            {
                let label = field.spec.label;
                self.status.editing(label);
                self.exit_armed = false;
            }
            return;
        }
        match self.view {
            View::Signatories => {
                let Some(page) = &mut self.signatories else {
                    return;
                };
                match page.focus {
                    SignatoryFocus::Entry => {
                        if let Some(field) = page.entry.focused_field_mut()
                            && field.handle_key(key)
                        {
                            let label = field.spec.label;
                            self.status.editing(label);
                        }
                    }
                    SignatoryFocus::Table => {
                        if key.code == KeyCode::Delete && page.remove_selected() {
                            self.status.signatory_removed();
                        }
                    }
                }
            }
            View::ReportBuilder => {
                if let Some(page) = &mut self.report_builder
                    && page.handle_key(key)
                {
                    match page.focus() {
                        BuilderFocus::Name => self.status.set_raw("Editing report name"),
                        _ => self.status.set_raw("Field selection updated"),
                    }
                }
            }
            View::Dashboard | View::FixedReports => {}
        }
    }

    /// Mounts the dialog for `kind`, replacing any dialog already open.
    fn open_modal(&mut self, kind: FormKind) {
        debug!(form = kind.key(), "open form dialog");
        self.popup = None;
        self.exit_armed = false;
        self.modal = Some(ModalState::open(kind));
        self.status.set_raw(format!("{} — Ctrl+S saves, Esc cancels", kind.spec().title));
    }

    fn submit_modal(&mut self) {
        let Some(modal) = &mut self.modal else {
            return;
        };
        let issues = validate(&mut modal.form);
        if issues > 0 {
            self.status.issues_remaining(issues);
            return;
        }
        let kind = modal.kind;
        let payload = modal.form.submit_value();
        match self.backend.persist_form(kind, &payload) {
            Ok(()) => {
                self.modal = None;
                self.exit_armed = false;
                self.status.form_saved(kind.key());
            }
            Err(error) => self.status.backend_failed(&error),
        }
    }

    fn open_modal_field_popup(&mut self) {
        let Some(modal) = &self.modal else {
            return;
        };
        if let Some(field) = modal.form.focused_field() {
            self.popup = PopupState::from_field(field, PopupTarget::ModalField);
        }
    }

    /// Switches the active view, discarding the state of whatever page was
    /// active before. Entering a page builds it fresh.
    fn navigate(&mut self, view: View) {
        debug!(?view, "navigate");
        self.signatories = None;
        self.fixed_reports = None;
        self.report_builder = None;
        self.popup = None;
        match view {
            View::Dashboard => {}
            View::Signatories => self.signatories = Some(SignatoriesPage::new()),
            View::FixedReports => {
                self.fixed_reports = Some(FixedReportsPage::new(self.backend.as_ref()));
            }
            View::ReportBuilder => self.report_builder = Some(ReportBuilderPage::new()),
        }
        self.view = view;
        self.status.ready();
    }

    fn append_signatory(&mut self) {
        let Some(page) = &mut self.signatories else {
            return;
        };
        if page.focus != SignatoryFocus::Entry {
            return;
        }
        if page.append() {
            self.status.signatory_added();
        } else {
            self.status.issues_remaining(page.entry.error_count());
        }
    }

    fn commit_signatories(&mut self) {
        let Some(page) = &self.signatories else {
            return;
        };
        let count = page.list.len();
        match page.commit(self.backend.as_mut()) {
            Ok(()) => {
                self.navigate(View::Dashboard);
                self.status.list_saved(count);
            }
            Err(error) => self.status.backend_failed(&error),
        }
    }

    fn view_report(&mut self) {
        let Some(page) = &self.fixed_reports else {
            return;
        };
        let title = page.selected_entry().map(|entry| entry.title);
        match page.view_selected(self.backend.as_mut()) {
            Ok(()) => {
                if let Some(title) = title {
                    self.status.set_raw(format!("Viewing '{title}'"));
                }
            }
            Err(error) => self.status.backend_failed(&error),
        }
    }

    fn activate_builder_control(&mut self) {
        let Some(page) = &mut self.report_builder else {
            return;
        };
        match page.focus() {
            BuilderFocus::Name => {}
            BuilderFocus::DataSource => {
                self.popup = PopupState::from_catalog(
                    "منبع داده",
                    data_sources().iter().map(|s| s.label.to_string()).collect(),
                    page.data_source_index(),
                    PopupTarget::BuilderDataSource,
                );
            }
            BuilderFocus::DateRange => {
                self.popup = PopupState::from_catalog(
                    "بازه زمانی",
                    date_ranges().iter().map(|r| r.label.to_string()).collect(),
                    page.date_range_index(),
                    PopupTarget::BuilderDateRange,
                );
            }
            BuilderFocus::Field(_) => {
                if page.toggle_focused_field() {
                    self.status.set_raw("Field selection updated");
                }
            }
        }
    }

    fn generate_report(&mut self) {
        let Some(page) = &self.report_builder else {
            return;
        };
        let name = page.config.name.clone();
        match page.generate(self.backend.as_mut()) {
            Ok(true) => self.status.report_generated(&name),
            Ok(false) => self.status.report_incomplete(),
            Err(error) => self.status.backend_failed(&error),
        }
    }
}
