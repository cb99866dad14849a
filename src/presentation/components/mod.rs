mod dashboard;
mod fixed_reports;
mod footer;
mod form;
mod layout;
mod popup;
mod report_builder;
mod signatories;

pub(super) use dashboard::render_dashboard;
pub(super) use fixed_reports::render_fixed_reports;
pub(super) use footer::render_footer;
pub(super) use form::render_modal;
pub(super) use popup::render_popup;
pub(super) use report_builder::render_report_builder;
pub(super) use signatories::render_signatories;
