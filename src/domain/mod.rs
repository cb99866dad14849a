mod catalog;
mod form;
mod records;

pub use catalog::{
    DashboardAction, DashboardGroup, View, dashboard_groups, data_sources, date_ranges,
    fixed_reports, seed_signatories, signatory_entry_spec,
};
pub use form::{FieldKind, FieldSpec, FormKind, FormSpec, SelectOption};
pub use records::{ReportConfig, ReportEntry, Signatory};
