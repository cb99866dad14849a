pub(crate) mod dashboard;
mod finboard;
pub(crate) mod fixed_reports;
pub(crate) mod input;
mod options;
mod popup;
pub(crate) mod report_builder;
mod runtime;
pub(crate) mod signatories;
mod status;
mod terminal;

pub use finboard::Finboard;
pub use options::UiOptions;
pub(crate) use runtime::ModalState;
