#![deny(rust_2018_idioms)]

//! Terminal dashboard for municipal treasury workflows: data-entry dialogs,
//! a signatory registry and report tooling, all driven from the keyboard.

mod app;
mod backend;
mod domain;
mod form;
mod presentation;

pub use app::{Finboard, UiOptions};
pub use backend::{Backend, BackendError, LogBackend};
pub use domain::{FormKind, ReportConfig, ReportEntry, Signatory};

pub mod prelude {
    pub use super::{Backend, Finboard, FormKind, UiOptions};
}
