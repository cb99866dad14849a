use serde_json::Value;
use thiserror::Error;

use crate::domain::{self, FormKind, ReportConfig, ReportEntry, Signatory};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{operation} rejected: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },
    #[error("report {id} not found")]
    UnknownReport { id: u32 },
}

/// Persistence and reporting collaborators behind the dashboard. The UI
/// hands over fully validated payloads and surfaces failures in the status
/// line; nothing here blocks or retries.
pub trait Backend {
    fn persist_form(&mut self, form: FormKind, values: &Value) -> Result<(), BackendError>;
    fn persist_signatory_list(&mut self, list: &[Signatory]) -> Result<(), BackendError>;
    fn generate_report(&mut self, config: &ReportConfig) -> Result<(), BackendError>;
    fn report_catalog(&self) -> Vec<ReportEntry>;
    fn view_report(&mut self, id: u32) -> Result<(), BackendError>;
    fn download_report(&mut self, id: u32) -> Result<(), BackendError>;
}

/// Stand-in backend until a real service integration exists: records every
/// submission as a structured log event and always succeeds.
#[derive(Debug, Default)]
pub struct LogBackend;

impl Backend for LogBackend {
    fn persist_form(&mut self, form: FormKind, values: &Value) -> Result<(), BackendError> {
        tracing::info!(form = form.key(), payload = %values, "persist form submission");
        Ok(())
    }

    fn persist_signatory_list(&mut self, list: &[Signatory]) -> Result<(), BackendError> {
        let payload = serde_json::to_string(list).unwrap_or_default();
        tracing::info!(count = list.len(), %payload, "persist signatory list");
        Ok(())
    }

    fn generate_report(&mut self, config: &ReportConfig) -> Result<(), BackendError> {
        let payload = serde_json::to_string(config).unwrap_or_default();
        tracing::info!(%payload, "generate custom report");
        Ok(())
    }

    fn report_catalog(&self) -> Vec<ReportEntry> {
        domain::fixed_reports()
    }

    fn view_report(&mut self, id: u32) -> Result<(), BackendError> {
        if !self.report_catalog().iter().any(|entry| entry.id == id) {
            return Err(BackendError::UnknownReport { id });
        }
        tracing::info!(report = id, "view fixed report");
        Ok(())
    }

    fn download_report(&mut self, id: u32) -> Result<(), BackendError> {
        if !self.report_catalog().iter().any(|entry| entry.id == id) {
            return Err(BackendError::UnknownReport { id });
        }
        tracing::info!(report = id, "download fixed report");
        Ok(())
    }
}

/// Test double that records every call so tests can assert the exact
/// committed payloads and call counts.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub forms: Vec<(FormKind, Value)>,
    pub signatory_lists: Vec<Vec<Signatory>>,
    pub generated: Vec<ReportConfig>,
    pub viewed: Vec<u32>,
    pub downloaded: Vec<u32>,
}

/// Clonable handle over a [`RecordingBackend`], for tests that hand the
/// backend to the app but still need to read it afterwards.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct SharedBackend(pub std::rc::Rc<std::cell::RefCell<RecordingBackend>>);

#[cfg(test)]
impl Backend for SharedBackend {
    fn persist_form(&mut self, form: FormKind, values: &Value) -> Result<(), BackendError> {
        self.0.borrow_mut().persist_form(form, values)
    }

    fn persist_signatory_list(&mut self, list: &[Signatory]) -> Result<(), BackendError> {
        self.0.borrow_mut().persist_signatory_list(list)
    }

    fn generate_report(&mut self, config: &ReportConfig) -> Result<(), BackendError> {
        self.0.borrow_mut().generate_report(config)
    }

    fn report_catalog(&self) -> Vec<ReportEntry> {
        self.0.borrow().report_catalog()
    }

    fn view_report(&mut self, id: u32) -> Result<(), BackendError> {
        self.0.borrow_mut().view_report(id)
    }

    fn download_report(&mut self, id: u32) -> Result<(), BackendError> {
        self.0.borrow_mut().download_report(id)
    }
}

#[cfg(test)]
impl Backend for RecordingBackend {
    fn persist_form(&mut self, form: FormKind, values: &Value) -> Result<(), BackendError> {
        self.forms.push((form, values.clone()));
        Ok(())
    }

    fn persist_signatory_list(&mut self, list: &[Signatory]) -> Result<(), BackendError> {
        self.signatory_lists.push(list.to_vec());
        Ok(())
    }

    fn generate_report(&mut self, config: &ReportConfig) -> Result<(), BackendError> {
        self.generated.push(config.clone());
        Ok(())
    }

    fn report_catalog(&self) -> Vec<ReportEntry> {
        domain::fixed_reports()
    }

    fn view_report(&mut self, id: u32) -> Result<(), BackendError> {
        self.viewed.push(id);
        Ok(())
    }

    fn download_report(&mut self, id: u32) -> Result<(), BackendError> {
        self.downloaded.push(id);
        Ok(())
    }
}
