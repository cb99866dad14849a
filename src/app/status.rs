#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. ↑/↓ to move, Enter to open.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} required field(s) missing");
    }

    pub fn form_saved(&mut self, form_id: &str) {
        self.message = format!("Saved {form_id}");
    }

    pub fn signatory_added(&mut self) {
        self.message = "Signatory added".to_string();
    }

    pub fn signatory_removed(&mut self) {
        self.message = "Signatory removed".to_string();
    }

    pub fn list_saved(&mut self, count: usize) {
        self.message = format!("Saved {count} signatories");
    }

    pub fn report_generated(&mut self, name: &str) {
        self.message = format!("Report '{name}' queued for generation");
    }

    pub fn report_incomplete(&mut self) {
        self.message = "Name, data source and at least one field are required".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit.".to_string();
    }

    pub fn backend_failed(&mut self, error: &impl std::fmt::Display) {
        self.message = format!("Backend error: {error}");
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
