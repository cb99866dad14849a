use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    backend::{Backend, BackendError},
    domain::{ReportConfig, data_sources, date_ranges},
};

/// Which control on the report-builder page owns the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuilderFocus {
    Name,
    DataSource,
    DateRange,
    Field(usize),
}

/// Custom-report configuration page. The three header controls are always
/// present; the checkbox list below them follows the chosen data source.
#[derive(Debug, Default)]
pub(crate) struct ReportBuilderPage {
    pub config: ReportConfig,
    focus_index: usize,
}

impl ReportBuilderPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn focus_count(&self) -> usize {
        3 + self.config.available_fields().len()
    }

    pub fn focus(&self) -> BuilderFocus {
        match self.focus_index {
            0 => BuilderFocus::Name,
            1 => BuilderFocus::DataSource,
            2 => BuilderFocus::DateRange,
            idx => BuilderFocus::Field(idx - 3),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % self.focus_count();
    }

    pub fn focus_prev(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = self.focus_count() - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    /// Typing edits the name; Space toggles the focused checkbox.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.focus() {
            BuilderFocus::Name => match key.code {
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        return false;
                    }
                    self.config.name.push(c);
                    true
                }
                KeyCode::Backspace => {
                    self.config.name.pop();
                    true
                }
                KeyCode::Delete => {
                    self.config.name.clear();
                    true
                }
                _ => false,
            },
            BuilderFocus::Field(idx) => match key.code {
                KeyCode::Char(' ') => {
                    if let Some(field) = self.config.available_fields().get(idx).copied() {
                        self.config.toggle_field(field);
                        return true;
                    }
                    false
                }
                _ => false,
            },
            BuilderFocus::DataSource | BuilderFocus::DateRange => false,
        }
    }

    /// Toggles the focused checkbox on Enter as well, so activation behaves
    /// like the other screens.
    pub fn toggle_focused_field(&mut self) -> bool {
        if let BuilderFocus::Field(idx) = self.focus()
            && let Some(field) = self.config.available_fields().get(idx).copied()
        {
            self.config.toggle_field(field);
            return true;
        }
        false
    }

    pub fn set_data_source_index(&mut self, index: usize) {
        if let Some(source) = data_sources().get(index) {
            self.config.set_data_source(source.value);
            // The checkbox list may have shrunk under the cursor.
            self.focus_index = self.focus_index.min(self.focus_count() - 1);
        }
    }

    pub fn set_date_range_index(&mut self, index: usize) {
        if let Some(range) = date_ranges().get(index) {
            self.config.set_date_range(range.value);
        }
    }

    pub fn data_source_index(&self) -> Option<usize> {
        let current = self.config.data_source?;
        data_sources().iter().position(|s| s.value == current)
    }

    pub fn date_range_index(&self) -> Option<usize> {
        let current = self.config.date_range?;
        date_ranges().iter().position(|r| r.value == current)
    }

    pub fn data_source_label(&self) -> Option<&'static str> {
        Some(data_sources()[self.data_source_index()?].label)
    }

    pub fn date_range_label(&self) -> Option<&'static str> {
        Some(date_ranges()[self.date_range_index()?].label)
    }

    /// Fires the generation collaborator; refuses while the configuration
    /// is incomplete. Returns whether a report was handed off.
    pub fn generate(&self, backend: &mut dyn Backend) -> Result<bool, BackendError> {
        if !self.config.can_generate() {
            return Ok(false);
        }
        backend.generate_report(&self.config)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    fn complete_page() -> ReportBuilderPage {
        let mut page = ReportBuilderPage::new();
        page.config.name = "گزارش آزمایشی".to_string();
        page.set_data_source_index(0);
        page.set_date_range_index(1);
        page.config.toggle_field("مبلغ");
        page
    }

    #[test]
    fn focus_covers_header_controls_and_source_fields() {
        let mut page = ReportBuilderPage::new();
        assert_eq!(page.focus(), BuilderFocus::Name);
        page.focus_next();
        page.focus_next();
        assert_eq!(page.focus(), BuilderFocus::DateRange);
        // No source chosen yet, so the cursor wraps back to the name.
        page.focus_next();
        assert_eq!(page.focus(), BuilderFocus::Name);

        page.set_data_source_index(0);
        page.focus_next();
        page.focus_next();
        page.focus_next();
        assert_eq!(page.focus(), BuilderFocus::Field(0));
    }

    #[test]
    fn space_toggles_the_focused_checkbox() {
        let mut page = ReportBuilderPage::new();
        page.set_data_source_index(0);
        while page.focus() != BuilderFocus::Field(0) {
            page.focus_next();
        }
        let space = KeyEvent::from(KeyCode::Char(' '));
        assert!(page.handle_key(&space));
        assert_eq!(page.config.fields.len(), 1);
        assert!(page.handle_key(&space));
        assert!(page.config.fields.is_empty());
    }

    #[test]
    fn changing_source_clamps_the_cursor() {
        let mut page = ReportBuilderPage::new();
        page.set_data_source_index(0); // transactions: 5 fields
        while page.focus() != BuilderFocus::Field(4) {
            page.focus_next();
        }
        page.set_data_source_index(1); // accounts: 4 fields
        assert_eq!(page.focus(), BuilderFocus::Field(3));
    }

    #[test]
    fn generate_refuses_incomplete_configs() {
        let mut backend = RecordingBackend::default();
        let page = ReportBuilderPage::new();
        assert!(!page.generate(&mut backend).unwrap());
        assert!(backend.generated.is_empty());
    }

    #[test]
    fn generate_hands_off_the_full_config_once() {
        let mut backend = RecordingBackend::default();
        let page = complete_page();
        assert!(page.generate(&mut backend).unwrap());
        assert_eq!(backend.generated.len(), 1);
        let config = &backend.generated[0];
        assert_eq!(config.data_source, Some("transactions"));
        assert_eq!(config.date_range, Some("last_quarter"));
        assert!(config.fields.contains("مبلغ"));
    }
}
