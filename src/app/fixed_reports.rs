use crate::{
    backend::{Backend, BackendError},
    domain::ReportEntry,
};

/// Read-only listing of the predefined report catalog.
#[derive(Debug)]
pub(crate) struct FixedReportsPage {
    pub entries: Vec<ReportEntry>,
    pub selected: usize,
}

impl FixedReportsPage {
    pub fn new(backend: &dyn Backend) -> Self {
        Self {
            entries: backend.report_catalog(),
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.entries.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_entry(&self) -> Option<&ReportEntry> {
        self.entries.get(self.selected)
    }

    pub fn view_selected(&self, backend: &mut dyn Backend) -> Result<(), BackendError> {
        match self.selected_entry() {
            Some(entry) => backend.view_report(entry.id),
            None => Ok(()),
        }
    }

    pub fn download_selected(&self, backend: &mut dyn Backend) -> Result<(), BackendError> {
        match self.selected_entry() {
            Some(entry) => backend.download_report(entry.id),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn page_loads_the_catalog_through_the_backend() {
        let backend = RecordingBackend::default();
        let page = FixedReportsPage::new(&backend);
        assert_eq!(page.entries.len(), 6);
        assert_eq!(page.selected_entry().unwrap().id, 1);
    }

    #[test]
    fn view_and_download_report_the_selected_id() {
        let mut backend = RecordingBackend::default();
        let mut page = FixedReportsPage::new(&backend);
        page.select_next();
        page.select_next();
        page.view_selected(&mut backend).unwrap();
        page.download_selected(&mut backend).unwrap();
        assert_eq!(backend.viewed, [3]);
        assert_eq!(backend.downloaded, [3]);
    }

    #[test]
    fn selection_wraps_around_the_catalog() {
        let backend = RecordingBackend::default();
        let mut page = FixedReportsPage::new(&backend);
        page.select_prev();
        assert_eq!(page.selected, 5);
        page.select_next();
        assert_eq!(page.selected, 0);
    }
}
