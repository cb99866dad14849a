use indexmap::IndexSet;
use serde::Serialize;

use super::catalog::fields_for_source;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signatory {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub position: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub last_update: &'static str,
    pub category: &'static str,
}

/// Accumulated report-builder configuration. Selected fields are always a
/// subset of the fields legal for the chosen data source; switching the
/// source therefore discards the selection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportConfig {
    pub name: String,
    #[serde(rename = "dataSource")]
    pub data_source: Option<&'static str>,
    #[serde(rename = "dateRange")]
    pub date_range: Option<&'static str>,
    pub fields: IndexSet<&'static str>,
}

impl ReportConfig {
    pub fn set_data_source(&mut self, source: &'static str) {
        if self.data_source != Some(source) {
            self.fields.clear();
        }
        self.data_source = Some(source);
    }

    pub fn set_date_range(&mut self, range: &'static str) {
        self.date_range = Some(range);
    }

    pub fn toggle_field(&mut self, field: &'static str) {
        if !self.fields.shift_remove(field) {
            self.fields.insert(field);
        }
    }

    pub fn available_fields(&self) -> &'static [&'static str] {
        self.data_source.map(fields_for_source).unwrap_or(&[])
    }

    pub fn can_generate(&self) -> bool {
        !self.name.trim().is_empty() && self.data_source.is_some() && !self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_data_source_resets_selected_fields() {
        let mut config = ReportConfig::default();
        config.set_data_source("transactions");
        config.toggle_field("مبلغ");
        config.toggle_field("تاریخ");
        assert_eq!(config.fields.len(), 2);

        config.set_data_source("accounts");
        assert!(config.fields.is_empty());
        assert_eq!(config.data_source, Some("accounts"));
    }

    #[test]
    fn reselecting_same_source_keeps_fields() {
        let mut config = ReportConfig::default();
        config.set_data_source("loans");
        config.toggle_field("مبلغ وام");
        config.set_data_source("loans");
        assert_eq!(config.fields.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes_membership() {
        let mut config = ReportConfig::default();
        config.set_data_source("branches");
        config.toggle_field("نام شعبه");
        assert!(config.fields.contains("نام شعبه"));
        config.toggle_field("نام شعبه");
        assert!(!config.fields.contains("نام شعبه"));
    }

    #[test]
    fn can_generate_requires_name_source_and_fields() {
        let mut config = ReportConfig::default();
        assert!(!config.can_generate());

        config.name = "گزارش ماهانه".to_string();
        assert!(!config.can_generate());

        config.set_data_source("transactions");
        assert!(!config.can_generate());

        config.toggle_field("مبلغ");
        assert!(config.can_generate());

        config.name = "   ".to_string();
        assert!(!config.can_generate());
    }
}
