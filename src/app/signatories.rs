use crate::{
    backend::{Backend, BackendError},
    domain::{Signatory, seed_signatories, signatory_entry_spec},
    form::{FormState, validate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignatoryFocus {
    Entry,
    Table,
}

/// Signatories management page: an entry buffer above an editable list.
/// Identifiers come from a counter that only moves forward, so an id is
/// never reissued after a removal.
#[derive(Debug)]
pub(crate) struct SignatoriesPage {
    pub entry: FormState,
    pub list: Vec<Signatory>,
    pub focus: SignatoryFocus,
    pub table_index: usize,
    next_id: u64,
}

impl SignatoriesPage {
    pub fn new() -> Self {
        let list = seed_signatories();
        let next_id = list.len() as u64 + 1;
        Self {
            entry: FormState::new(signatory_entry_spec()),
            list,
            focus: SignatoryFocus::Entry,
            table_index: 0,
            next_id,
        }
    }

    /// Validates the entry buffer and, when clean, appends a new signatory
    /// and resets the buffer. Returns false (leaving errors set) otherwise.
    pub fn append(&mut self) -> bool {
        if validate(&mut self.entry) > 0 {
            return false;
        }
        let id = self.next_id.to_string();
        self.next_id += 1;
        let value = |name: &str| {
            self.entry
                .field(name)
                .map(|field| field.submit_value().trim().to_string())
                .unwrap_or_default()
        };
        self.list.push(Signatory {
            id,
            first_name: value("firstName"),
            last_name: value("lastName"),
            position: value("position"),
            reference: value("reference"),
        });
        self.entry.reset();
        true
    }

    /// Removes the entry with the given id; absent ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.list.retain(|signatory| signatory.id != id);
        if self.table_index >= self.list.len() && !self.list.is_empty() {
            self.table_index = self.list.len() - 1;
        }
    }

    pub fn remove_selected(&mut self) -> bool {
        let Some(signatory) = self.list.get(self.table_index) else {
            return false;
        };
        let id = signatory.id.clone();
        self.remove(&id);
        true
    }

    pub fn commit(&self, backend: &mut dyn Backend) -> Result<(), BackendError> {
        backend.persist_signatory_list(&self.list)
    }

    pub fn focus_next(&mut self) {
        match self.focus {
            SignatoryFocus::Entry => {
                if self.entry.field_index + 1 < self.entry.fields.len() {
                    self.entry.focus_next_field();
                } else if self.list.is_empty() {
                    self.entry.field_index = 0;
                } else {
                    self.focus = SignatoryFocus::Table;
                    self.table_index = 0;
                }
            }
            SignatoryFocus::Table => {
                if self.table_index + 1 < self.list.len() {
                    self.table_index += 1;
                } else {
                    self.focus = SignatoryFocus::Entry;
                    self.entry.field_index = 0;
                }
            }
        }
    }

    pub fn focus_prev(&mut self) {
        match self.focus {
            SignatoryFocus::Entry => {
                if self.entry.field_index > 0 {
                    self.entry.focus_prev_field();
                } else if self.list.is_empty() {
                    self.entry.field_index = self.entry.fields.len() - 1;
                } else {
                    self.focus = SignatoryFocus::Table;
                    self.table_index = self.list.len() - 1;
                }
            }
            SignatoryFocus::Table => {
                if self.table_index > 0 {
                    self.table_index -= 1;
                } else {
                    self.focus = SignatoryFocus::Entry;
                    self.entry.field_index = self.entry.fields.len() - 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::REQUIRED_MESSAGE;

    fn fill_entry(page: &mut SignatoriesPage, first: &str, last: &str) {
        page.entry.field_mut("firstName").unwrap().set_text(first);
        page.entry.field_mut("lastName").unwrap().set_text(last);
        page.entry.field_mut("position").unwrap().set_text("کارشناس");
        page.entry.field_mut("reference").unwrap().set_text("مدیر مالی");
    }

    #[test]
    fn starts_with_the_two_seed_records() {
        let page = SignatoriesPage::new();
        assert_eq!(page.list.len(), 2);
        assert_eq!(page.list[0].first_name, "محمد");
        assert_eq!(page.list[1].id, "2");
    }

    #[test]
    fn append_requires_all_four_fields() {
        let mut page = SignatoriesPage::new();
        page.entry.field_mut("firstName").unwrap().set_text("علی");
        assert!(!page.append());
        assert_eq!(page.list.len(), 2);
        assert_eq!(
            page.entry.field("lastName").unwrap().error.as_deref(),
            Some(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn append_grows_list_and_resets_the_buffer() {
        let mut page = SignatoriesPage::new();
        fill_entry(&mut page, "علی", "رضایی");
        assert!(page.append());
        assert_eq!(page.list.len(), 3);
        let added = page.list.last().unwrap();
        assert_eq!(added.id, "3");
        assert_eq!(added.first_name, "علی");
        assert_eq!(added.last_name, "رضایی");
        assert!(page.entry.field("firstName").unwrap().is_blank());
    }

    #[test]
    fn remove_is_a_noop_for_absent_ids() {
        let mut page = SignatoriesPage::new();
        page.remove("99");
        assert_eq!(page.list.len(), 2);
        page.remove("1");
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.list[0].id, "2");
    }

    #[test]
    fn ids_are_never_reissued_after_removal() {
        let mut page = SignatoriesPage::new();
        page.remove("2");
        fill_entry(&mut page, "علی", "رضایی");
        assert!(page.append());
        fill_entry(&mut page, "زهرا", "موسوی");
        assert!(page.append());
        let ids: Vec<_> = page.list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn focus_walks_entry_fields_then_table_rows() {
        let mut page = SignatoriesPage::new();
        for _ in 0..4 {
            assert_eq!(page.focus, SignatoryFocus::Entry);
            page.focus_next();
        }
        assert_eq!(page.focus, SignatoryFocus::Table);
        page.focus_next();
        assert_eq!(page.table_index, 1);
        page.focus_next();
        assert_eq!(page.focus, SignatoryFocus::Entry);
    }
}
