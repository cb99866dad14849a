use crate::{form::FieldState, presentation::PopupRender};

/// What the chooser popup writes back into when a selection is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PopupTarget {
    ModalField,
    BuilderDataSource,
    BuilderDateRange,
}

pub(crate) struct PopupState {
    target: PopupTarget,
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl PopupState {
    /// Builds a chooser for a focused select field; other field kinds take
    /// text input directly and have no popup.
    pub(crate) fn from_field(field: &FieldState, target: PopupTarget) -> Option<Self> {
        let options = field.options()?;
        if options.is_empty() {
            return None;
        }
        let selected = field
            .selected_option()
            .and_then(|current| options.iter().position(|option| option == current))
            .unwrap_or(0);
        Some(Self {
            target,
            title: field.spec.label.to_string(),
            options: options.iter().map(|option| option.label.to_string()).collect(),
            selected,
        })
    }

    pub(crate) fn from_catalog(
        title: impl Into<String>,
        options: Vec<String>,
        selected: Option<usize>,
        target: PopupTarget,
    ) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        let bounded = selected.unwrap_or(0).min(options.len() - 1);
        Some(Self {
            target,
            title: title.into(),
            options,
            selected: bounded,
        })
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected == 0 {
            self.selected = self.options.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn selection(&self) -> usize {
        self.selected
    }

    pub(crate) fn target(&self) -> PopupTarget {
        self.target
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::FormKind, form::FormState};

    #[test]
    fn popup_opens_on_select_fields_only() {
        let form = FormState::new(FormKind::Access.spec());
        let account = form.field("account").unwrap();
        assert!(PopupState::from_field(account, PopupTarget::ModalField).is_some());

        let bank = FormState::new(FormKind::BankRegistration.spec());
        let name = bank.field("bankName").unwrap();
        assert!(PopupState::from_field(name, PopupTarget::ModalField).is_none());
    }

    #[test]
    fn selection_wraps_both_ways() {
        let form = FormState::new(FormKind::Access.spec());
        let mut popup =
            PopupState::from_field(form.field("accessLevel").unwrap(), PopupTarget::ModalField)
                .unwrap();
        assert_eq!(popup.selection(), 0);
        popup.select_previous();
        assert_eq!(popup.selection(), 2);
        popup.select_next();
        assert_eq!(popup.selection(), 0);
    }
}
