use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{FieldKind, FieldSpec, SelectOption};

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select { selected: Option<usize> },
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: FieldValue,
    pub dirty: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn from_spec(spec: FieldSpec) -> Self {
        let value = match &spec.kind {
            FieldKind::Select(_) => FieldValue::Select { selected: None },
            _ => FieldValue::Text(String::new()),
        };
        FieldState {
            spec,
            value,
            dirty: false,
            error: None,
        }
    }

    /// Feeds a key into the field. Returns true when the field consumed it.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match &mut self.value {
            FieldValue::Text(buffer) => match key.code {
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        return false;
                    }
                    buffer.push(c);
                    self.after_edit();
                    true
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    self.after_edit();
                    true
                }
                KeyCode::Delete => {
                    buffer.clear();
                    self.after_edit();
                    true
                }
                _ => false,
            },
            FieldValue::Select { selected } => {
                let FieldKind::Select(options) = &self.spec.kind else {
                    return false;
                };
                if options.is_empty() {
                    return false;
                }
                match key.code {
                    KeyCode::Left => {
                        *selected = Some(match *selected {
                            Some(0) | None => options.len() - 1,
                            Some(idx) => idx - 1,
                        });
                        self.after_edit();
                        true
                    }
                    KeyCode::Right => {
                        *selected = Some(match *selected {
                            None => 0,
                            Some(idx) => (idx + 1) % options.len(),
                        });
                        self.after_edit();
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    pub fn set_selected(&mut self, index: usize) {
        let FieldKind::Select(options) = &self.spec.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let bounded = index.min(options.len() - 1);
        if let FieldValue::Select { selected } = &mut self.value
            && *selected != Some(bounded)
        {
            *selected = Some(bounded);
            self.after_edit();
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let FieldValue::Text(buffer) = &mut self.value {
            *buffer = text.into();
            self.after_edit();
        }
    }

    pub fn options(&self) -> Option<&[SelectOption]> {
        match &self.spec.kind {
            FieldKind::Select(options) => Some(options),
            _ => None,
        }
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        let FieldValue::Select { selected } = &self.value else {
            return None;
        };
        self.options()?.get((*selected)?)
    }

    /// A required field passes when a trimmed text value or a selection is
    /// present.
    pub fn is_blank(&self) -> bool {
        match &self.value {
            FieldValue::Text(buffer) => buffer.trim().is_empty(),
            FieldValue::Select { selected } => selected.is_none(),
        }
    }

    /// Value as committed on submit: the raw text, or the selected option's
    /// stored value. Blank fields commit an empty string.
    pub fn submit_value(&self) -> String {
        match &self.value {
            FieldValue::Text(buffer) => buffer.clone(),
            FieldValue::Select { .. } => self
                .selected_option()
                .map(|option| option.value.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(buffer) => {
                if buffer.is_empty() {
                    self.spec.placeholder.unwrap_or_default().to_string()
                } else {
                    buffer.clone()
                }
            }
            FieldValue::Select { .. } => self
                .selected_option()
                .map(|option| option.label.to_string())
                .unwrap_or_else(|| self.spec.placeholder.unwrap_or("—").to_string()),
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn text_field() -> FieldState {
        FieldState::from_spec(FieldSpec::text("bankName", "نام بانک"))
    }

    fn select_field() -> FieldState {
        FieldState::from_spec(FieldSpec::select(
            "accessLevel",
            "سطح دسترسی",
            vec![
                SelectOption::new("view", "مشاهده"),
                SelectOption::new("edit", "ویرایش"),
                SelectOption::new("approve", "تأیید"),
            ],
        ))
    }

    #[test]
    fn typing_fills_the_buffer_and_marks_dirty() {
        let mut field = text_field();
        for c in "بانک".chars() {
            assert!(field.handle_key(&KeyEvent::from(KeyCode::Char(c))));
        }
        assert_eq!(field.submit_value(), "بانک");
        assert!(field.dirty);
    }

    #[test]
    fn whitespace_only_text_counts_as_blank() {
        let mut field = text_field();
        field.set_text("   ");
        assert!(field.is_blank());
    }

    #[test]
    fn editing_clears_a_previous_error() {
        let mut field = text_field();
        field.set_error("کادر الزامی است".to_string());
        field.handle_key(&KeyEvent::from(KeyCode::Char('ب')));
        assert!(field.error.is_none());
    }

    #[test]
    fn select_starts_unset_and_cycles_with_arrows() {
        let mut field = select_field();
        assert!(field.is_blank());
        field.handle_key(&KeyEvent::from(KeyCode::Right));
        assert_eq!(field.selected_option().map(|o| o.value), Some("view"));
        field.handle_key(&KeyEvent::from(KeyCode::Left));
        assert_eq!(field.selected_option().map(|o| o.value), Some("approve"));
    }

    #[test]
    fn select_submits_the_option_value_not_the_label() {
        let mut field = select_field();
        field.set_selected(1);
        assert_eq!(field.submit_value(), "edit");
        assert_eq!(field.display_value(), "ویرایش");
    }
}
