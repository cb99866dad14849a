use serde_json::{Map, Value};

use crate::domain::FormSpec;

use super::field::FieldState;

/// Per-form store: ordered field states plus the focus index. Built fresh
/// on every mount, so closing and reopening a form always shows defaults.
#[derive(Debug, Clone)]
pub struct FormState {
    pub spec: FormSpec,
    pub fields: Vec<FieldState>,
    pub field_index: usize,
}

impl FormState {
    pub fn new(spec: FormSpec) -> Self {
        let fields = spec
            .fields
            .iter()
            .cloned()
            .map(FieldState::from_spec)
            .collect();
        Self {
            spec,
            fields,
            field_index: 0,
        }
    }

    /// Discards all values and errors, keeping the spec. Used by the
    /// signatories entry buffer after a successful append.
    pub fn reset(&mut self) {
        *self = Self::new(self.spec.clone());
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.fields.get(self.field_index)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.field_index)
    }

    pub fn focus_next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.field_index = (self.field_index + 1) % self.fields.len();
    }

    pub fn focus_prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.field_index == 0 {
            self.field_index = self.fields.len() - 1;
        } else {
            self.field_index -= 1;
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.spec.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|field| field.spec.name == name)
    }

    pub fn set_error(&mut self, name: &str, message: String) -> bool {
        if let Some(field) = self.field_mut(name) {
            field.set_error(message);
            true
        } else {
            false
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|field| field.error.is_some()).count()
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.dirty)
    }

    /// The committed record: field name to string value, in declaration
    /// order. Only meaningful after validation has passed.
    pub fn submit_value(&self) -> Value {
        let mut object = Map::new();
        for field in &self.fields {
            object.insert(
                field.spec.name.to_string(),
                Value::String(field.submit_value()),
            );
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormKind;

    #[test]
    fn new_form_starts_clean_with_first_field_focused() {
        let form = FormState::new(FormKind::BankRegistration.spec());
        assert_eq!(form.field_index, 0);
        assert!(!form.is_dirty());
        assert_eq!(form.error_count(), 0);
        assert_eq!(form.fields.len(), 3);
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = FormState::new(FormKind::PropertyRegistration.spec());
        form.focus_prev_field();
        assert_eq!(form.field_index, 1);
        form.focus_next_field();
        assert_eq!(form.field_index, 0);
    }

    #[test]
    fn submit_value_keeps_declaration_order_and_all_fields() {
        let mut form = FormState::new(FormKind::BankRegistration.spec());
        form.field_mut("bankName").unwrap().set_text("بانک الف");
        let value = form.submit_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["bankName", "location", "branch"]);
        assert_eq!(object["bankName"], "بانک الف");
        assert_eq!(object["location"], "");
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut form = FormState::new(FormKind::BankRegistration.spec());
        form.field_mut("bankName").unwrap().set_text("بانک الف");
        form.set_error("location", "کادر الزامی است".to_string());
        form.reset();
        assert!(!form.is_dirty());
        assert_eq!(form.error_count(), 0);
        assert!(form.field("bankName").unwrap().is_blank());
    }
}
