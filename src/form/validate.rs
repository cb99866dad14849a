use super::state::FormState;

/// Localized message attached to every failed required check.
pub const REQUIRED_MESSAGE: &str = "کادر الزامی است";

/// Re-derives the whole error store from the current field values: every
/// required field that is blank gets [`REQUIRED_MESSAGE`], everything else
/// is cleared. Fields are independent; there are no cross-field rules.
/// Returns the number of failing fields.
pub fn validate(form: &mut FormState) -> usize {
    let mut issues = 0;
    for field in &mut form.fields {
        if field.spec.required && field.is_blank() {
            field.set_error(REQUIRED_MESSAGE.to_string());
            issues += 1;
        } else {
            field.clear_error();
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormKind;

    #[test]
    fn flags_every_missing_required_field() {
        let mut form = FormState::new(FormKind::BankRegistration.spec());
        assert_eq!(validate(&mut form), 3);
        for field in &form.fields {
            assert_eq!(field.error.as_deref(), Some(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn bank_registration_with_blank_location_fails_only_there() {
        let mut form = FormState::new(FormKind::BankRegistration.spec());
        form.field_mut("bankName").unwrap().set_text("بانک الف");
        form.field_mut("location").unwrap().set_text("");
        form.field_mut("branch").unwrap().set_text("شعبه ۱");

        assert_eq!(validate(&mut form), 1);
        assert_eq!(
            form.field("location").unwrap().error.as_deref(),
            Some(REQUIRED_MESSAGE)
        );
        assert!(form.field("bankName").unwrap().error.is_none());
        assert!(form.field("branch").unwrap().error.is_none());
    }

    #[test]
    fn optional_fields_never_fail_validation() {
        let mut form = FormState::new(FormKind::FundRequest.spec());
        form.field_mut("requestType").unwrap().set_selected(0);
        form.field_mut("amount").unwrap().set_text("5000000");
        form.field_mut("date").unwrap().set_text("1402/11/01");
        // documentNumber and reason stay empty.
        assert_eq!(validate(&mut form), 0);
    }

    #[test]
    fn out_of_range_percentage_still_passes_presence_check() {
        // Range bounds are carried as display data only; "150" is accepted.
        let mut form = FormState::new(FormKind::Financing.spec());
        form.field_mut("recipientBank").unwrap().set_selected(0);
        form.field_mut("percentage").unwrap().set_text("150");
        form.field_mut("period").unwrap().set_text("12");
        assert_eq!(validate(&mut form), 0);
    }

    #[test]
    fn revalidation_replaces_the_entire_error_store() {
        let mut form = FormState::new(FormKind::Payment.spec());
        assert_eq!(validate(&mut form), 2);
        form.field_mut("region").unwrap().set_selected(0);
        form.field_mut("amount").unwrap().set_text("1000");
        assert_eq!(validate(&mut form), 0);
        assert_eq!(form.error_count(), 0);
    }
}
