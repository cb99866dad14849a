#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    BankRegistration,
    Access,
    FundRequest,
    Payment,
    Loan,
    Financing,
    PropertyRegistration,
}

impl FormKind {
    pub const ALL: [FormKind; 7] = [
        FormKind::BankRegistration,
        FormKind::Access,
        FormKind::FundRequest,
        FormKind::Payment,
        FormKind::Loan,
        FormKind::Financing,
        FormKind::PropertyRegistration,
    ];

    /// Stable identifier used in persisted payloads and log records.
    pub fn key(self) -> &'static str {
        match self {
            FormKind::BankRegistration => "bankRegistration",
            FormKind::Access => "access",
            FormKind::FundRequest => "fundRequest",
            FormKind::Payment => "payment",
            FormKind::Loan => "loan",
            FormKind::Financing => "financing",
            FormKind::PropertyRegistration => "propertyRegistration",
        }
    }

    pub fn spec(self) -> FormSpec {
        match self {
            FormKind::BankRegistration => bank_registration_spec(),
            FormKind::Access => access_spec(),
            FormKind::FundRequest => fund_request_spec(),
            FormKind::Payment => payment_spec(),
            FormKind::Loan => loan_spec(),
            FormKind::Financing => financing_spec(),
            FormKind::PropertyRegistration => property_registration_spec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Unit suffix rendered after the input (ریال, ٪, ماه).
    pub unit: Option<&'static str>,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
            unit: None,
            placeholder: None,
        }
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select(options),
            required: true,
            unit: None,
            placeholder: None,
        }
    }

    pub fn numeric(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Numeric {
                min: None,
                max: None,
                step: None,
            },
            required: true,
            unit: None,
            placeholder: Some("0"),
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn with_bounds(mut self, min: f64, max: Option<f64>, step: Option<f64>) -> Self {
        if let FieldKind::Numeric {
            min: ref mut lo,
            max: ref mut hi,
            step: ref mut by,
        } = self.kind
        {
            *lo = Some(min);
            *hi = max;
            *by = step;
        }
        self
    }
}

/// Input kinds the dashboard forms use. Numeric bounds are carried for
/// display only; validation checks presence, not range.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Multiline,
    Date,
    Numeric {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Select(Vec<SelectOption>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Option whose stored value is the visible label itself.
    pub fn plain(label: &'static str) -> Self {
        Self {
            value: label,
            label,
        }
    }
}

fn bank_registration_spec() -> FormSpec {
    FormSpec {
        id: FormKind::BankRegistration.key(),
        title: "فرم ثبت بانک",
        submit_label: "ذخیره",
        fields: vec![
            FieldSpec::text("bankName", "نام بانک"),
            FieldSpec::text("location", "موقعیت"),
            FieldSpec::text("branch", "شعبه"),
        ],
    }
}

fn access_spec() -> FormSpec {
    let accounts = [
        "حساب جاری شعبه مرکزی",
        "حساب پس‌انداز شعبه شمال",
        "حساب سپرده شعبه جنوب",
        "حساب ویژه مدیران",
    ]
    .into_iter()
    .map(SelectOption::plain)
    .collect();
    let levels = vec![
        SelectOption::new("view", "مشاهده"),
        SelectOption::new("edit", "ویرایش"),
        SelectOption::new("approve", "تأیید"),
    ];
    FormSpec {
        id: FormKind::Access.key(),
        title: "فرم دسترسی",
        submit_label: "ذخیره",
        fields: vec![
            FieldSpec::select("account", "انتخاب حساب", accounts)
                .with_placeholder("یک حساب انتخاب کنید"),
            FieldSpec::select("accessLevel", "سطح دسترسی", levels)
                .with_placeholder("سطح دسترسی را انتخاب کنید"),
        ],
    }
}

fn fund_request_spec() -> FormSpec {
    let request_types = vec![
        SelectOption::new("cash_advance", "تنخواه"),
        SelectOption::new("loan", "قرض"),
        SelectOption::new("facilities", "تسهیلات"),
        SelectOption::new("refund", "استرداد"),
    ];
    FormSpec {
        id: FormKind::FundRequest.key(),
        title: "فرم درخواست وجه",
        submit_label: "ثبت درخواست",
        fields: vec![
            FieldSpec::select("requestType", "نوع درخواست", request_types)
                .with_placeholder("نوع درخواست را انتخاب کنید"),
            FieldSpec::numeric("amount", "مبلغ").with_unit("ریال"),
            FieldSpec {
                name: "date",
                label: "تاریخ",
                kind: FieldKind::Date,
                required: true,
                unit: None,
                placeholder: None,
            },
            FieldSpec::text("documentNumber", "شماره سند")
                .optional()
                .with_placeholder("اختیاری"),
            FieldSpec {
                name: "reason",
                label: "دلیل",
                kind: FieldKind::Multiline,
                required: false,
                unit: None,
                placeholder: Some("توضیحات اختیاری"),
            },
        ],
    }
}

fn payment_spec() -> FormSpec {
    let regions = [
        "منطقه مرکزی",
        "منطقه شمال",
        "منطقه جنوب",
        "منطقه شرق",
        "منطقه غرب",
    ]
    .into_iter()
    .map(SelectOption::plain)
    .collect();
    FormSpec {
        id: FormKind::Payment.key(),
        title: "فرم پرداخت وجه",
        submit_label: "ثبت پرداخت",
        fields: vec![
            FieldSpec::select("region", "منطقه", regions).with_placeholder("منطقه را انتخاب کنید"),
            FieldSpec::numeric("amount", "مبلغ پرداختی").with_unit("ریال"),
        ],
    }
}

fn recipient_banks() -> Vec<SelectOption> {
    [
        "بانک ملی ایران",
        "بانک صادرات ایران",
        "بانک تجارت",
        "بانک کشاورزی",
        "بانک صنعت و معدن",
    ]
    .into_iter()
    .map(SelectOption::plain)
    .collect()
}

fn loan_spec() -> FormSpec {
    FormSpec {
        id: FormKind::Loan.key(),
        title: "فرم وام",
        submit_label: "ثبت",
        fields: vec![
            FieldSpec::select("recipientBank", "بانک گیرنده وام", recipient_banks())
                .with_placeholder("بانک را انتخاب کنید"),
            FieldSpec::numeric("amount", "مبلغ وام").with_unit("ریال"),
            FieldSpec::numeric("period", "دوره (ماه)")
                .with_unit("ماه")
                .with_bounds(1.0, None, None),
        ],
    }
}

fn financing_spec() -> FormSpec {
    FormSpec {
        id: FormKind::Financing.key(),
        title: "فرم تامین مالی",
        submit_label: "ثبت",
        fields: vec![
            FieldSpec::select("recipientBank", "بانک گیرنده وام", recipient_banks())
                .with_placeholder("بانک را انتخاب کنید"),
            FieldSpec::numeric("percentage", "درصد (٪)")
                .with_unit("٪")
                .with_bounds(0.0, Some(100.0), Some(0.1)),
            FieldSpec::numeric("period", "دوره (ماه)")
                .with_unit("ماه")
                .with_bounds(1.0, None, None),
        ],
    }
}

fn property_registration_spec() -> FormSpec {
    FormSpec {
        id: FormKind::PropertyRegistration.key(),
        title: "فرم ثبت املاک خزانه",
        submit_label: "ثبت",
        fields: vec![
            FieldSpec::text("propertyName", "نام ملک"),
            FieldSpec::text("geographicalLocation", "موقعیت جغرافیایی"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_has_fields_and_unique_names() {
        for kind in FormKind::ALL {
            let spec = kind.spec();
            assert!(!spec.fields.is_empty(), "{} has no fields", spec.id);
            for (idx, field) in spec.fields.iter().enumerate() {
                let dup = spec.fields[idx + 1..].iter().any(|f| f.name == field.name);
                assert!(!dup, "{} repeats field {}", spec.id, field.name);
            }
        }
    }

    #[test]
    fn fund_request_marks_document_and_reason_optional() {
        let spec = FormKind::FundRequest.spec();
        let required: Vec<_> = spec
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, ["requestType", "amount", "date"]);
    }

    #[test]
    fn financing_carries_percentage_bounds_as_data() {
        let spec = FormKind::Financing.spec();
        let percentage = spec
            .fields
            .iter()
            .find(|f| f.name == "percentage")
            .expect("percentage field");
        match &percentage.kind {
            FieldKind::Numeric { min, max, step } => {
                assert_eq!(*min, Some(0.0));
                assert_eq!(*max, Some(100.0));
                assert_eq!(*step, Some(0.1));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
