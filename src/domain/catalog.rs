use super::{
    form::{FieldSpec, FormKind, FormSpec},
    records::{ReportEntry, Signatory},
};

/// Mutually exclusive top-level screens. The dashboard is the default and
/// every sub-page returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Signatories,
    FixedReports,
    ReportBuilder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    OpenModal(FormKind),
    Navigate(View),
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardGroup {
    pub title: &'static str,
    pub entries: &'static [(&'static str, DashboardAction)],
}

pub fn dashboard_groups() -> &'static [DashboardGroup] {
    &[
        DashboardGroup {
            title: "اطلاعات پایه",
            entries: &[
                ("ثبت بانک", DashboardAction::OpenModal(FormKind::BankRegistration)),
                ("صاحبان امضا", DashboardAction::Navigate(View::Signatories)),
                ("دسترسی", DashboardAction::OpenModal(FormKind::Access)),
                ("درخواست وجه", DashboardAction::OpenModal(FormKind::FundRequest)),
            ],
        },
        DashboardGroup {
            title: "عملیات فرآیند",
            entries: &[
                ("پرداخت وجه", DashboardAction::OpenModal(FormKind::Payment)),
                ("وام", DashboardAction::OpenModal(FormKind::Loan)),
                ("تامین مالی", DashboardAction::OpenModal(FormKind::Financing)),
                (
                    "ثبت املاک خزانه",
                    DashboardAction::OpenModal(FormKind::PropertyRegistration),
                ),
            ],
        },
        DashboardGroup {
            title: "گزارشات",
            entries: &[
                ("گزارش‌های ثابت", DashboardAction::Navigate(View::FixedReports)),
                ("گزارش‌ساز", DashboardAction::Navigate(View::ReportBuilder)),
            ],
        },
    ]
}

pub fn fixed_reports() -> Vec<ReportEntry> {
    vec![
        ReportEntry {
            id: 1,
            title: "گزارش تراز مالی",
            description: "گزارش جامع وضعیت مالی سازمان",
            last_update: "1402/10/15",
            category: "مالی",
        },
        ReportEntry {
            id: 2,
            title: "گزارش جریان نقدینگی",
            description: "تحلیل ورود و خروج وجوه نقد",
            last_update: "1402/10/14",
            category: "نقدینگی",
        },
        ReportEntry {
            id: 3,
            title: "گزارش وام‌ها و تسهیلات",
            description: "وضعیت کلیه وام‌ها و تسهیلات پرداختی",
            last_update: "1402/10/13",
            category: "وام",
        },
        ReportEntry {
            id: 4,
            title: "گزارش املاک و دارایی‌ها",
            description: "فهرست کامل املاک و دارایی‌های سازمان",
            last_update: "1402/10/12",
            category: "املاک",
        },
        ReportEntry {
            id: 5,
            title: "گزارش عملکرد شعب",
            description: "عملکرد مالی و عملیاتی شعب مختلف",
            last_update: "1402/10/11",
            category: "شعب",
        },
        ReportEntry {
            id: 6,
            title: "گزارش بودجه و واقعی",
            description: "مقایسه بودجه پیش‌بینی شده با عملکرد واقعی",
            last_update: "1402/10/10",
            category: "بودجه",
        },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct DataSource {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn data_sources() -> &'static [DataSource] {
    &[
        DataSource {
            value: "transactions",
            label: "تراکنش‌ها",
        },
        DataSource {
            value: "accounts",
            label: "حساب‌ها",
        },
        DataSource {
            value: "loans",
            label: "وام‌ها",
        },
        DataSource {
            value: "properties",
            label: "املاک",
        },
        DataSource {
            value: "branches",
            label: "شعب",
        },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn date_ranges() -> &'static [DateRange] {
    &[
        DateRange {
            value: "last_month",
            label: "ماه گذشته",
        },
        DateRange {
            value: "last_quarter",
            label: "سه‌ماه گذشته",
        },
        DateRange {
            value: "last_year",
            label: "سال گذشته",
        },
        DateRange {
            value: "custom",
            label: "بازه سفارشی",
        },
    ]
}

/// Columns that may appear in a custom report, scoped to the data source.
pub fn fields_for_source(source: &str) -> &'static [&'static str] {
    match source {
        "transactions" => &["مبلغ", "تاریخ", "نوع تراکنش", "حساب مبدأ", "حساب مقصد"],
        "accounts" => &["شماره حساب", "نام حساب", "موجودی", "نوع حساب"],
        "loans" => &["مبلغ وام", "تاریخ دریافت", "نرخ بهره", "مدت بازپرداخت"],
        "properties" => &["نام ملک", "موقعیت", "ارزش", "تاریخ خرید"],
        "branches" => &["نام شعبه", "موقعیت", "عملکرد مالی", "تعداد کارمند"],
        _ => &[],
    }
}

pub fn seed_signatories() -> Vec<Signatory> {
    vec![
        Signatory {
            id: "1".to_string(),
            first_name: "محمد".to_string(),
            last_name: "احمدی".to_string(),
            position: "مدیر عامل".to_string(),
            reference: "هیئت مدیره".to_string(),
        },
        Signatory {
            id: "2".to_string(),
            first_name: "فاطمه".to_string(),
            last_name: "کریمی".to_string(),
            position: "مدیر مالی".to_string(),
            reference: "مدیر عامل".to_string(),
        },
    ]
}

/// Entry buffer for the signatories page; all four descriptive fields are
/// required before a row may be appended.
pub fn signatory_entry_spec() -> FormSpec {
    FormSpec {
        id: "signatoryEntry",
        title: "افزودن صاحب امضای جدید",
        submit_label: "افزودن صاحب امضا",
        fields: vec![
            FieldSpec::text("firstName", "نام"),
            FieldSpec::text("lastName", "نام خانوادگی"),
            FieldSpec::text("position", "سمت"),
            FieldSpec::text("reference", "معرف"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_offers_ten_entries_across_three_groups() {
        let groups = dashboard_groups();
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn every_data_source_has_legal_fields() {
        for source in data_sources() {
            assert!(
                !fields_for_source(source.value).is_empty(),
                "{} has no fields",
                source.value
            );
        }
        assert!(fields_for_source("unknown").is_empty());
    }

    #[test]
    fn report_catalog_ids_are_unique() {
        let reports = fixed_reports();
        assert_eq!(reports.len(), 6);
        for (idx, report) in reports.iter().enumerate() {
            assert!(!reports[idx + 1..].iter().any(|r| r.id == report.id));
        }
    }
}
