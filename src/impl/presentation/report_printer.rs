use iso_currency::Currency;

use crate::entities::{
    Alert, AnnualReport, CompanySummary, Invoice, MonthlyReport, Stats, UNSPECIFIED_COMPANY,
};

use super::utils::format_amount;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

fn section_header(title: &str) -> String {
    format!("; --- {} {}\n\n", title, "-".repeat(74usize.saturating_sub(title.len())))
}

/// Renders reports as plain text for printing.
pub(crate) struct ReportPrinter {
    currency: Currency,
}

impl ReportPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print_monthly_report(&self, report: &MonthlyReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Report for {} {}\n\n",
            month_name(report.month),
            report.year
        ));
        self.print_stats(&mut output, &report.stats);

        for (title, invoices) in [
            ("Received invoices", &report.received),
            ("Pending invoices", &report.pending),
            ("Overdue invoices", &report.overdue),
        ] {
            if invoices.is_empty() {
                continue;
            }
            output.push('\n');
            output.push_str(&section_header(&format!("{} ({})", title, invoices.len())));
            self.print_invoices(&mut output, invoices);
        }

        output.push('\n');
        output.push_str(&section_header("Company summary"));
        self.print_companies(&mut output, &report.companies);
        output
    }

    pub(crate) fn print_annual_report(&self, report: &AnnualReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("Annual report {}\n\n", report.year));
        self.print_stats(&mut output, &report.stats);

        output.push('\n');
        output.push_str(&section_header("Monthly breakdown"));
        output.push_str(&format!(
            "{:12} {:>8} {:>8} {:>8} {:>8} {:>20} {:>20}\n",
            "Month", "Invoices", "Received", "Pending", "Overdue", "Total tax", "Received tax"
        ));
        for breakdown in &report.months {
            self.print_breakdown_row(&mut output, month_name(breakdown.month), &breakdown.stats);
        }
        self.print_breakdown_row(&mut output, "Total", &report.stats);
        output
    }

    pub(crate) fn print_alerts(&self, alerts: &[Alert]) -> String {
        if alerts.is_empty() {
            return "No alerts at the moment.\n".to_string();
        }
        let mut output = String::new();
        for alert in alerts {
            let headline = format!("[{}] {}", alert.severity, alert.message);
            for line in textwrap::wrap(&headline, 78) {
                output.push_str(&line);
                output.push('\n');
            }
            output.push_str(&format!(
                "    Company: {}\n    Tax: {}\n\n",
                alert
                    .invoice
                    .company_name
                    .as_deref()
                    .unwrap_or(UNSPECIFIED_COMPANY),
                format_amount(alert.invoice.tax_amount, self.currency),
            ));
        }
        output
    }

    fn print_stats(&self, output: &mut String, stats: &Stats) {
        let rows = [
            ("Total invoices", stats.total.to_string()),
            ("Received", stats.received.to_string()),
            ("Pending", stats.pending.to_string()),
            ("Overdue", stats.overdue.to_string()),
            ("Received share", format!("{:.1}%", stats.received_percentage)),
            ("Total amount", format_amount(stats.total_amount, self.currency)),
            ("Total tax", format_amount(stats.total_tax, self.currency)),
            ("Received tax", format_amount(stats.received_tax, self.currency)),
            ("Pending tax", format_amount(stats.pending_tax, self.currency)),
        ];
        for (label, value) in rows {
            output.push_str(&format!("{:20} {:>24}\n", label, value));
        }
    }

    fn print_invoices(&self, output: &mut String, invoices: &[Invoice]) {
        let sorted_invoices = {
            let mut v: Vec<&Invoice> = invoices.iter().collect();
            v.sort_by_key(|invoice| invoice.issue_date);
            v
        };
        for invoice in sorted_invoices {
            output.push_str(&format!(
                "{} {:16} {:24} {:>20} {:>16}\n",
                invoice.issue_date,
                invoice.number,
                invoice
                    .company_name
                    .as_deref()
                    .unwrap_or(UNSPECIFIED_COMPANY),
                format_amount(invoice.amount, self.currency),
                format_amount(invoice.tax_amount, self.currency),
            ));
        }
        let amount: f64 = invoices.iter().map(|i| i.amount).sum();
        let tax: f64 = invoices.iter().map(|i| i.tax_amount).sum();
        output.push_str(&format!(
            "{:52} {:>20} {:>16}\n",
            "Total",
            format_amount(amount, self.currency),
            format_amount(tax, self.currency),
        ));
    }

    fn print_companies(&self, output: &mut String, companies: &[CompanySummary]) {
        output.push_str(&format!(
            "{:24} {:>8} {:>8} {:>8} {:>8} {:>16} {:>16} {:>16}\n",
            "Company", "Invoices", "Received", "Pending", "Overdue", "Total tax", "Received tax",
            "Pending tax"
        ));
        for company in companies {
            output.push_str(&format!(
                "{:24} {:>8} {:>8} {:>8} {:>8} {:>16} {:>16} {:>16}\n",
                company.name,
                company.total,
                company.received,
                company.pending,
                company.overdue,
                format_amount(company.total_tax, self.currency),
                format_amount(company.received_tax, self.currency),
                format_amount(company.pending_tax, self.currency),
            ));
        }
    }

    fn print_breakdown_row(&self, output: &mut String, label: &str, stats: &Stats) {
        output.push_str(&format!(
            "{:12} {:>8} {:>8} {:>8} {:>8} {:>20} {:>20}\n",
            label,
            stats.total,
            stats.received,
            stats.pending,
            stats.overdue,
            format_amount(stats.total_tax, self.currency),
            format_amount(stats.received_tax, self.currency),
        ));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{AlertSeverity, CompanyId, InvoiceId, MonthlyBreakdown};

    fn invoice(id: u64, day: u32) -> Invoice {
        Invoice {
            id: InvoiceId(id),
            number: format!("INV-{id}"),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            company_id: CompanyId(1),
            company_name: None,
            amount: 1000.0,
            tax_amount: 10.0,
            notes: None,
        }
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
    }

    #[test]
    fn monthly_report_skips_empty_sections() {
        let report = MonthlyReport {
            year: 2024,
            month: 3,
            stats: Stats {
                total: 2,
                pending: 2,
                total_amount: 2000.0,
                total_tax: 20.0,
                pending_tax: 20.0,
                ..Stats::default()
            },
            received: vec![],
            pending: vec![invoice(2, 9), invoice(1, 4)],
            overdue: vec![],
            companies: vec![],
        };
        let text = ReportPrinter::new(Currency::EGP).print_monthly_report(&report);
        assert!(text.starts_with("Report for March 2024"));
        assert!(text.contains("Pending invoices (2)"));
        assert!(!text.contains("Received invoices"));
        assert!(text.contains(UNSPECIFIED_COMPANY));
        assert!(text.contains("2,000.00 EGP"));
        assert!(text.find("INV-1").unwrap() < text.find("INV-2").unwrap());
    }

    #[test]
    fn annual_report_lists_months_and_total() {
        let stats = Stats {
            total: 1,
            ..Stats::default()
        };
        let report = AnnualReport {
            year: 2024,
            stats: stats.clone(),
            months: vec![MonthlyBreakdown { month: 7, stats }],
        };
        let text = ReportPrinter::new(Currency::USD).print_annual_report(&report);
        assert!(text.contains("July"));
        assert!(!text.contains("March"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn alerts_render_or_report_none() {
        let printer = ReportPrinter::new(Currency::EGP);
        assert_eq!(printer.print_alerts(&[]), "No alerts at the moment.\n");
        let text = printer.print_alerts(&[Alert {
            severity: AlertSeverity::Danger,
            invoice: invoice(7, 1),
            days_remaining: -2,
            message: "Invoice INV-7 is overdue by 2 day(s)".into(),
        }]);
        assert!(text.starts_with("[OVERDUE] Invoice INV-7 is overdue by 2 day(s)"));
        assert!(text.contains("Tax: 10.00 EGP"));
    }
}
