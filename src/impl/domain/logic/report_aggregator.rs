use std::collections::BTreeMap;

use chrono::Datelike as _;

use crate::entities::{
    AnnualReport, CompanyId, CompanySummary, Invoice, InvoiceStatus, MonthlyBreakdown,
    MonthlyReport, Stats, UNSPECIFIED_COMPANY,
};

use super::{status_engine::StatusEngine, utils::round_to};

/// Rolls up invoices the caller has already narrowed to a reporting period.
pub struct ReportAggregator<'e, 'a> {
    status_engine: &'e StatusEngine<'a>,
}

impl<'e, 'a> ReportAggregator<'e, 'a> {
    pub fn new(status_engine: &'e StatusEngine<'a>) -> Self {
        Self { status_engine }
    }

    pub fn stats<'i, I>(&self, invoices: I) -> Stats
    where
        I: IntoIterator<Item = &'i Invoice>,
    {
        let mut stats = invoices
            .into_iter()
            .fold(Stats::default(), |mut stats, invoice| {
                stats.total += 1;
                stats.total_amount += invoice.amount;
                stats.total_tax += invoice.tax_amount;
                match self.status_engine.status(invoice) {
                    InvoiceStatus::Received => {
                        stats.received += 1;
                        stats.received_tax += invoice.tax_amount;
                    }
                    InvoiceStatus::Pending => {
                        stats.pending += 1;
                        stats.pending_tax += invoice.tax_amount;
                    }
                    InvoiceStatus::Overdue => {
                        stats.overdue += 1;
                        stats.pending_tax += invoice.tax_amount;
                    }
                }
                stats
            });
        stats.received_percentage = received_percentage(stats.received, stats.total);
        stats
    }

    /// One entry per company with invoices in the set, ordered by company id.
    pub fn company_summary<'i, I>(&self, invoices: I) -> Vec<CompanySummary>
    where
        I: IntoIterator<Item = &'i Invoice>,
    {
        invoices
            .into_iter()
            .fold(
                BTreeMap::<CompanyId, CompanySummary>::new(),
                |mut map, invoice| {
                    let summary = map.entry(invoice.company_id).or_insert_with(|| {
                        CompanySummary {
                            company_id: invoice.company_id,
                            name: invoice
                                .company_name
                                .clone()
                                .unwrap_or_else(|| UNSPECIFIED_COMPANY.to_string()),
                            total: 0,
                            received: 0,
                            pending: 0,
                            overdue: 0,
                            total_tax: 0.0,
                            received_tax: 0.0,
                            pending_tax: 0.0,
                        }
                    });
                    summary.total += 1;
                    summary.total_tax += invoice.tax_amount;
                    match self.status_engine.status(invoice) {
                        InvoiceStatus::Received => {
                            summary.received += 1;
                            summary.received_tax += invoice.tax_amount;
                        }
                        InvoiceStatus::Pending => {
                            summary.pending += 1;
                            summary.pending_tax += invoice.tax_amount;
                        }
                        InvoiceStatus::Overdue => {
                            summary.overdue += 1;
                            summary.pending_tax += invoice.tax_amount;
                        }
                    }
                    map
                },
            )
            .into_values()
            .collect()
    }

    /// Per-month stats for a year's invoices. Months without invoices are
    /// omitted.
    pub fn monthly_breakdown(&self, invoices: &[&Invoice]) -> Vec<MonthlyBreakdown> {
        (1..=12)
            .filter_map(|month| {
                let in_month: Vec<&Invoice> = invoices
                    .iter()
                    .copied()
                    .filter(|invoice| invoice.issue_date.month() == month)
                    .collect();
                if in_month.is_empty() {
                    None
                } else {
                    Some(MonthlyBreakdown {
                        month,
                        stats: self.stats(in_month),
                    })
                }
            })
            .collect()
    }

    pub fn monthly_report(&self, year: i32, month: u32, invoices: &[&Invoice]) -> MonthlyReport {
        let section = |status: InvoiceStatus| -> Vec<Invoice> {
            invoices
                .iter()
                .filter(|invoice| self.status_engine.status(invoice) == status)
                .map(|invoice| (*invoice).clone())
                .collect()
        };
        MonthlyReport {
            year,
            month,
            stats: self.stats(invoices.iter().copied()),
            received: section(InvoiceStatus::Received),
            pending: section(InvoiceStatus::Pending),
            overdue: section(InvoiceStatus::Overdue),
            companies: self.company_summary(invoices.iter().copied()),
        }
    }

    pub fn annual_report(&self, year: i32, invoices: &[&Invoice]) -> AnnualReport {
        AnnualReport {
            year,
            stats: self.stats(invoices.iter().copied()),
            months: self.monthly_breakdown(invoices),
        }
    }
}

fn received_percentage(received: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(received as f64 / total as f64 * 100.0, 1)
}
