use super::{
    alert::Alert,
    company::{Company, CompanyId},
    invoice::Invoice,
    status::{DisplayTier, InvoiceStatus},
};

/// Count and amount rollup over a set of invoices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub received: usize,
    pub pending: usize,
    pub overdue: usize,
    pub total_amount: f64,
    pub total_tax: f64,
    pub received_tax: f64,
    /// Tax on every invoice that is not received (pending and overdue).
    pub pending_tax: f64,
    /// Rounded to one decimal; zero for an empty set.
    pub received_percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanySummary {
    pub company_id: CompanyId,
    pub name: String,
    pub total: usize,
    pub received: usize,
    pub pending: usize,
    pub overdue: usize,
    pub total_tax: f64,
    pub received_tax: f64,
    pub pending_tax: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBreakdown {
    /// Calendar month, 1-based.
    pub month: u32,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub stats: Stats,
    pub received: Vec<Invoice>,
    pub pending: Vec<Invoice>,
    pub overdue: Vec<Invoice>,
    pub companies: Vec<CompanySummary>,
}

impl MonthlyReport {
    /// All invoices in the report, grouped by status section.
    pub fn invoices(&self) -> impl Iterator<Item = (&Invoice, InvoiceStatus)> {
        self.received
            .iter()
            .map(|i| (i, InvoiceStatus::Received))
            .chain(self.pending.iter().map(|i| (i, InvoiceStatus::Pending)))
            .chain(self.overdue.iter().map(|i| (i, InvoiceStatus::Overdue)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnualReport {
    pub year: i32,
    /// Computed over the whole year, not summed from `months`.
    pub stats: Stats,
    /// Only months with at least one invoice, in calendar order.
    pub months: Vec<MonthlyBreakdown>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub invoice: Invoice,
    pub status: InvoiceStatus,
    pub days_remaining: i64,
    pub display_tier: DisplayTier,
    pub has_receipt: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyOverview {
    pub company: Company,
    pub invoice_count: usize,
    /// Pending or overdue.
    pub outstanding_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: Stats,
    pub alerts: Vec<Alert>,
    pub invoices: Vec<InvoiceRow>,
}
