use chrono::NaiveDate;

use super::company::CompanyId;

/// Share of the principal withheld as tax, applied once at entry time.
pub const TAX_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvoiceId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    /// User-assigned, not guaranteed unique.
    pub number: String,
    pub issue_date: NaiveDate,
    pub company_id: CompanyId,
    /// Populated by the record store's company join. `None` when the company
    /// could not be resolved.
    pub company_name: Option<String>,
    pub amount: f64,
    /// Stored as computed at entry; never recomputed from `amount`.
    pub tax_amount: f64,
    pub notes: Option<String>,
}

/// User-supplied fields for creating or editing an invoice. The tax amount is
/// derived from these when the invoice is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub number: String,
    pub issue_date: NaiveDate,
    pub company_id: CompanyId,
    pub amount: f64,
    pub notes: Option<String>,
}

/// Validated invoice fields as handed to the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub number: String,
    pub issue_date: NaiveDate,
    pub company_id: CompanyId,
    pub amount: f64,
    pub tax_amount: f64,
    pub notes: Option<String>,
}
