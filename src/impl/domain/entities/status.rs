/// Lifecycle of an invoice. Never stored, always derived from the invoice's
/// issue date and the receipts on record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Pending,
    Received,
    Overdue,
}

/// How prominently the remaining-days counter should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTier {
    Safe,
    Warning,
    Urgent,
}
