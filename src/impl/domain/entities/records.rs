use super::{company::Company, invoice::Invoice, receipt::Receipt};

/// Consistent view of the record store, taken once per computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsSnapshot {
    pub companies: Vec<Company>,
    pub invoices: Vec<Invoice>,
    pub receipts: Vec<Receipt>,
}
