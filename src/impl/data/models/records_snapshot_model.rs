use crate::entities::RecordsSnapshot;

use super::{company_model::CompanyModel, invoice_model::InvoiceModel, receipt_model::ReceiptModel};

/// Export of the three record tables.
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct RecordsSnapshotModel {
    #[serde(default)]
    pub companies: Vec<CompanyModel>,
    #[serde(default)]
    pub invoices: Vec<InvoiceModel>,
    #[serde(default)]
    pub receipts: Vec<ReceiptModel>,
}

impl Into<RecordsSnapshot> for RecordsSnapshotModel {
    fn into(self) -> RecordsSnapshot {
        RecordsSnapshot {
            companies: self.companies.into_iter().map(Into::into).collect(),
            invoices: self.invoices.into_iter().map(Into::into).collect(),
            receipts: self.receipts.into_iter().map(Into::into).collect(),
        }
    }
}
