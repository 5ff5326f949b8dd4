use crate::entities::{InvoiceId, Receipt, ReceiptId};

use super::iso_date_model::ISODateModel;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ReceiptModel {
    pub id: u64,
    pub invoice_id: u64,
    pub receipt_date: ISODateModel,
    pub file_name: String,
    pub file_type: String,
    pub file_data: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Into<Receipt> for ReceiptModel {
    fn into(self) -> Receipt {
        Receipt {
            id: ReceiptId(self.id),
            invoice_id: InvoiceId(self.invoice_id),
            receipt_date: self.receipt_date.into(),
            file_name: self.file_name,
            file_type: self.file_type,
            file_data: self.file_data,
            notes: self.notes,
        }
    }
}
