use chrono::NaiveDate;

use super::invoice::InvoiceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReceiptId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub id: ReceiptId,
    pub invoice_id: InvoiceId,
    pub receipt_date: NaiveDate,
    pub file_name: String,
    pub file_type: String,
    /// Attachment encoded for transport, either plain base64 or a
    /// `data:<type>;base64,` URL.
    pub file_data: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptUpload {
    pub invoice_id: InvoiceId,
    pub receipt_date: NaiveDate,
    pub file_name: String,
    pub file_type: String,
    pub file_data: String,
    pub notes: Option<String>,
}
