use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    Company, CompanyDraft, CompanyId, Invoice, InvoiceId, NewInvoice, Receipt, ReceiptUpload,
};

/// CRUD access to the hosted record store.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    /// Ordered by name.
    async fn companies(&self) -> Result<Vec<Company>, ServerError>;

    /// Joined with the company name, newest issue date first.
    async fn invoices(&self) -> Result<Vec<Invoice>, ServerError>;

    async fn receipts(&self) -> Result<Vec<Receipt>, ServerError>;

    async fn insert_company(&self, draft: CompanyDraft) -> Result<Company, ServerError>;

    async fn update_company(
        &self,
        id: CompanyId,
        draft: CompanyDraft,
    ) -> Result<Company, ServerError>;

    async fn delete_company(&self, id: CompanyId) -> Result<(), ServerError>;

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<Invoice, ServerError>;

    async fn update_invoice(
        &self,
        id: InvoiceId,
        invoice: NewInvoice,
    ) -> Result<Invoice, ServerError>;

    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServerError>;

    async fn insert_receipt(&self, upload: ReceiptUpload) -> Result<Receipt, ServerError>;

    /// Returns the number of receipts removed.
    async fn delete_receipts_for_invoice(&self, id: InvoiceId) -> Result<usize, ServerError>;
}
