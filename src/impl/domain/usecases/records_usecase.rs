use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::records_repository::RecordsRepository,
    entities::{
        Company, CompanyDraft, CompanyId, Invoice, InvoiceDraft, InvoiceId, Receipt,
        ReceiptUpload, RecordsSnapshot,
    },
    errors::{CompanyHasInvoices, CompanyNotFound, InvoiceNotFound},
};

/// Reads all three tables concurrently.
pub(crate) async fn load_snapshot<R>(repository: &R) -> Result<RecordsSnapshot, ServerError>
where
    R: RecordsRepository + ?Sized,
{
    let (companies, invoices, receipts) = futures::try_join!(
        repository.companies(),
        repository.invoices(),
        repository.receipts(),
    )?;
    tracing::debug!(
        companies = companies.len(),
        invoices = invoices.len(),
        receipts = receipts.len(),
        "records loaded"
    );
    Ok(RecordsSnapshot {
        companies,
        invoices,
        receipts,
    })
}

#[async_trait]
pub trait RecordsUsecase: Send + Sync {
    async fn snapshot(&self) -> Result<RecordsSnapshot, ServerError>;

    /// Inserts when `id` is `None`, otherwise updates.
    async fn save_company(
        &self,
        id: Option<CompanyId>,
        draft: CompanyDraft,
    ) -> Result<Company, ServerError>;

    /// Refused while any invoice references the company.
    async fn delete_company(&self, id: CompanyId) -> Result<(), ServerError>;

    /// Inserts when `id` is `None`, otherwise updates. The tax amount is fixed
    /// from the draft's amount at this point.
    async fn save_invoice(
        &self,
        id: Option<InvoiceId>,
        draft: InvoiceDraft,
    ) -> Result<Invoice, ServerError>;

    /// Removes the invoice's receipts first.
    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServerError>;

    async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<Receipt, ServerError>;
}

pub(crate) struct RecordsUsecaseImpl<R: RecordsRepository> {
    records_repository: Arc<R>,
}

impl<R: RecordsRepository> RecordsUsecaseImpl<R> {
    pub(crate) fn new(records_repository: Arc<R>) -> Self {
        Self { records_repository }
    }
}

#[async_trait]
impl<R: RecordsRepository> RecordsUsecase for RecordsUsecaseImpl<R> {
    async fn snapshot(&self) -> Result<RecordsSnapshot, ServerError> {
        load_snapshot(self.records_repository.as_ref()).await
    }

    async fn save_company(
        &self,
        id: Option<CompanyId>,
        draft: CompanyDraft,
    ) -> Result<Company, ServerError> {
        let draft = draft.validated()?;
        let company = match id {
            Some(id) => self.records_repository.update_company(id, draft).await?,
            None => self.records_repository.insert_company(draft).await?,
        };
        tracing::info!(company_id = company.id.0, updated = id.is_some(), "company saved");
        Ok(company)
    }

    async fn delete_company(&self, id: CompanyId) -> Result<(), ServerError> {
        let referencing = self
            .records_repository
            .invoices()
            .await?
            .iter()
            .filter(|invoice| invoice.company_id == id)
            .count();
        if referencing > 0 {
            return Err(CompanyHasInvoices::new(&id, referencing));
        }
        self.records_repository.delete_company(id).await?;
        tracing::info!(company_id = id.0, "company deleted");
        Ok(())
    }

    async fn save_invoice(
        &self,
        id: Option<InvoiceId>,
        draft: InvoiceDraft,
    ) -> Result<Invoice, ServerError> {
        let new_invoice = draft.into_new_invoice()?;
        let companies = self.records_repository.companies().await?;
        if !companies.iter().any(|c| c.id == new_invoice.company_id) {
            return Err(CompanyNotFound::new(&new_invoice.company_id));
        }
        let invoice = match id {
            Some(id) => {
                self.records_repository
                    .update_invoice(id, new_invoice)
                    .await?
            }
            None => self.records_repository.insert_invoice(new_invoice).await?,
        };
        tracing::info!(
            invoice_id = invoice.id.0,
            tax_amount = invoice.tax_amount,
            updated = id.is_some(),
            "invoice saved"
        );
        Ok(invoice)
    }

    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServerError> {
        let invoices = self.records_repository.invoices().await?;
        if !invoices.iter().any(|invoice| invoice.id == id) {
            return Err(InvoiceNotFound::new(&id));
        }
        let removed = self
            .records_repository
            .delete_receipts_for_invoice(id)
            .await?;
        self.records_repository.delete_invoice(id).await?;
        tracing::info!(invoice_id = id.0, receipts_removed = removed, "invoice deleted");
        Ok(())
    }

    async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<Receipt, ServerError> {
        let upload = upload.validated()?;
        let receipt = self.records_repository.insert_receipt(upload).await?;
        tracing::info!(
            receipt_id = receipt.id.0,
            invoice_id = receipt.invoice_id.0,
            "receipt uploaded"
        );
        Ok(receipt)
    }
}
