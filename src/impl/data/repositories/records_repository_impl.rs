use std::cmp::Reverse;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::RwLock;

use crate::{
    domain::repositories::records_repository::RecordsRepository,
    entities::{
        Company, CompanyDraft, CompanyId, Invoice, InvoiceId, NewInvoice, Receipt, ReceiptId,
        ReceiptUpload, RecordsSnapshot,
    },
    errors::{CompanyNotFound, InvoiceNotFound, RecordStoreInconsistent},
};

#[derive(Debug, Default)]
struct Tables {
    companies: Vec<Company>,
    invoices: Vec<Invoice>,
    receipts: Vec<Receipt>,
    next_id: u64,
}

impl Tables {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn company_name(&self, id: CompanyId) -> Option<String> {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }

    fn require_company(&self, id: CompanyId) -> Result<(), ServerError> {
        if self.companies.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(CompanyNotFound::new(&id))
        }
    }
}

/// Record store kept in process memory. Stands in for the hosted backend in
/// tests and offline use.
pub struct InMemoryRecordsRepository {
    tables: RwLock<Tables>,
}

impl InMemoryRecordsRepository {
    pub fn new() -> Self {
        Self::from_snapshot(RecordsSnapshot::default())
    }

    /// Seeds the store with existing records. New ids continue after the
    /// largest id in the snapshot.
    pub fn from_snapshot(snapshot: RecordsSnapshot) -> Self {
        let next_id = snapshot
            .companies
            .iter()
            .map(|c| c.id.0)
            .chain(snapshot.invoices.iter().map(|i| i.id.0))
            .chain(snapshot.receipts.iter().map(|r| r.id.0))
            .max()
            .unwrap_or(0);
        Self {
            tables: RwLock::new(Tables {
                companies: snapshot.companies,
                invoices: snapshot.invoices,
                receipts: snapshot.receipts,
                next_id,
            }),
        }
    }
}

impl Default for InMemoryRecordsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordsRepository for InMemoryRecordsRepository {
    async fn companies(&self) -> Result<Vec<Company>, ServerError> {
        let tables = self.tables.read().await;
        let mut companies = tables.companies.clone();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn invoices(&self) -> Result<Vec<Invoice>, ServerError> {
        let tables = self.tables.read().await;
        let mut invoices: Vec<Invoice> = tables
            .invoices
            .iter()
            .map(|invoice| {
                let company_name = tables.company_name(invoice.company_id);
                if company_name.is_none() {
                    tracing::warn!(
                        invoice_id = invoice.id.0,
                        company_id = invoice.company_id.0,
                        "invoice references an unknown company"
                    );
                }
                Invoice {
                    company_name,
                    ..invoice.clone()
                }
            })
            .collect();
        invoices.sort_by_key(|i| Reverse(i.issue_date));
        Ok(invoices)
    }

    async fn receipts(&self) -> Result<Vec<Receipt>, ServerError> {
        Ok(self.tables.read().await.receipts.clone())
    }

    async fn insert_company(&self, draft: CompanyDraft) -> Result<Company, ServerError> {
        let mut tables = self.tables.write().await;
        let company = Company {
            id: CompanyId(tables.allocate_id()),
            name: draft.name,
            tax_id: draft.tax_id,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
        };
        tables.companies.push(company.clone());
        tracing::debug!(company_id = company.id.0, "company inserted");
        Ok(company)
    }

    async fn update_company(
        &self,
        id: CompanyId,
        draft: CompanyDraft,
    ) -> Result<Company, ServerError> {
        let mut tables = self.tables.write().await;
        let company = tables
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CompanyNotFound::new(&id))?;
        *company = Company {
            id,
            name: draft.name,
            tax_id: draft.tax_id,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
        };
        Ok(company.clone())
    }

    async fn delete_company(&self, id: CompanyId) -> Result<(), ServerError> {
        let mut tables = self.tables.write().await;
        if tables.invoices.iter().any(|i| i.company_id == id) {
            return Err(RecordStoreInconsistent::new(
                "company is still referenced by invoices",
            ));
        }
        let before = tables.companies.len();
        tables.companies.retain(|c| c.id != id);
        if tables.companies.len() == before {
            return Err(CompanyNotFound::new(&id));
        }
        Ok(())
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<Invoice, ServerError> {
        let mut tables = self.tables.write().await;
        tables.require_company(invoice.company_id)?;
        let invoice = Invoice {
            id: InvoiceId(tables.allocate_id()),
            company_name: tables.company_name(invoice.company_id),
            number: invoice.number,
            issue_date: invoice.issue_date,
            company_id: invoice.company_id,
            amount: invoice.amount,
            tax_amount: invoice.tax_amount,
            notes: invoice.notes,
        };
        tables.invoices.push(invoice.clone());
        tracing::debug!(invoice_id = invoice.id.0, "invoice inserted");
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: InvoiceId,
        invoice: NewInvoice,
    ) -> Result<Invoice, ServerError> {
        let mut tables = self.tables.write().await;
        tables.require_company(invoice.company_id)?;
        let company_name = tables.company_name(invoice.company_id);
        let existing = tables
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| InvoiceNotFound::new(&id))?;
        *existing = Invoice {
            id,
            number: invoice.number,
            issue_date: invoice.issue_date,
            company_id: invoice.company_id,
            company_name,
            amount: invoice.amount,
            tax_amount: invoice.tax_amount,
            notes: invoice.notes,
        };
        Ok(existing.clone())
    }

    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServerError> {
        let mut tables = self.tables.write().await;
        if tables.receipts.iter().any(|r| r.invoice_id == id) {
            return Err(RecordStoreInconsistent::new(
                "invoice is still referenced by receipts",
            ));
        }
        let before = tables.invoices.len();
        tables.invoices.retain(|i| i.id != id);
        if tables.invoices.len() == before {
            return Err(InvoiceNotFound::new(&id));
        }
        Ok(())
    }

    async fn insert_receipt(&self, upload: ReceiptUpload) -> Result<Receipt, ServerError> {
        let mut tables = self.tables.write().await;
        if !tables.invoices.iter().any(|i| i.id == upload.invoice_id) {
            return Err(InvoiceNotFound::new(&upload.invoice_id));
        }
        let receipt = Receipt {
            id: ReceiptId(tables.allocate_id()),
            invoice_id: upload.invoice_id,
            receipt_date: upload.receipt_date,
            file_name: upload.file_name,
            file_type: upload.file_type,
            file_data: upload.file_data,
            notes: upload.notes,
        };
        tables.receipts.push(receipt.clone());
        tracing::debug!(
            receipt_id = receipt.id.0,
            invoice_id = receipt.invoice_id.0,
            "receipt inserted"
        );
        Ok(receipt)
    }

    async fn delete_receipts_for_invoice(&self, id: InvoiceId) -> Result<usize, ServerError> {
        let mut tables = self.tables.write().await;
        let before = tables.receipts.len();
        tables.receipts.retain(|r| r.invoice_id != id);
        Ok(before - tables.receipts.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn draft(name: &str) -> CompanyDraft {
        CompanyDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    fn new_invoice(company_id: CompanyId, day: u32) -> NewInvoice {
        NewInvoice {
            number: format!("N-{day}"),
            issue_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            company_id,
            amount: 200.0,
            tax_amount: 2.0,
            notes: None,
        }
    }

    fn upload(invoice_id: InvoiceId) -> ReceiptUpload {
        ReceiptUpload {
            invoice_id,
            receipt_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            file_name: "r.pdf".into(),
            file_type: "application/pdf".into(),
            file_data: "JVBERi0=".into(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn lists_companies_by_name_and_invoices_newest_first() {
        let repo = InMemoryRecordsRepository::new();
        let b = repo.insert_company(draft("Beta")).await.unwrap();
        repo.insert_company(draft("Alpha")).await.unwrap();
        repo.insert_invoice(new_invoice(b.id, 1)).await.unwrap();
        repo.insert_invoice(new_invoice(b.id, 20)).await.unwrap();

        let names: Vec<_> = repo.companies().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);

        let invoices = repo.invoices().await.unwrap();
        assert_eq!(invoices[0].number, "N-20");
        assert_eq!(invoices[0].company_name.as_deref(), Some("Beta"));
    }

    #[tokio::test]
    async fn invoice_join_follows_company_renames() {
        let repo = InMemoryRecordsRepository::new();
        let c = repo.insert_company(draft("Old")).await.unwrap();
        repo.insert_invoice(new_invoice(c.id, 3)).await.unwrap();
        repo.update_company(c.id, draft("New")).await.unwrap();
        assert_eq!(repo.invoices().await.unwrap()[0].company_name.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn rejects_dangling_references() {
        let repo = InMemoryRecordsRepository::new();
        assert!(repo.insert_invoice(new_invoice(CompanyId(99), 1)).await.is_err());
        assert!(repo.insert_receipt(upload(InvoiceId(99))).await.is_err());

        let c = repo.insert_company(draft("Acme")).await.unwrap();
        let i = repo.insert_invoice(new_invoice(c.id, 1)).await.unwrap();
        repo.insert_receipt(upload(i.id)).await.unwrap();
        assert!(repo.delete_company(c.id).await.is_err());
        assert!(repo.delete_invoice(i.id).await.is_err());

        assert_eq!(repo.delete_receipts_for_invoice(i.id).await.unwrap(), 1);
        repo.delete_invoice(i.id).await.unwrap();
        repo.delete_company(c.id).await.unwrap();
        assert!(repo.companies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_ids_are_not_reused() {
        let repo = InMemoryRecordsRepository::from_snapshot(RecordsSnapshot {
            companies: vec![Company {
                id: CompanyId(41),
                name: "Seed".into(),
                tax_id: None,
                phone: None,
                email: None,
                address: None,
            }],
            ..Default::default()
        });
        let c = repo.insert_company(draft("Next")).await.unwrap();
        assert_eq!(c.id, CompanyId(42));
    }
}
