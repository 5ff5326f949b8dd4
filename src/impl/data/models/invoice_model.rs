use crate::entities::{CompanyId, Invoice, InvoiceId};

use super::{amount_model::AmountModel, iso_date_model::ISODateModel};

/// `company:companies(name)` join as returned by the record store.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CompanyJoinModel {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct InvoiceModel {
    pub id: u64,
    pub number: String,
    pub date: ISODateModel,
    pub company_id: u64,
    pub amount: AmountModel,
    pub tax_amount: AmountModel,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyJoinModel>,
}

impl Into<Invoice> for InvoiceModel {
    fn into(self) -> Invoice {
        Invoice {
            id: InvoiceId(self.id),
            number: self.number,
            issue_date: self.date.into(),
            company_id: CompanyId(self.company_id),
            company_name: self.company.and_then(|c| c.name),
            amount: self.amount.into(),
            tax_amount: self.tax_amount.into(),
            notes: self.notes,
        }
    }
}
