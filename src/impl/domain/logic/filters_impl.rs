use crate::entities::{Company, CompanyFilter, Invoice, InvoiceFilter};

use super::status_engine::StatusEngine;

fn normalized(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice, status_engine: &StatusEngine<'_>) -> bool {
        use chrono::Datelike as _;

        if let Some(status) = self.status {
            if status_engine.status(invoice) != status {
                return false;
            }
        }
        if let Some(month) = self.month {
            if invoice.issue_date.month() != month {
                return false;
            }
        }
        if let Some(term) = normalized(&self.search) {
            let company = invoice.company_name.as_deref().unwrap_or_default();
            if !invoice.number.to_lowercase().contains(&term)
                && !company.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(
        &self,
        invoices: &'a [Invoice],
        status_engine: &StatusEngine<'_>,
    ) -> Vec<&'a Invoice> {
        invoices
            .iter()
            .filter(|invoice| self.matches(invoice, status_engine))
            .collect()
    }
}

impl CompanyFilter {
    pub fn matches(&self, company: &Company) -> bool {
        match normalized(&self.search) {
            None => true,
            Some(term) => {
                company.name.to_lowercase().contains(&term)
                    || company
                        .tax_id
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&term)
            }
        }
    }

    pub fn apply<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        companies.iter().filter(|c| self.matches(c)).collect()
    }
}
