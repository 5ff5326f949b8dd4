use std::sync::LazyLock;

use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    entities::{CompanyDraft, InvoiceDraft, NewInvoice, ReceiptUpload, TAX_RATE},
    errors::{InvalidAmount, InvalidCompany, InvalidInvoice, InvalidReceipt},
};

use super::{receipt_impl::decode_file_data, utils::round_to};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("hardcoded regex should be valid")
});

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Tax owed on `amount`, rounded to cents.
pub fn tax_for_amount(amount: f64) -> f64 {
    round_to(amount * TAX_RATE, 2)
}

pub(crate) fn validate_amount(amount: f64) -> Result<f64, ServerError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InvalidAmount::new(&amount.to_string()));
    }
    Ok(amount)
}

impl CompanyDraft {
    /// Trims fields, blanks become `None`. Name is required.
    pub(crate) fn validated(self) -> Result<CompanyDraft, ServerError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(InvalidCompany::new("name is required"));
        }
        let email = non_blank(self.email);
        if let Some(email) = &email {
            if !EMAIL_PATTERN.is_match(email) {
                return Err(InvalidCompany::with_debug("email is malformed", email));
            }
        }
        Ok(CompanyDraft {
            name,
            tax_id: non_blank(self.tax_id),
            phone: non_blank(self.phone),
            email,
            address: non_blank(self.address),
        })
    }
}

impl InvoiceDraft {
    /// Validates the draft and fixes its tax amount.
    pub(crate) fn into_new_invoice(self) -> Result<NewInvoice, ServerError> {
        let number = self.number.trim().to_string();
        if number.is_empty() {
            return Err(InvalidInvoice::new("number is required"));
        }
        let amount = validate_amount(self.amount)?;
        Ok(NewInvoice {
            number,
            issue_date: self.issue_date,
            company_id: self.company_id,
            amount,
            tax_amount: tax_for_amount(amount),
            notes: non_blank(self.notes),
        })
    }
}

impl ReceiptUpload {
    pub(crate) fn validated(self) -> Result<ReceiptUpload, ServerError> {
        if self.file_name.trim().is_empty() {
            return Err(InvalidReceipt::new("file name is required"));
        }
        decode_file_data(&self.file_data)?;
        Ok(ReceiptUpload {
            notes: non_blank(self.notes),
            ..self
        })
    }
}
