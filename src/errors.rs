use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

use crate::entities::{CompanyId, InvoiceId};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });

// Validation-related.
define_client_error!(InvalidCompany, "Invalid company: {details}.", { details: &str });
define_client_error!(InvalidInvoice, "Invalid invoice: {details}.", { details: &str });
define_client_error!(InvalidReceipt, "Invalid receipt: {details}.", { details: &str });
define_client_error!(InvalidMonth, "Invalid month: {month}. Expected a value from 1 to 12.", { month: u32 });
define_client_error!(
    InvalidThresholds,
    "Invalid alert configuration (deadline: {deadline_days} days, warning: {warning_days} days, danger: {danger_days} days). Deadline must be between 1 and 36500 days and warning must not exceed danger.",
    { deadline_days: i64, warning_days: i64, danger_days: i64 }
);
define_client_error!(
    UnknownTemplatePlaceholder,
    "Alert template '{template}' references unknown placeholders: {keys:?}.",
    { template: &str, keys: &Vec<String> }
);

// Record-related.
define_client_error!(CompanyNotFound, "Company {company_id:?} does not exist.", { company_id: &CompanyId });
define_client_error!(InvoiceNotFound, "Invoice {invoice_id:?} does not exist.", { invoice_id: &InvoiceId });
define_client_error!(
    CompanyHasInvoices,
    "Company {company_id:?} cannot be deleted while {count} invoice(s) reference it.",
    { company_id: &CompanyId, count: usize }
);
define_internal_error!(
    RecordStoreInconsistent,
    "Record store is inconsistent: {details}.",
    { details: &str }
);

// Reporting-related.
define_client_error!(
    NoInvoicesInPeriod,
    "No invoices issued between {from} and {until}.",
    { from: &NaiveDate, until: &NaiveDate }
);
define_internal_error!(CsvExportFailed, "Failed to export report as CSV.");
