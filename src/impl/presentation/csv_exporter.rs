use fractic_server_error::ServerError;

use crate::{
    entities::{MonthlyReport, UNSPECIFIED_COMPANY},
    errors::CsvExportFailed,
};

const BYTE_ORDER_MARK: &str = "\u{FEFF}";
const HEADER: [&str; 6] = [
    "Invoice number",
    "Date",
    "Company",
    "Amount",
    "Tax (1%)",
    "Status",
];

pub(crate) fn csv_file_name(year: i32, month: u32) -> String {
    format!("tax-report-{}-{}.csv", year, month)
}

/// Writes a monthly report as UTF-8 CSV, prefixed with a byte order mark so
/// spreadsheet tools pick up the encoding.
pub(crate) struct CsvExporter;

impl CsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn export_monthly_report(
        &self,
        report: &MonthlyReport,
    ) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(BYTE_ORDER_MARK.as_bytes().to_vec());
        writer
            .write_record(HEADER)
            .map_err(|e| CsvExportFailed::with_debug(&e))?;
        for (invoice, status) in report.invoices() {
            writer
                .write_record([
                    invoice.number.clone(),
                    invoice.issue_date.to_string(),
                    invoice
                        .company_name
                        .clone()
                        .unwrap_or_else(|| UNSPECIFIED_COMPANY.to_string()),
                    invoice.amount.to_string(),
                    invoice.tax_amount.to_string(),
                    status.to_string(),
                ])
                .map_err(|e| CsvExportFailed::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvExportFailed::with_debug(&e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CsvExportFailed::with_debug(&e))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{CompanyId, Invoice, InvoiceId, Stats};

    fn invoice(id: u64, number: &str, company_name: Option<&str>) -> Invoice {
        Invoice {
            id: InvoiceId(id),
            number: number.into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            company_id: CompanyId(1),
            company_name: company_name.map(str::to_string),
            amount: 1500.5,
            tax_amount: 15.01,
            notes: None,
        }
    }

    #[test]
    fn file_name() {
        assert_eq!(csv_file_name(2024, 3), "tax-report-2024-3.csv");
    }

    #[test]
    fn exports_rows_with_bom_and_quoting() {
        let report = MonthlyReport {
            year: 2024,
            month: 3,
            stats: Stats::default(),
            received: vec![invoice(1, "A-1", Some("Acme, Inc."))],
            pending: vec![],
            overdue: vec![invoice(2, "A-2", None)],
            companies: vec![],
        };
        let csv = CsvExporter::new().export_monthly_report(&report).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("\u{FEFF}Invoice number,Date,Company,Amount,Tax (1%),Status")
        );
        assert_eq!(
            lines.next(),
            Some("A-1,2024-03-05,\"Acme, Inc.\",1500.5,15.01,Received")
        );
        assert_eq!(
            lines.next(),
            Some("A-2,2024-03-05,Unspecified,1500.5,15.01,Overdue")
        );
        assert_eq!(lines.next(), None);
    }
}
