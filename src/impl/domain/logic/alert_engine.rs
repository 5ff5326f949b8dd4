use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entities::{Alert, AlertSeverity, Invoice, Receipt, TrackerConfig};

use super::{status_engine::StatusEngine, utils::replace_placeholders};

/// Scans invoices without a receipt and flags those past or near their
/// deadline. Alerts keep the caller's invoice order.
pub struct AlertEngine<'e, 'a> {
    status_engine: &'e StatusEngine<'a>,
    config: &'e TrackerConfig,
}

impl<'e, 'a> AlertEngine<'e, 'a> {
    pub fn new(status_engine: &'e StatusEngine<'a>, config: &'e TrackerConfig) -> Self {
        Self {
            status_engine,
            config,
        }
    }

    pub fn process(&self, invoices: &[Invoice]) -> Vec<Alert> {
        invoices
            .iter()
            .filter(|invoice| !self.status_engine.has_receipt(invoice))
            .filter_map(|invoice| self.alert_for(invoice))
            .collect()
    }

    fn alert_for(&self, invoice: &Invoice) -> Option<Alert> {
        let days_remaining = self.status_engine.days_remaining(invoice);
        let (severity, template, days) = if days_remaining <= 0 {
            (
                AlertSeverity::Danger,
                &self.config.danger_template,
                days_remaining.abs(),
            )
        } else if days_remaining <= self.config.warning_window_days() {
            (
                AlertSeverity::Warning,
                &self.config.warning_template,
                days_remaining,
            )
        } else {
            return None;
        };
        let values = HashMap::from([
            ("number", invoice.number.clone()),
            ("days", days.to_string()),
        ]);
        let (message, unknown_keys) = replace_placeholders(template, &values);
        if !unknown_keys.is_empty() {
            tracing::warn!(
                invoice_id = invoice.id.0,
                ?unknown_keys,
                "alert template has placeholders with no value; left as is"
            );
        }
        Some(Alert {
            severity,
            invoice: invoice.clone(),
            days_remaining,
            message,
        })
    }
}

/// Alerts for `invoices`, evaluated against a single `now`.
pub fn compute_alerts(
    invoices: &[Invoice],
    receipts: &[Receipt],
    now: DateTime<Utc>,
    config: &TrackerConfig,
) -> Vec<Alert> {
    let status_engine = StatusEngine::new(config, receipts, now);
    AlertEngine::new(&status_engine, config).process(invoices)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone as _};

    use super::*;
    use crate::entities::{CompanyId, InvoiceId, ReceiptId};

    fn invoice(id: u64, number: &str, issue_date: NaiveDate) -> Invoice {
        Invoice {
            id: InvoiceId(id),
            number: number.to_string(),
            issue_date,
            company_id: CompanyId(1),
            company_name: None,
            amount: 500.0,
            tax_amount: 5.0,
            notes: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> NaiveDate {
        now().date_naive() - chrono::Duration::days(days)
    }

    #[test]
    fn danger_for_overdue_invoices() {
        let invoices = vec![invoice(1, "A-1", days_ago(53))];
        let alerts = compute_alerts(&invoices, &[], now(), &TrackerConfig::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Danger);
        assert_eq!(alerts[0].days_remaining, -3);
        assert_eq!(alerts[0].message, "Invoice A-1 is overdue by 3 day(s)");
    }

    #[test]
    fn deadline_day_is_danger() {
        let invoices = vec![invoice(1, "A-1", days_ago(50))];
        let alerts = compute_alerts(&invoices, &[], now(), &TrackerConfig::default());
        assert_eq!(alerts[0].severity, AlertSeverity::Danger);
        assert_eq!(alerts[0].message, "Invoice A-1 is overdue by 0 day(s)");
    }

    #[test]
    fn warning_within_window() {
        let invoices = vec![
            invoice(1, "W-10", days_ago(40)),
            invoice(2, "W-1", days_ago(49)),
            invoice(3, "OK-11", days_ago(39)),
        ];
        let alerts = compute_alerts(&invoices, &[], now(), &TrackerConfig::default());
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.severity == AlertSeverity::Warning));
        assert_eq!(alerts[0].message, "Invoice W-10 warning: 10 day(s) remaining");
        assert_eq!(alerts[1].invoice.number, "W-1");
    }

    #[test]
    fn invoices_with_receipts_are_skipped() {
        let invoices = vec![invoice(1, "P-1", days_ago(80))];
        let receipts = vec![Receipt {
            id: ReceiptId(1),
            invoice_id: InvoiceId(1),
            receipt_date: days_ago(1),
            file_name: "r.png".into(),
            file_type: "image/png".into(),
            file_data: "iVBORw0K".into(),
            notes: None,
        }];
        assert!(compute_alerts(&invoices, &receipts, now(), &TrackerConfig::default()).is_empty());
    }

    #[test]
    fn keeps_caller_order() {
        let invoices = vec![
            invoice(1, "W", days_ago(45)),
            invoice(2, "D", days_ago(70)),
            invoice(3, "W2", days_ago(42)),
        ];
        let alerts = compute_alerts(&invoices, &[], now(), &TrackerConfig::default());
        let numbers: Vec<_> = alerts.iter().map(|a| a.invoice.number.as_str()).collect();
        assert_eq!(numbers, vec!["W", "D", "W2"]);
    }

    #[test]
    fn warning_window_is_danger_minus_warning() {
        let config = TrackerConfig {
            warning_threshold_days: 30,
            danger_threshold_days: 50,
            ..TrackerConfig::default()
        };
        let invoices = vec![invoice(1, "W-20", days_ago(30)), invoice(2, "OK", days_ago(29))];
        let alerts = compute_alerts(&invoices, &[], now(), &config);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].invoice.number, "W-20");
    }

    #[test]
    fn unvalidated_template_keeps_unknown_placeholders() {
        let config = TrackerConfig {
            danger_template: "{{number}} from {{company}} is late".into(),
            ..TrackerConfig::default()
        };
        let invoices = vec![invoice(1, "L-1", days_ago(60))];
        let alerts = compute_alerts(&invoices, &[], now(), &config);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "L-1 from {{company}} is late");
    }
}
