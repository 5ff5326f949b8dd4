use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::entities::{
    DisplayTier, Invoice, InvoiceId, InvoiceRow, InvoiceStatus, Receipt, TrackerConfig,
};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// Display tiers for the remaining-days counter.
const URGENT_TIER_MAX_DAYS: i64 = 10;
const WARNING_TIER_MAX_DAYS: i64 = 30;

/// Whole days from `now` until the deadline (`deadline_days` after the issue
/// date, at 00:00 UTC), rounded up. Zero or negative once the deadline has
/// passed. Saturates instead of overflowing for dates near the end of the
/// calendar.
pub fn days_remaining(issue_date: NaiveDate, now: DateTime<Utc>, deadline_days: i64) -> i64 {
    let issued = issue_date.and_time(NaiveTime::MIN).and_utc();
    let millis = (issued - now)
        .num_milliseconds()
        .saturating_add(deadline_days.saturating_mul(MILLIS_PER_DAY));
    let whole_days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole_days + 1
    } else {
        whole_days
    }
}

/// A receipt always wins, regardless of how late it was uploaded.
pub fn derive_status(has_receipt: bool, days_remaining: i64) -> InvoiceStatus {
    if has_receipt {
        InvoiceStatus::Received
    } else if days_remaining <= 0 {
        InvoiceStatus::Overdue
    } else {
        InvoiceStatus::Pending
    }
}

pub fn display_tier(days_remaining: i64, status: InvoiceStatus) -> DisplayTier {
    if status == InvoiceStatus::Received {
        return DisplayTier::Safe;
    }
    if days_remaining <= URGENT_TIER_MAX_DAYS {
        DisplayTier::Urgent
    } else if days_remaining <= WARNING_TIER_MAX_DAYS {
        DisplayTier::Warning
    } else {
        DisplayTier::Safe
    }
}

/// Classifies invoices against one receipt set and one instant, so every
/// invoice in a single pass is judged against the same `now`.
pub struct StatusEngine<'a> {
    now: DateTime<Utc>,
    deadline_days: i64,
    receipts: HashMap<InvoiceId, &'a Receipt>,
}

impl<'a> StatusEngine<'a> {
    pub fn new(config: &TrackerConfig, receipts: &'a [Receipt], now: DateTime<Utc>) -> Self {
        // When an invoice has several receipts, the earliest one (lowest id on
        // equal dates) is authoritative.
        let receipts = receipts.iter().fold(HashMap::new(), |mut map, receipt| {
            map.entry(receipt.invoice_id)
                .and_modify(|current: &mut &'a Receipt| {
                    if (receipt.receipt_date, receipt.id) < (current.receipt_date, current.id) {
                        *current = receipt;
                    }
                })
                .or_insert(receipt);
            map
        });
        Self {
            now,
            deadline_days: config.deadline_days,
            receipts,
        }
    }

    pub fn receipt_for(&self, invoice: &Invoice) -> Option<&'a Receipt> {
        self.receipts.get(&invoice.id).copied()
    }

    pub fn has_receipt(&self, invoice: &Invoice) -> bool {
        self.receipts.contains_key(&invoice.id)
    }

    pub fn days_remaining(&self, invoice: &Invoice) -> i64 {
        days_remaining(invoice.issue_date, self.now, self.deadline_days)
    }

    pub fn status(&self, invoice: &Invoice) -> InvoiceStatus {
        derive_status(self.has_receipt(invoice), self.days_remaining(invoice))
    }

    pub fn row(&self, invoice: &Invoice) -> InvoiceRow {
        let days_remaining = self.days_remaining(invoice);
        let has_receipt = self.has_receipt(invoice);
        let status = derive_status(has_receipt, days_remaining);
        InvoiceRow {
            invoice: invoice.clone(),
            status,
            days_remaining,
            display_tier: display_tier(days_remaining, status),
            has_receipt,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use proptest::prelude::*;

    use super::*;
    use crate::entities::{CompanyId, ReceiptId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn invoice(id: u64, issue_date: NaiveDate) -> Invoice {
        Invoice {
            id: InvoiceId(id),
            number: format!("INV-{id}"),
            issue_date,
            company_id: CompanyId(1),
            company_name: Some("Acme".into()),
            amount: 1000.0,
            tax_amount: 10.0,
            notes: None,
        }
    }

    fn receipt(id: u64, invoice_id: u64, receipt_date: NaiveDate) -> Receipt {
        Receipt {
            id: ReceiptId(id),
            invoice_id: InvoiceId(invoice_id),
            receipt_date,
            file_name: "r.pdf".into(),
            file_type: "application/pdf".into(),
            file_data: "JVBERi0=".into(),
            notes: None,
        }
    }

    #[test]
    fn full_deadline_remains_on_issue_date() {
        assert_eq!(days_remaining(date(2024, 1, 1), midnight(2024, 1, 1), 50), 50);
    }

    #[test]
    fn one_day_overdue_after_fifty_one_days() {
        assert_eq!(days_remaining(date(2024, 1, 1), midnight(2024, 2, 21), 50), -1);
    }

    #[test]
    fn partial_days_round_up() {
        let now = Utc.with_ymd_and_hms(2024, 2, 18, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(date(2024, 1, 1), now, 50), 2);
        let now = Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 1).unwrap();
        assert_eq!(days_remaining(date(2024, 1, 1), now, 50), 0);
    }

    #[test]
    fn dates_near_the_calendar_end_do_not_overflow() {
        let now = midnight(2024, 1, 1);
        assert!(days_remaining(NaiveDate::MAX, now, 50) > 50);
        assert!(days_remaining(NaiveDate::MIN, now, 50) < 0);
        assert!(days_remaining(date(2024, 1, 1), now, i64::MAX) > 0);
    }

    #[test]
    fn deadline_day_counts_as_overdue() {
        assert_eq!(derive_status(false, 0), InvoiceStatus::Overdue);
        assert_eq!(derive_status(false, 1), InvoiceStatus::Pending);
        assert_eq!(derive_status(true, -30), InvoiceStatus::Received);
    }

    #[test]
    fn display_tiers() {
        assert_eq!(display_tier(-1, InvoiceStatus::Overdue), DisplayTier::Urgent);
        assert_eq!(display_tier(10, InvoiceStatus::Pending), DisplayTier::Urgent);
        assert_eq!(display_tier(11, InvoiceStatus::Pending), DisplayTier::Warning);
        assert_eq!(display_tier(30, InvoiceStatus::Pending), DisplayTier::Warning);
        assert_eq!(display_tier(31, InvoiceStatus::Pending), DisplayTier::Safe);
        assert_eq!(display_tier(-5, InvoiceStatus::Received), DisplayTier::Safe);
    }

    #[test]
    fn engine_classifies_against_one_instant() {
        let config = TrackerConfig::default();
        let receipts = vec![receipt(1, 2, date(2024, 3, 1))];
        let engine = StatusEngine::new(&config, &receipts, midnight(2024, 2, 21));

        let unpaid = invoice(1, date(2024, 1, 1));
        let paid = invoice(2, date(2024, 1, 1));
        let fresh = invoice(3, date(2024, 2, 20));

        assert_eq!(engine.status(&unpaid), InvoiceStatus::Overdue);
        assert_eq!(engine.status(&paid), InvoiceStatus::Received);
        assert_eq!(engine.status(&fresh), InvoiceStatus::Pending);

        let row = engine.row(&unpaid);
        assert_eq!(row.days_remaining, -1);
        assert_eq!(row.display_tier, DisplayTier::Urgent);
        assert!(!row.has_receipt);

        let row = engine.row(&paid);
        assert_eq!(row.display_tier, DisplayTier::Safe);
        assert!(row.has_receipt);
    }

    #[test]
    fn earliest_receipt_is_authoritative() {
        let config = TrackerConfig::default();
        let receipts = vec![
            receipt(5, 1, date(2024, 3, 2)),
            receipt(9, 1, date(2024, 3, 1)),
            receipt(4, 1, date(2024, 3, 1)),
        ];
        let engine = StatusEngine::new(&config, &receipts, midnight(2024, 3, 5));
        let found = engine.receipt_for(&invoice(1, date(2024, 1, 1))).unwrap();
        assert_eq!(found.id, ReceiptId(4));
    }

    #[test]
    fn deadline_follows_config() {
        let config = TrackerConfig {
            deadline_days: 30,
            ..TrackerConfig::default()
        };
        let engine = StatusEngine::new(&config, &[], midnight(2024, 1, 1));
        assert_eq!(engine.days_remaining(&invoice(1, date(2024, 1, 1))), 30);
    }

    proptest! {
        #[test]
        fn days_remaining_decreases_as_time_passes(
            issue_offset in -20_000i64..20_000,
            first in 0i64..200 * MILLIS_PER_DAY,
            step in 0i64..200 * MILLIS_PER_DAY,
        ) {
            let issue_date = date(2000, 1, 1) + chrono::Duration::days(issue_offset);
            let issued = issue_date.and_time(NaiveTime::MIN).and_utc();
            let t1 = issued + chrono::Duration::milliseconds(first);
            let t2 = t1 + chrono::Duration::milliseconds(step);

            prop_assert_eq!(days_remaining(issue_date, issued, 50), 50);
            prop_assert!(days_remaining(issue_date, t2, 50) <= days_remaining(issue_date, t1, 50));
        }
    }
}
