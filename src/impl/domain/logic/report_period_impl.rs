use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::{CriticalError, ServerError};

use crate::{
    entities::{Invoice, ReportPeriod},
    errors::InvalidMonth,
};

use super::utils::month_end_date;

impl ReportPeriod {
    pub fn month(year: i32, month: u32) -> Result<Self, ServerError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidMonth::new(month));
        }
        Ok(ReportPeriod::Month { year, month })
    }

    pub fn year(year: i32) -> Self {
        ReportPeriod::Year(year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            ReportPeriod::Month { year, month } => date.year() == *year && date.month() == *month,
            ReportPeriod::Year(year) => date.year() == *year,
        }
    }

    /// First and last day of the period.
    pub fn bounds(&self) -> Result<(NaiveDate, NaiveDate), ServerError> {
        let (start, end) = match self {
            ReportPeriod::Month { year, month } => (
                NaiveDate::from_ymd_opt(*year, *month, 1),
                month_end_date(*year, *month),
            ),
            ReportPeriod::Year(year) => (
                NaiveDate::from_ymd_opt(*year, 1, 1),
                NaiveDate::from_ymd_opt(*year, 12, 31),
            ),
        };
        start.zip(end).ok_or_else(|| {
            CriticalError::with_debug("report period is out of the supported date range", self)
        })
    }

    pub fn filter<'a>(&self, invoices: &'a [Invoice]) -> Vec<&'a Invoice> {
        invoices
            .iter()
            .filter(|invoice| self.contains(invoice.issue_date))
            .collect()
    }
}
