use std::fmt::{Display, Formatter, Result};

use crate::entities::{AlertSeverity, DisplayTier, InvoiceStatus};

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Received => "Received",
            InvoiceStatus::Overdue => "Overdue",
        };
        write!(f, "{}", s)
    }
}

impl Display for DisplayTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            DisplayTier::Safe => "safe",
            DisplayTier::Warning => "warning",
            DisplayTier::Urgent => "urgent",
        };
        write!(f, "{}", s)
    }
}

impl Display for AlertSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Danger => "OVERDUE",
        };
        write!(f, "{}", s)
    }
}

/// Text for the remaining-days column.
pub fn days_text(days_remaining: i64, status: InvoiceStatus) -> String {
    if status == InvoiceStatus::Received {
        "Received".to_string()
    } else if days_remaining <= 0 {
        format!("Overdue by {} day(s)", days_remaining.abs())
    } else {
        format!("{} day(s)", days_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_text_variants() {
        assert_eq!(days_text(-4, InvoiceStatus::Received), "Received");
        assert_eq!(days_text(0, InvoiceStatus::Overdue), "Overdue by 0 day(s)");
        assert_eq!(days_text(-3, InvoiceStatus::Overdue), "Overdue by 3 day(s)");
        assert_eq!(days_text(12, InvoiceStatus::Pending), "12 day(s)");
    }
}
