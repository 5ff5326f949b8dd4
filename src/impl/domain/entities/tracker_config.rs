use iso_currency::Currency;

/// Placeholders available to alert message templates.
pub const TEMPLATE_PLACEHOLDERS: [&str; 2] = ["number", "days"];

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Days after the issue date by which a receipt is due.
    pub deadline_days: i64,
    pub warning_threshold_days: i64,
    pub danger_threshold_days: i64,
    pub currency: Currency,
    /// Message for invoices past their deadline. `{{days}}` is the number of
    /// days overdue.
    pub danger_template: String,
    /// Message for invoices close to their deadline. `{{days}}` is the number
    /// of days remaining.
    pub warning_template: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            deadline_days: 50,
            warning_threshold_days: 40,
            danger_threshold_days: 50,
            currency: Currency::EGP,
            danger_template: "Invoice {{number}} is overdue by {{days}} day(s)".to_string(),
            warning_template: "Invoice {{number}} warning: {{days}} day(s) remaining".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Invoices without a receipt and with at most this many days remaining
    /// raise a warning alert.
    ///
    /// Kept as `danger - warning` rather than compared to the warning
    /// threshold directly. With the defaults this is 10 days.
    pub fn warning_window_days(&self) -> i64 {
        self.danger_threshold_days - self.warning_threshold_days
    }
}
