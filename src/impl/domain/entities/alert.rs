use super::invoice::Invoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSeverity {
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub invoice: Invoice,
    pub days_remaining: i64,
    pub message: String,
}
