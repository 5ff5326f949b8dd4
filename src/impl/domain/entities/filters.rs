use super::status::InvoiceStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    /// Month of year (1-12), matched regardless of year.
    pub month: Option<u32>,
    /// Case-insensitive match on invoice number or company name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    /// Case-insensitive match on company name or tax id.
    pub search: Option<String>,
}
