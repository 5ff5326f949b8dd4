/// Calendar window a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportPeriod {
    Month { year: i32, month: u32 },
    Year(i32),
}
