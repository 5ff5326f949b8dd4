use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{report_aggregator::ReportAggregator, status_engine::StatusEngine},
        repositories::records_repository::RecordsRepository,
    },
    entities::{AnnualReport, MonthlyReport, ReportPeriod, TrackerConfig},
    errors::NoInvoicesInPeriod,
};

use super::records_usecase::load_snapshot;

#[async_trait]
pub trait ReportUsecase: Send + Sync {
    /// Fails with `NoInvoicesInPeriod` when nothing was issued that month.
    async fn monthly_report(
        &self,
        year: i32,
        month: u32,
        now: DateTime<Utc>,
    ) -> Result<MonthlyReport, ServerError>;

    /// Fails with `NoInvoicesInPeriod` when nothing was issued that year.
    async fn annual_report(&self, year: i32, now: DateTime<Utc>)
        -> Result<AnnualReport, ServerError>;
}

pub(crate) struct ReportUsecaseImpl<R: RecordsRepository> {
    records_repository: Arc<R>,
    config: Arc<TrackerConfig>,
}

impl<R: RecordsRepository> ReportUsecaseImpl<R> {
    pub(crate) fn new(records_repository: Arc<R>, config: Arc<TrackerConfig>) -> Self {
        Self {
            records_repository,
            config,
        }
    }
}

fn no_invoices(period: &ReportPeriod) -> ServerError {
    match period.bounds() {
        Ok((from, until)) => NoInvoicesInPeriod::new(&from, &until),
        Err(e) => e,
    }
}

#[async_trait]
impl<R: RecordsRepository> ReportUsecase for ReportUsecaseImpl<R> {
    async fn monthly_report(
        &self,
        year: i32,
        month: u32,
        now: DateTime<Utc>,
    ) -> Result<MonthlyReport, ServerError> {
        let period = ReportPeriod::month(year, month)?;
        let snapshot = load_snapshot(self.records_repository.as_ref()).await?;
        let invoices = period.filter(&snapshot.invoices);
        if invoices.is_empty() {
            return Err(no_invoices(&period));
        }
        let status_engine = StatusEngine::new(&self.config, &snapshot.receipts, now);
        let report = ReportAggregator::new(&status_engine).monthly_report(year, month, &invoices);
        tracing::info!(year, month, total = report.stats.total, "monthly report generated");
        Ok(report)
    }

    async fn annual_report(
        &self,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<AnnualReport, ServerError> {
        let period = ReportPeriod::year(year);
        let snapshot = load_snapshot(self.records_repository.as_ref()).await?;
        let invoices = period.filter(&snapshot.invoices);
        if invoices.is_empty() {
            return Err(no_invoices(&period));
        }
        let status_engine = StatusEngine::new(&self.config, &snapshot.receipts, now);
        let report = ReportAggregator::new(&status_engine).annual_report(year, &invoices);
        tracing::info!(
            year,
            total = report.stats.total,
            months = report.months.len(),
            "annual report generated"
        );
        Ok(report)
    }
}
