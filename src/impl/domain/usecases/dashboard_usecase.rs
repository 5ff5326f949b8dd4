use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{
            alert_engine::AlertEngine, report_aggregator::ReportAggregator,
            status_engine::StatusEngine,
        },
        repositories::records_repository::RecordsRepository,
    },
    entities::{
        Alert, CompanyFilter, CompanyOverview, Dashboard, InvoiceFilter, InvoiceStatus,
        TrackerConfig,
    },
};

use super::records_usecase::load_snapshot;

#[async_trait]
pub trait DashboardUsecase: Send + Sync {
    /// Overall counts and alerts cover every invoice; the invoice rows are
    /// narrowed by `filter`.
    async fn dashboard(
        &self,
        now: DateTime<Utc>,
        filter: &InvoiceFilter,
    ) -> Result<Dashboard, ServerError>;

    async fn alerts(&self, now: DateTime<Utc>) -> Result<Vec<Alert>, ServerError>;

    async fn company_overview(
        &self,
        now: DateTime<Utc>,
        filter: &CompanyFilter,
    ) -> Result<Vec<CompanyOverview>, ServerError>;
}

pub(crate) struct DashboardUsecaseImpl<R: RecordsRepository> {
    records_repository: Arc<R>,
    config: Arc<TrackerConfig>,
}

impl<R: RecordsRepository> DashboardUsecaseImpl<R> {
    pub(crate) fn new(records_repository: Arc<R>, config: Arc<TrackerConfig>) -> Self {
        Self {
            records_repository,
            config,
        }
    }
}

#[async_trait]
impl<R: RecordsRepository> DashboardUsecase for DashboardUsecaseImpl<R> {
    async fn dashboard(
        &self,
        now: DateTime<Utc>,
        filter: &InvoiceFilter,
    ) -> Result<Dashboard, ServerError> {
        let snapshot = load_snapshot(self.records_repository.as_ref()).await?;
        let status_engine = StatusEngine::new(&self.config, &snapshot.receipts, now);
        let stats = ReportAggregator::new(&status_engine).stats(&snapshot.invoices);
        let alerts = AlertEngine::new(&status_engine, &self.config).process(&snapshot.invoices);
        let invoices = filter
            .apply(&snapshot.invoices, &status_engine)
            .into_iter()
            .map(|invoice| status_engine.row(invoice))
            .collect();
        tracing::debug!(
            total = stats.total,
            overdue = stats.overdue,
            alerts = alerts.len(),
            "dashboard evaluated"
        );
        Ok(Dashboard {
            stats,
            alerts,
            invoices,
        })
    }

    async fn alerts(&self, now: DateTime<Utc>) -> Result<Vec<Alert>, ServerError> {
        let snapshot = load_snapshot(self.records_repository.as_ref()).await?;
        let status_engine = StatusEngine::new(&self.config, &snapshot.receipts, now);
        Ok(AlertEngine::new(&status_engine, &self.config).process(&snapshot.invoices))
    }

    async fn company_overview(
        &self,
        now: DateTime<Utc>,
        filter: &CompanyFilter,
    ) -> Result<Vec<CompanyOverview>, ServerError> {
        let snapshot = load_snapshot(self.records_repository.as_ref()).await?;
        let status_engine = StatusEngine::new(&self.config, &snapshot.receipts, now);
        Ok(filter
            .apply(&snapshot.companies)
            .into_iter()
            .map(|company| {
                let (invoice_count, outstanding_count) = snapshot
                    .invoices
                    .iter()
                    .filter(|invoice| invoice.company_id == company.id)
                    .fold((0, 0), |(count, outstanding), invoice| {
                        let open = status_engine.status(invoice) != InvoiceStatus::Received;
                        (count + 1, outstanding + usize::from(open))
                    });
                CompanyOverview {
                    company: company.clone(),
                    invoice_count,
                    outstanding_count,
                }
            })
            .collect())
    }
}
