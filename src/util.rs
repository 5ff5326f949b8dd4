use std::sync::Arc;

use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            config_ron_datasource::{ConfigRonDatasource as _, ConfigRonDatasourceImpl},
            records_json_datasource::{RecordsJsonDatasource as _, RecordsJsonDatasourceImpl},
        },
        repositories::records_repository_impl::InMemoryRecordsRepository,
    },
    domain::{
        repositories::records_repository::RecordsRepository,
        usecases::{
            dashboard_usecase::{DashboardUsecase as _, DashboardUsecaseImpl},
            records_usecase::{RecordsUsecase as _, RecordsUsecaseImpl},
            report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
        },
    },
    entities::{
        Alert, AnnualReport, Company, CompanyDraft, CompanyFilter, CompanyId, CompanyOverview,
        Dashboard, Invoice, InvoiceDraft, InvoiceFilter, InvoiceId, MonthlyReport, Receipt,
        ReceiptUpload, RecordsSnapshot, TrackerConfig,
    },
    presentation::{
        csv_exporter::{csv_file_name, CsvExporter},
        report_printer::ReportPrinter,
    },
};

/// A CSV document together with its suggested file name.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

pub struct InvoiceTrackerUtil<R: RecordsRepository = InMemoryRecordsRepository> {
    config: Arc<TrackerConfig>,
    records_usecase: RecordsUsecaseImpl<R>,
    dashboard_usecase: DashboardUsecaseImpl<R>,
    report_usecase: ReportUsecaseImpl<R>,
    printer: ReportPrinter,
    csv_exporter: CsvExporter,
}

impl<R: RecordsRepository> InvoiceTrackerUtil<R> {
    pub fn new(records_repository: Arc<R>, config: TrackerConfig) -> Self {
        let config = Arc::new(config);
        Self {
            records_usecase: RecordsUsecaseImpl::new(records_repository.clone()),
            dashboard_usecase: DashboardUsecaseImpl::new(
                records_repository.clone(),
                config.clone(),
            ),
            report_usecase: ReportUsecaseImpl::new(records_repository, config.clone()),
            printer: ReportPrinter::new(config.currency),
            csv_exporter: CsvExporter::new(),
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    // Dashboard.
    // ---

    pub async fn dashboard(
        &self,
        now: DateTime<Utc>,
        filter: &InvoiceFilter,
    ) -> Result<Dashboard, ServerError> {
        self.dashboard_usecase.dashboard(now, filter).await
    }

    pub async fn alerts(&self, now: DateTime<Utc>) -> Result<Vec<Alert>, ServerError> {
        self.dashboard_usecase.alerts(now).await
    }

    pub async fn company_overview(
        &self,
        now: DateTime<Utc>,
        filter: &CompanyFilter,
    ) -> Result<Vec<CompanyOverview>, ServerError> {
        self.dashboard_usecase.company_overview(now, filter).await
    }

    // Records.
    // ---

    pub async fn snapshot(&self) -> Result<RecordsSnapshot, ServerError> {
        self.records_usecase.snapshot().await
    }

    /// Creates the company when `id` is `None`, otherwise updates it.
    pub async fn save_company(
        &self,
        id: Option<CompanyId>,
        draft: CompanyDraft,
    ) -> Result<Company, ServerError> {
        self.records_usecase.save_company(id, draft).await
    }

    pub async fn delete_company(&self, id: CompanyId) -> Result<(), ServerError> {
        self.records_usecase.delete_company(id).await
    }

    /// Creates the invoice when `id` is `None`, otherwise updates it.
    pub async fn save_invoice(
        &self,
        id: Option<InvoiceId>,
        draft: InvoiceDraft,
    ) -> Result<Invoice, ServerError> {
        self.records_usecase.save_invoice(id, draft).await
    }

    pub async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServerError> {
        self.records_usecase.delete_invoice(id).await
    }

    pub async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<Receipt, ServerError> {
        self.records_usecase.upload_receipt(upload).await
    }

    // Reports.
    // ---

    pub async fn monthly_report(
        &self,
        year: i32,
        month: u32,
        now: DateTime<Utc>,
    ) -> Result<MonthlyReport, ServerError> {
        self.report_usecase.monthly_report(year, month, now).await
    }

    pub async fn annual_report(
        &self,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<AnnualReport, ServerError> {
        self.report_usecase.annual_report(year, now).await
    }

    pub async fn monthly_report_text(
        &self,
        year: i32,
        month: u32,
        now: DateTime<Utc>,
    ) -> Result<String, ServerError> {
        let report = self.monthly_report(year, month, now).await?;
        Ok(self.printer.print_monthly_report(&report))
    }

    pub async fn annual_report_text(
        &self,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<String, ServerError> {
        let report = self.annual_report(year, now).await?;
        Ok(self.printer.print_annual_report(&report))
    }

    pub async fn alerts_text(&self, now: DateTime<Utc>) -> Result<String, ServerError> {
        let alerts = self.alerts(now).await?;
        Ok(self.printer.print_alerts(&alerts))
    }

    pub async fn monthly_report_csv(
        &self,
        year: i32,
        month: u32,
        now: DateTime<Utc>,
    ) -> Result<CsvExport, ServerError> {
        let report = self.monthly_report(year, month, now).await?;
        Ok(CsvExport {
            file_name: csv_file_name(year, month),
            contents: self.csv_exporter.export_monthly_report(&report)?,
        })
    }
}

impl InvoiceTrackerUtil<InMemoryRecordsRepository> {
    pub fn in_memory(config: TrackerConfig) -> Self {
        Self::new(Arc::new(InMemoryRecordsRepository::new()), config)
    }

    /// Seeds an in-memory store from a JSON export of the hosted backend.
    pub fn from_snapshot_string(json: &str, config: TrackerConfig) -> Result<Self, ServerError> {
        let snapshot = RecordsJsonDatasourceImpl::new().from_string(json)?;
        Ok(Self::new(
            Arc::new(InMemoryRecordsRepository::from_snapshot(snapshot)),
            config,
        ))
    }

    pub async fn from_snapshot_file<P>(path: P, config: TrackerConfig) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let snapshot = RecordsJsonDatasourceImpl::new().from_file(path).await?;
        Ok(Self::new(
            Arc::new(InMemoryRecordsRepository::from_snapshot(snapshot)),
            config,
        ))
    }
}

/// Reads a `TrackerConfig` from RON. Omitted fields keep their defaults.
pub fn config_from_string(ron: &str) -> Result<TrackerConfig, ServerError> {
    ConfigRonDatasourceImpl::new().from_string(ron)
}

pub async fn config_from_file<P>(path: P) -> Result<TrackerConfig, ServerError>
where
    P: AsRef<std::path::Path> + Send,
{
    ConfigRonDatasourceImpl::new().from_file(path).await
}
