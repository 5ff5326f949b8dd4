use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::records_snapshot_model::RecordsSnapshotModel,
    entities::RecordsSnapshot,
    errors::{InvalidJson, ReadError},
};

/// Reads a JSON export of the record store:
/// `{ "companies": [...], "invoices": [...], "receipts": [...] }`, with
/// invoices optionally carrying the `company: { name }` join.
#[async_trait]
pub(crate) trait RecordsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<RecordsSnapshot, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<RecordsSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<RecordsSnapshot, ServerError> {
        let model: RecordsSnapshotModel =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("RecordsSnapshot", &e))?;
        Ok(model.into())
    }

    async fn from_file<P>(&self, path: P) -> Result<RecordsSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&contents)
    }
}
