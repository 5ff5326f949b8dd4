use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::tracker_config_model::TrackerConfigModel,
    entities::TrackerConfig,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait ConfigRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<TrackerConfig, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<TrackerConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ConfigRonDatasourceImpl;

impl ConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigRonDatasource for ConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<TrackerConfig, ServerError> {
        let model: TrackerConfigModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("TrackerConfig", &e))?;
        model.try_into()
    }

    async fn from_file<P>(&self, path: P) -> Result<TrackerConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&contents)
    }
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;

    #[test]
    fn omitted_fields_use_defaults() {
        let config = ConfigRonDatasourceImpl::new()
            .from_string("(deadline_days: Some(60), currency: Some(\"USD\"))")
            .unwrap();
        assert_eq!(config.deadline_days, 60);
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.warning_threshold_days, 40);
        assert_eq!(config.danger_threshold_days, 50);
    }

    #[test]
    fn empty_document_is_default() {
        let config = ConfigRonDatasourceImpl::new().from_string("()").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn rejects_unknown_currency_and_bad_thresholds() {
        let datasource = ConfigRonDatasourceImpl::new();
        assert!(datasource.from_string("(currency: Some(\"XYZ\"))").is_err());
        assert!(datasource
            .from_string("(warning_threshold_days: Some(70))")
            .is_err());
        assert!(datasource.from_string("(deadline_days: \"soon\")").is_err());
    }
}
