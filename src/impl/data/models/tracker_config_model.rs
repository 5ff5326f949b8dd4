use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{entities::TrackerConfig, errors::InvalidIsoCurrencyCode};

/// Every field falls back to the default configuration when omitted.
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct TrackerConfigModel {
    pub deadline_days: Option<i64>,
    pub warning_threshold_days: Option<i64>,
    pub danger_threshold_days: Option<i64>,
    pub currency: Option<String>,
    pub danger_template: Option<String>,
    pub warning_template: Option<String>,
}

impl TryFrom<TrackerConfigModel> for TrackerConfig {
    type Error = ServerError;

    fn try_from(model: TrackerConfigModel) -> Result<TrackerConfig, Self::Error> {
        let defaults = TrackerConfig::default();
        let currency = match model.currency {
            Some(code) => Currency::from_code(code.trim())
                .ok_or_else(|| InvalidIsoCurrencyCode::new(&code))?,
            None => defaults.currency,
        };
        TrackerConfig {
            deadline_days: model.deadline_days.unwrap_or(defaults.deadline_days),
            warning_threshold_days: model
                .warning_threshold_days
                .unwrap_or(defaults.warning_threshold_days),
            danger_threshold_days: model
                .danger_threshold_days
                .unwrap_or(defaults.danger_threshold_days),
            currency,
            danger_template: model.danger_template.unwrap_or(defaults.danger_template),
            warning_template: model.warning_template.unwrap_or(defaults.warning_template),
        }
        .validated()
    }
}
