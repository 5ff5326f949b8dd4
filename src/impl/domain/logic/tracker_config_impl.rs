use fractic_server_error::ServerError;

use crate::{
    entities::{TrackerConfig, TEMPLATE_PLACEHOLDERS},
    errors::{InvalidThresholds, UnknownTemplatePlaceholder},
};

use super::utils::placeholder_keys;

/// Upper bound on the receipt deadline, a century.
const MAX_DEADLINE_DAYS: i64 = 36_500;

impl TrackerConfig {
    pub fn validated(self) -> Result<Self, ServerError> {
        if !(1..=MAX_DEADLINE_DAYS).contains(&self.deadline_days)
            || self.warning_threshold_days < 0
            || self.warning_threshold_days > self.danger_threshold_days
        {
            return Err(InvalidThresholds::new(
                self.deadline_days,
                self.warning_threshold_days,
                self.danger_threshold_days,
            ));
        }
        for template in [&self.danger_template, &self.warning_template] {
            let unknown: Vec<String> = placeholder_keys(template)
                .into_iter()
                .filter(|key| !TEMPLATE_PLACEHOLDERS.contains(&key.as_str()))
                .collect();
            if !unknown.is_empty() {
                return Err(UnknownTemplatePlaceholder::new(template, &unknown));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TrackerConfig::default().validated().unwrap();
        assert_eq!(config.warning_window_days(), 10);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let config = TrackerConfig {
            warning_threshold_days: 60,
            ..TrackerConfig::default()
        };
        assert!(config.validated().is_err());
    }

    #[test]
    fn rejects_non_positive_deadline() {
        let config = TrackerConfig {
            deadline_days: 0,
            ..TrackerConfig::default()
        };
        assert!(config.validated().is_err());
    }

    #[test]
    fn rejects_oversized_deadline() {
        for deadline_days in [MAX_DEADLINE_DAYS + 1, 100_000_000, i64::MAX] {
            let config = TrackerConfig {
                deadline_days,
                ..TrackerConfig::default()
            };
            assert!(config.validated().is_err());
        }
        let config = TrackerConfig {
            deadline_days: MAX_DEADLINE_DAYS,
            ..TrackerConfig::default()
        };
        assert!(config.validated().is_ok());
    }

    #[test]
    fn rejects_unknown_placeholders() {
        let config = TrackerConfig {
            warning_template: "{{number}} for {{company}}".into(),
            ..TrackerConfig::default()
        };
        assert!(config.validated().is_err());
    }
}
