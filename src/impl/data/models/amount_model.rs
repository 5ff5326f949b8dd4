use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::{domain::logic::validation::validate_amount, errors::InvalidAmount};

/// Non-negative monetary amount, as either a JSON number or a numeric string
/// (thousands separators allowed).
#[derive(Debug, Clone, Copy)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(",", "");
        let amount = raw
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s))?;
        Ok(AmountModel(validate_amount(amount)?))
    }
}

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for AmountModel {
    fn deserialize<D>(deserializer: D) -> Result<AmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => validate_amount(n).map(AmountModel),
            RawAmount::Text(s) => AmountModel::from_str(&s),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_strings() {
        let n: AmountModel = serde_json::from_str("1500.5").unwrap();
        assert_eq!(n.0, 1500.5);
        let s: AmountModel = serde_json::from_str("\"12,000.25\"").unwrap();
        assert_eq!(s.0, 12000.25);
    }

    #[test]
    fn rejects_negative_or_garbage() {
        assert!(serde_json::from_str::<AmountModel>("-3").is_err());
        assert!(AmountModel::from_str("abc").is_err());
    }
}
