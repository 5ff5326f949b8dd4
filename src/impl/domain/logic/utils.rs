use std::{collections::HashMap, sync::LazyLock};

use chrono::{Duration, NaiveDate};
use regex::Regex;

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid"));

/// Replaces `{{Key}}` placeholders with their values. Unknown placeholders are
/// left in place and their keys returned alongside the result.
pub(crate) fn replace_placeholders(
    content: &str,
    placeholders: &HashMap<&str, String>,
) -> (String, Vec<String>) {
    let mut unknown_keys = Vec::new();
    let result = PLACEHOLDER_PATTERN.replace_all(content, |caps: &regex::Captures| {
        let key = &caps[1];
        if let Some(value) = placeholders.get(key) {
            value.clone()
        } else {
            unknown_keys.push(key.to_string());
            caps[0].to_string()
        }
    });
    (result.into_owned(), unknown_keys)
}

/// Placeholder keys used in the template, in order of appearance.
pub(crate) fn placeholder_keys(content: &str) -> Vec<String> {
    PLACEHOLDER_PATTERN
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Last day of the given month. Callers guarantee `month` is in 1..=12.
pub(crate) fn month_end_date(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|d| d - Duration::days(1))
}
