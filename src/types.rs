//! Request and label types shared by the decision rule, the scorer and the
//! HTTP layer.
//!
//! Incoming fields are coerced rather than validated: a missing, null or
//! non-numeric value becomes zero, and a fractional count is truncated
//! toward zero. Only a body that is not a JSON object is rejected, and that
//! happens in the extractor before these types are involved.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One tab's interaction summary, as posted to `/recommendation`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionSample {
    #[serde(default, deserialize_with = "lenient_count")]
    pub click_count: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub key_press_count: i64,
    /// Percentage of the page scrolled, 0.0–100.0 in practice.
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_scroll_depth: f64,
}

impl InteractionSample {
    pub fn new(click_count: i64, key_press_count: i64, max_scroll_depth: f64) -> Self {
        Self {
            click_count,
            key_press_count,
            max_scroll_depth,
        }
    }
}

/// What to do with a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Keep,
    Close,
    Archive,
}

impl Recommendation {
    /// Wire form returned in the plain-text response body.
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Keep => "keep",
            Recommendation::Close => "close",
            Recommendation::Archive => "archive",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Periodic activity report sent by the extension's content script.
///
/// Times are in seconds except `first_seen`, which is milliseconds since the
/// Unix epoch. `tab_title` and `url` are informational only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub first_seen: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub active_time: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub idle_time: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub key_presses: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub click_count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_scroll_depth: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tab_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

/// Verdict derived from an activity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreVerdict {
    #[serde(rename = "keep")]
    Keep,
    #[serde(rename = "consider")]
    Consider,
    #[serde(rename = "close")]
    Close,
    /// Not enough signal yet to say anything.
    #[serde(rename = "No data yet")]
    NoData,
}

impl ScoreVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreVerdict::Keep => "keep",
            ScoreVerdict::Consider => "consider",
            ScoreVerdict::Close => "close",
            ScoreVerdict::NoData => "No data yet",
        }
    }
}

impl fmt::Display for ScoreVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Coercion ────────────────────────────────────────────────────────

/// Integer view of a JSON value. Floats truncate toward zero and saturate;
/// anything that is not a number is 0.
pub fn count_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                // `as` saturates out-of-range floats.
                n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
            }
        }
        _ => 0,
    }
}

/// Float view of a JSON value; anything that is not a number is 0.0.
pub fn number_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}
