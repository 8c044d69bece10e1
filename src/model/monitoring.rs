use super::common::{Extra, State, Tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CloudWatch metric alarm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricAlarm {
    pub name: String,
    pub state: State,
    pub metric_name: Option<String>,
    pub namespace: Option<String>,
    pub statistic: Option<String>,
    pub extended_statistic: Option<String>,
    pub comparison: Option<String>,
    /// Zero is a valid threshold and is sent.
    pub threshold: Option<f64>,
    pub period: Option<u32>,
    pub evaluation_periods: Option<u32>,
    pub datapoints_to_alarm: Option<u32>,
    pub unit: Option<String>,
    pub dimensions: Option<Tags>,
    pub description: Option<String>,
    pub alarm_actions: Option<Vec<String>>,
    pub ok_actions: Option<Vec<String>>,
    pub insufficient_data_actions: Option<Vec<String>>,
    pub treat_missing_data: Option<String>,
    pub evaluate_low_sample_count_percentile: Option<String>,
    pub metrics: Option<Vec<Value>>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl MetricAlarm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A CloudWatch Logs log group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogGroup {
    pub log_group_name: String,
    pub state: State,
    /// Retention in days.
    pub retention: Option<u32>,
    pub kms_key_id: Option<String>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl LogGroup {
    pub fn new(log_group_name: impl Into<String>) -> Self {
        Self {
            log_group_name: log_group_name.into(),
            ..Default::default()
        }
    }
}
