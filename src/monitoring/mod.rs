//! Monitoring tools: CloudWatch metric alarms and log groups.

pub mod log_group;
pub mod metric_alarm;

pub use log_group::{application_log_group, lambda_log_group};
pub use metric_alarm::{
    alb_response_time_alarm, dynamodb_throttling_alarm, lambda_error_alarm, AlarmWindow,
};
