use crate::model::common::require;
use crate::model::{tags, MetricAlarm};
use tool_framework::{ExecutionTarget, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for MetricAlarm {
    const NAME: &'static str = "cloudwatch_metric_alarm";
    const MODULE: &'static str = "cloudwatch_metric_alarm";
    const CATEGORY: ToolCategory = ToolCategory::Monitoring;
    const DESCRIPTION: &'static str = "Manage AWS CloudWatch metric alarms";
    const TARGET: ExecutionTarget = ExecutionTarget::Local;

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert_present("metric_name", &self.metric_name)
            .insert_present("namespace", &self.namespace)
            .insert_present("statistic", &self.statistic)
            .insert_present("extended_statistic", &self.extended_statistic)
            .insert_present("comparison", &self.comparison)
            .insert_some("threshold", &self.threshold)
            .insert_present("period", &self.period)
            .insert_present("evaluation_periods", &self.evaluation_periods)
            .insert_present("datapoints_to_alarm", &self.datapoints_to_alarm)
            .insert_present("unit", &self.unit)
            .insert_present("dimensions", &self.dimensions)
            .insert_present("description", &self.description)
            .insert_present("alarm_actions", &self.alarm_actions)
            .insert_present("ok_actions", &self.ok_actions)
            .insert_present("insufficient_data_actions", &self.insufficient_data_actions)
            .insert_present("treat_missing_data", &self.treat_missing_data)
            .insert_present(
                "evaluate_low_sample_count_percentile",
                &self.evaluate_low_sample_count_percentile,
            )
            .insert_present("metrics", &self.metrics)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

/// Evaluation window shared by the alarm presets.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmWindow {
    pub threshold: f64,
    /// Seconds per datapoint.
    pub period: u32,
    pub evaluation_periods: u32,
    pub alarm_actions: Vec<String>,
}

impl AlarmWindow {
    pub fn new(threshold: f64, period: u32, evaluation_periods: u32) -> Self {
        Self {
            threshold,
            period,
            evaluation_periods,
            alarm_actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.alarm_actions = actions;
        self
    }
}

struct MetricSpec<'a> {
    metric_name: &'a str,
    namespace: &'a str,
    statistic: &'a str,
    comparison: &'a str,
    dimension: (&'a str, &'a str),
    description: String,
}

fn preset(alarm_name: &str, spec: MetricSpec<'_>, window: AlarmWindow) -> MetricAlarm {
    MetricAlarm {
        metric_name: Some(spec.metric_name.to_string()),
        namespace: Some(spec.namespace.to_string()),
        statistic: Some(spec.statistic.to_string()),
        comparison: Some(spec.comparison.to_string()),
        threshold: Some(window.threshold),
        period: Some(window.period),
        evaluation_periods: Some(window.evaluation_periods),
        dimensions: Some(tags([spec.dimension])),
        description: Some(spec.description),
        alarm_actions: Some(window.alarm_actions).filter(|a| !a.is_empty()),
        ..MetricAlarm::new(alarm_name)
    }
}

/// Alarms when a function reports errors. Default window: `>= 1` over 2 x 300s.
pub fn lambda_error_alarm(
    alarm_name: &str,
    function_name: &str,
    window: Option<AlarmWindow>,
) -> MetricAlarm {
    preset(
        alarm_name,
        MetricSpec {
            metric_name: "Errors",
            namespace: "AWS/Lambda",
            statistic: "Sum",
            comparison: "GreaterThanOrEqualToThreshold",
            dimension: ("FunctionName", function_name),
            description: format!("Lambda function {function_name} error count alarm"),
        },
        window.unwrap_or_else(|| AlarmWindow::new(1.0, 300, 2)),
    )
}

/// Alarms on slow targets behind an ALB. Default window: `> 1.0s` over 3 x 300s.
pub fn alb_response_time_alarm(
    alarm_name: &str,
    load_balancer_name: &str,
    window: Option<AlarmWindow>,
) -> MetricAlarm {
    preset(
        alarm_name,
        MetricSpec {
            metric_name: "TargetResponseTime",
            namespace: "AWS/ApplicationELB",
            statistic: "Average",
            comparison: "GreaterThanThreshold",
            dimension: ("LoadBalancer", load_balancer_name),
            description: format!("ALB {load_balancer_name} high response time alarm"),
        },
        window.unwrap_or_else(|| AlarmWindow::new(1.0, 300, 3)),
    )
}

/// Alarms on throttled reads. Default window: `>= 1` over 2 x 300s.
pub fn dynamodb_throttling_alarm(
    alarm_name: &str,
    table_name: &str,
    window: Option<AlarmWindow>,
) -> MetricAlarm {
    preset(
        alarm_name,
        MetricSpec {
            metric_name: "ReadThrottledRequests",
            namespace: "AWS/DynamoDB",
            statistic: "Sum",
            comparison: "GreaterThanOrEqualToThreshold",
            dimension: ("TableName", table_name),
            description: format!("DynamoDB table {table_name} read throttling alarm"),
        },
        window.unwrap_or_else(|| AlarmWindow::new(1.0, 300, 2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_zero_threshold_is_kept() {
        let mut alarm = MetricAlarm::new("a");
        alarm.threshold = Some(0.0);
        alarm.period = Some(0);
        let args = alarm.normalize().unwrap();
        assert_eq!(args.get("threshold"), Some(&json!(0.0)));
        assert!(!args.contains_key("period"));
    }

    #[test]
    fn test_lambda_error_alarm_preset() {
        let args = lambda_error_alarm("errors", "ingest", None)
            .normalize()
            .unwrap();
        assert_eq!(
            args.into_value(),
            json!({
                "name": "errors",
                "state": "present",
                "purge_tags": true,
                "metric_name": "Errors",
                "namespace": "AWS/Lambda",
                "statistic": "Sum",
                "comparison": "GreaterThanOrEqualToThreshold",
                "threshold": 1.0,
                "period": 300,
                "evaluation_periods": 2,
                "dimensions": {"FunctionName": "ingest"},
                "description": "Lambda function ingest error count alarm"
            })
        );
    }

    #[test]
    fn test_alb_preset_with_custom_window() {
        let window = AlarmWindow::new(2.5, 60, 5).with_actions(vec!["arn:aws:sns:topic".into()]);
        let alarm = alb_response_time_alarm("slow", "app/web/123", Some(window));
        assert_eq!(alarm.threshold, Some(2.5));
        assert_eq!(alarm.evaluation_periods, Some(5));
        assert_eq!(alarm.alarm_actions, Some(vec!["arn:aws:sns:topic".to_string()]));
        assert_eq!(alarm.statistic.as_deref(), Some("Average"));
    }

    #[test]
    fn test_dynamodb_throttling_preset() {
        let alarm = dynamodb_throttling_alarm("throttle", "orders", None);
        assert_eq!(alarm.namespace.as_deref(), Some("AWS/DynamoDB"));
        assert_eq!(alarm.dimensions, Some(tags([("TableName", "orders")])));
        assert_eq!(alarm.alarm_actions, None);
    }
}
