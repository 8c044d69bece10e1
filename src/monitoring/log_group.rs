use crate::model::common::require;
use crate::model::LogGroup;
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for LogGroup {
    const NAME: &'static str = "cloudwatchlogs_log_group";
    const MODULE: &'static str = "cloudwatchlogs_log_group";
    const CATEGORY: ToolCategory = ToolCategory::Monitoring;
    const DESCRIPTION: &'static str = "Manage AWS CloudWatch Logs log groups";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "log_group_name", &self.log_group_name)?;

        let mut args = ModuleArgs::new();
        args.insert("log_group_name", &self.log_group_name)
            .insert("state", self.state)
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert_present("retention", &self.retention)
            .insert_present("kms_key_id", &self.kms_key_id)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

fn with_retention(name: String, retention_days: u32) -> LogGroup {
    LogGroup {
        retention: Some(retention_days),
        ..LogGroup::new(name)
    }
}

/// The log group Lambda writes to, `/aws/lambda/{function}`. Default retention 14 days.
pub fn lambda_log_group(function_name: &str, retention_days: Option<u32>) -> LogGroup {
    with_retention(
        format!("/aws/lambda/{function_name}"),
        retention_days.unwrap_or(14),
    )
}

/// `/aws/application/{app}/{environment}`. Default retention 30 days.
pub fn application_log_group(
    application_name: &str,
    environment: &str,
    retention_days: Option<u32>,
) -> LogGroup {
    with_retention(
        format!("/aws/application/{application_name}/{environment}"),
        retention_days.unwrap_or(30),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_lambda_log_group() {
        let args = lambda_log_group("ingest", None).normalize().unwrap();
        assert_eq!(
            args.into_value(),
            json!({
                "log_group_name": "/aws/lambda/ingest",
                "state": "present",
                "purge_tags": true,
                "retention": 14
            })
        );
    }

    #[test]
    fn test_application_log_group() {
        let group = application_log_group("billing", "staging", Some(7));
        assert_eq!(group.log_group_name, "/aws/application/billing/staging");
        assert_eq!(group.retention, Some(7));
        assert_eq!(application_log_group("billing", "prod", None).retention, Some(30));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            LogGroup::default().normalize(),
            Err(NormalizeError::MissingField { field: "log_group_name", .. })
        ));
    }
}
