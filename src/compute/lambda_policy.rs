use crate::model::common::require;
use crate::model::LambdaPolicy;
use tool_framework::{
    choose, Alternative, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory,
};

const INVOKE_ACTION: &str = "lambda:InvokeFunction";

impl Tool for LambdaPolicy {
    const NAME: &'static str = "lambda_policy";
    const MODULE: &'static str = "lambda_policy";
    const CATEGORY: ToolCategory = ToolCategory::Compute;
    const DESCRIPTION: &'static str = "Manage AWS Lambda function policies and permissions";
    const TAGS_KEY: Option<&'static str> = None;

    fn module_args(&self, mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "function_name", &self.function_name)?;

        let mut args = ModuleArgs::new();
        args.insert("function_name", &self.function_name)
            .insert("state", self.state);

        let target = choose(
            Self::NAME,
            "qualifier",
            mode,
            vec![
                Alternative::new("alias").require("alias", &self.alias),
                Alternative::new("version").require("version", &self.version),
            ],
        )?;
        if let Some(target) = target {
            args.extend(target.into_args());
        }

        args.insert_present("statement_id", &self.statement_id)
            .insert_present("action", &self.action)
            .insert_present("principal", &self.principal)
            .insert_present("source_arn", &self.source_arn)
            .insert_present("source_account", &self.source_account)
            .insert_present("event_source_token", &self.event_source_token)
            .insert_present("qualifier", &self.qualifier)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

fn invoke_permission(
    principal: &str,
    function_name: &str,
    statement_id: &str,
    source_arn: &str,
    source_account: Option<&str>,
) -> LambdaPolicy {
    LambdaPolicy {
        statement_id: Some(statement_id.to_string()),
        action: Some(INVOKE_ACTION.to_string()),
        principal: Some(principal.to_string()),
        source_arn: Some(source_arn.to_string()),
        source_account: source_account.map(str::to_string),
        ..LambdaPolicy::new(function_name)
    }
}

/// Lets an API Gateway API invoke the function.
pub fn api_gateway_permission(
    function_name: &str,
    statement_id: &str,
    api_gateway_arn: &str,
    source_account: Option<&str>,
) -> LambdaPolicy {
    invoke_permission(
        "apigateway.amazonaws.com",
        function_name,
        statement_id,
        api_gateway_arn,
        source_account,
    )
}

/// Lets an application load balancer invoke the function as a target.
pub fn alb_permission(
    function_name: &str,
    statement_id: &str,
    load_balancer_arn: &str,
    source_account: Option<&str>,
) -> LambdaPolicy {
    invoke_permission(
        "elasticloadbalancing.amazonaws.com",
        function_name,
        statement_id,
        load_balancer_arn,
        source_account,
    )
}

/// Lets S3 bucket notifications invoke the function.
pub fn s3_permission(
    function_name: &str,
    statement_id: &str,
    bucket_arn: &str,
    source_account: Option<&str>,
) -> LambdaPolicy {
    invoke_permission(
        "s3.amazonaws.com",
        function_name,
        statement_id,
        bucket_arn,
        source_account,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_alias_beats_version() {
        let mut p = LambdaPolicy::new("f");
        p.alias = Some("live".into());
        p.version = Some(3);

        let args = p.normalize().unwrap();
        assert_eq!(args.get("alias"), Some(&json!("live")));
        assert!(!args.contains_key("version"));

        p.alias = None;
        assert_eq!(p.normalize().unwrap().get("version"), Some(&json!(3)));
    }

    #[test]
    fn test_strict_mode_rejects_alias_and_version() {
        let mut p = LambdaPolicy::new("f");
        p.alias = Some("live".into());
        p.version = Some(3);
        assert!(matches!(
            p.module_args(ResolutionMode::Strict),
            Err(NormalizeError::ConflictingSources { group: "qualifier", .. })
        ));
    }

    #[test]
    fn test_api_gateway_permission() {
        let args = api_gateway_permission(
            "f",
            "AllowApi",
            "arn:aws:execute-api:us-east-1:123:abc/*",
            None,
        )
        .normalize()
        .unwrap();

        assert_eq!(
            args.into_value(),
            json!({
                "function_name": "f",
                "state": "present",
                "statement_id": "AllowApi",
                "action": "lambda:InvokeFunction",
                "principal": "apigateway.amazonaws.com",
                "source_arn": "arn:aws:execute-api:us-east-1:123:abc/*"
            })
        );
    }

    #[test]
    fn test_permission_presets_carry_source_account() {
        let alb = alb_permission("f", "AllowAlb", "arn:alb", Some("123456789012"));
        assert_eq!(alb.principal.as_deref(), Some("elasticloadbalancing.amazonaws.com"));
        assert_eq!(alb.source_account.as_deref(), Some("123456789012"));

        let s3 = s3_permission("f", "AllowS3", "arn:aws:s3:::bucket", None);
        assert_eq!(s3.principal.as_deref(), Some("s3.amazonaws.com"));
        assert!(!s3.normalize().unwrap().contains_key("source_account"));
    }
}
