//! # FTL AWS Tools Demo
//!
//! Normalizes a small serverless stack and runs it against a [`DryRunBackend`], so
//! nothing touches AWS:
//!
//! 1. A Lambda execution role and the function itself.
//! 2. A DynamoDB table, its log group and an error alarm.
//! 3. A request read from JSON, dispatched by `kind`.

use ftl_aws_tools::compute::environment_config;
use ftl_aws_tools::lifecycle::{
    default_tags, setup_tracing, DryRunBackend, SessionContext, ToolSettings, ToolSystem,
};
use ftl_aws_tools::model::{
    tags, AttributeType, DynamoDbTable, LambdaFunction, ResourceRequest,
};
use ftl_aws_tools::monitoring::{lambda_error_alarm, lambda_log_group};
use ftl_aws_tools::security::lambda_execution_role;
use serde_json::json;
use tool_framework::ToolError;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let session = SessionContext::from_env();
    info!(region = %session.region, "Starting dry run");

    let settings = ToolSettings::default().with_default_tags(default_tags());
    let system = ToolSystem::start(DryRunBackend, session, settings);
    let tools = &system.tools;

    let span = tracing::info_span!("serverless_stack");
    let outcome: Result<(), ToolError> = async {
        tools
            .iam_role(lambda_execution_role(
                "orders-fn-role",
                vec!["arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole".into()],
            ))
            .await?;

        let mut function = LambdaFunction::new("orders-fn");
        function.runtime = Some("python3.12".into());
        function.handler = Some("app.handler".into());
        function.role = Some("arn:aws:iam::123456789012:role/orders-fn-role".into());
        function.zip_file = Some("build/orders.zip".into());
        function.tracing_config = Some(json!({"Mode": "Active"}));
        function.environment = Some(tags([("TABLE", "orders")]));
        info!(variables = %environment_config(&tags([("TABLE", "orders")])), "Environment");
        tools.lambda_function(function).await?;

        let table = DynamoDbTable::new("orders")
            .with_hash_key("pk", AttributeType::S)
            .with_range_key("sk", AttributeType::S);
        tools.dynamodb_table(table).await?;

        tools.log_group(lambda_log_group("orders-fn", None)).await?;
        tools.metric_alarm(lambda_error_alarm("orders-fn-errors", "orders-fn", None)).await?;
        Ok(())
    }
    .instrument(span)
    .await;

    if let Err(e) = outcome {
        error!(error = %e, "Stack run failed");
    }

    let request: ResourceRequest = serde_json::from_value(json!({
        "kind": "s3_bucket",
        "name": "orders-archive",
        "versioning": true,
        "object_ownership": "BucketOwnerEnforced"
    }))?;
    let args = system.tools.normalize_request(&request)?;
    info!(kind = request.kind(), args = %serde_json::to_string(&args)?, "Normalized request");
    system.tools.run_request(&request).await?;

    system.shutdown().await?;
    info!("Dry run complete");
    Ok(())
}
