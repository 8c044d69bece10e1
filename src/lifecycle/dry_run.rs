use async_trait::async_trait;
use serde_json::json;
use tool_framework::{ExecutionResult, ExecutionTarget, ModuleArgs, ModuleBackend, ModuleExecutionError};
use tracing::info;

/// Backend that executes nothing and reports every module as unchanged.
///
/// The output echoes the module, target and arguments it was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunBackend;

#[async_trait]
impl ModuleBackend for DryRunBackend {
    async fn execute(
        &self,
        module: &str,
        args: &ModuleArgs,
        target: ExecutionTarget,
    ) -> Result<ExecutionResult, ModuleExecutionError> {
        info!(module, ?target, arg_count = args.len(), "Dry run");
        Ok(ExecutionResult::new(json!({
            "changed": false,
            "module": module,
            "target": target,
            "args": args,
        })))
    }
}
