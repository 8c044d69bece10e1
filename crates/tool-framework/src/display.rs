//! Log sinks for tool invocations.
//!
//! Both helpers only emit `tracing` events; nothing they produce is returned.

use crate::args::ModuleArgs;
use crate::result::ExecutionResult;
use crate::tool::ToolInfo;
use tracing::{debug, info, warn};

/// Logs which module a tool is about to run, and with what.
pub fn display_tool(info: &ToolInfo, args: &ModuleArgs) {
    info!(
        tool = info.name,
        module = info.module,
        category = %info.category,
        target = ?info.target,
        "Running module"
    );
    debug!(tool = info.name, ?args, "Module arguments");
}

/// Logs the outcome reported by the runner.
pub fn display_results(info: &ToolInfo, result: &ExecutionResult) {
    if result.failed() {
        let msg = result
            .get("msg")
            .and_then(|m| m.as_str())
            .unwrap_or("no message");
        warn!(tool = info.name, module = info.module, msg, "Module reported failure");
    } else {
        info!(
            tool = info.name,
            changed = result.changed(),
            "Module finished"
        );
    }
    debug!(tool = info.name, output = %result.as_value(), "Module output");
}
