use crate::args::ModuleArgs;
use crate::error::ModuleExecutionError;
use crate::result::ExecutionResult;
use crate::tool::ExecutionTarget;
use tokio::sync::oneshot;

/// One-shot channel the host answers on.
pub type Response = oneshot::Sender<Result<ExecutionResult, ModuleExecutionError>>;

/// A module invocation sent from a [`ChannelRunner`](crate::ChannelRunner) to a
/// [`ModuleHost`](crate::ModuleHost).
#[derive(Debug)]
pub struct ModuleRequest {
    pub module: String,
    pub args: ModuleArgs,
    pub target: ExecutionTarget,
    pub respond_to: Response,
}
