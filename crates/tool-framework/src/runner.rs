//! # Module Runner
//!
//! [`ModuleRunner`] is the boundary to the automation engine: it takes a module name
//! and a canonical argument map and returns the module's output. Nothing in this crate
//! interprets a runner failure; it is handed back to the caller unchanged.
//!
//! [`ChannelRunner`] is the client half of a [`ModuleHost`](crate::ModuleHost). It is
//! cheap to clone and can be shared across tasks.

use crate::args::ModuleArgs;
use crate::error::RunnerError;
use crate::message::ModuleRequest;
use crate::result::ExecutionResult;
use crate::tool::ExecutionTarget;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Executes one module with a canonical argument map.
#[async_trait]
pub trait ModuleRunner: Send + Sync {
    async fn run_module(
        &self,
        module: &str,
        args: ModuleArgs,
        target: ExecutionTarget,
    ) -> Result<ExecutionResult, RunnerError>;
}

/// Sends module invocations to a [`ModuleHost`](crate::ModuleHost) over a channel.
#[derive(Clone)]
pub struct ChannelRunner {
    sender: mpsc::Sender<ModuleRequest>,
}

impl ChannelRunner {
    pub fn new(sender: mpsc::Sender<ModuleRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl ModuleRunner for ChannelRunner {
    #[instrument(skip(self, args), fields(arg_count = args.len()))]
    async fn run_module(
        &self,
        module: &str,
        args: ModuleArgs,
        target: ExecutionTarget,
    ) -> Result<ExecutionResult, RunnerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ModuleRequest {
                module: module.to_string(),
                args,
                target,
                respond_to,
            })
            .await
            .map_err(|_| RunnerError::Closed)?;
        Ok(response.await.map_err(|_| RunnerError::Dropped)??)
    }
}
