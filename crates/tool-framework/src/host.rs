//! # Module Host
//!
//! The `ModuleHost` is the *server* side of the channel runner. It owns the receiving
//! end of the request channel and hands every request, one at a time, to a
//! [`ModuleBackend`].
//!
//! # Usage Pattern
//!
//! 1.  **Create**: `ModuleHost::new()` returns the host and a [`ChannelRunner`].
//! 2.  **Wire**: pass the backend into `host.run(backend)`.
//! 3.  **Run**: spawn the run loop; it exits once every runner clone is dropped.
//!
//! ```rust
//! use async_trait::async_trait;
//! use serde_json::json;
//! use tool_framework::{
//!     ExecutionResult, ExecutionTarget, ModuleArgs, ModuleBackend, ModuleExecutionError,
//!     ModuleHost, ModuleRunner,
//! };
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl ModuleBackend for Echo {
//!     async fn execute(
//!         &self,
//!         _module: &str,
//!         args: &ModuleArgs,
//!         _target: ExecutionTarget,
//!     ) -> Result<ExecutionResult, ModuleExecutionError> {
//!         Ok(ExecutionResult::new(json!({ "changed": false, "args": args })))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (host, runner) = ModuleHost::new(8);
//!     let handle = tokio::spawn(host.run(Echo));
//!
//!     let mut args = ModuleArgs::new();
//!     args.insert("name", "demo");
//!     let result = runner
//!         .run_module("s3_bucket", args, ExecutionTarget::Remote)
//!         .await
//!         .unwrap();
//!     assert_eq!(result.get("args"), Some(&json!({ "name": "demo" })));
//!
//!     drop(runner);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! Requests are processed sequentially, so a backend needs no locking for state it
//! keeps between calls.

use crate::args::ModuleArgs;
use crate::error::ModuleExecutionError;
use crate::message::ModuleRequest;
use crate::result::ExecutionResult;
use crate::runner::ChannelRunner;
use crate::tool::ExecutionTarget;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The engine-side executor a host dispatches to.
#[async_trait]
pub trait ModuleBackend: Send + Sync {
    async fn execute(
        &self,
        module: &str,
        args: &ModuleArgs,
        target: ExecutionTarget,
    ) -> Result<ExecutionResult, ModuleExecutionError>;
}

/// Receive loop that serializes module requests onto one backend.
pub struct ModuleHost {
    receiver: mpsc::Receiver<ModuleRequest>,
    handled: u64,
}

impl ModuleHost {
    /// Creates a host and its runner.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ChannelRunner) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let host = Self {
            receiver,
            handled: 0,
        };
        (host, ChannelRunner::new(sender))
    }

    /// Runs until every [`ChannelRunner`] clone has been dropped.
    pub async fn run<B: ModuleBackend>(mut self, backend: B) {
        let backend_type = std::any::type_name::<B>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(backend_type, "Module host started");

        while let Some(ModuleRequest {
            module,
            args,
            target,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(%module, ?target, ?args, "Execute");
            let result = backend.execute(&module, &args, target).await;
            self.handled += 1;
            match &result {
                Ok(output) => {
                    info!(%module, changed = output.changed(), handled = self.handled, "Module ok")
                }
                Err(e) => warn!(%module, code = %e.code, error = %e.message, "Module failed"),
            }
            let _ = respond_to.send(result);
        }

        info!(backend_type, handled = self.handled, "Module host stopped");
    }
}
