//! # Mock Runner & Testing Guide
//!
//! `MockRunner` answers module invocations from a queue of expectations instead of a
//! real engine. It hands out the same [`ChannelRunner`] the production host does, so
//! code under test cannot tell the difference.
//!
//! ## When to use Mocks vs a Real Host
//!
//! | Feature | MockRunner | ModuleHost + backend |
//! |---------|------------|----------------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Fully scripted | Depends on the backend |
//! | **Inspection** | Every call is recorded | Whatever the backend keeps |
//! | **Error Injection** | Easy (`return_err`) | Requires a failing backend |
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use tool_framework::mock::MockRunner;
//! use tool_framework::{ExecutionTarget, ModuleArgs, ModuleExecutionError, ModuleRunner, RunnerError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockRunner::new();
//!     mock.expect_module("s3_bucket").return_ok(json!({ "changed": true }));
//!     mock.expect_module("iam_role")
//!         .return_err(ModuleExecutionError::new("iam_role", "AccessDenied", "not allowed"));
//!
//!     let runner = mock.runner();
//!     let ok = runner
//!         .run_module("s3_bucket", ModuleArgs::new(), ExecutionTarget::Remote)
//!         .await
//!         .unwrap();
//!     assert!(ok.changed());
//!
//!     let err = runner
//!         .run_module("iam_role", ModuleArgs::new(), ExecutionTarget::Remote)
//!         .await
//!         .unwrap_err();
//!     assert!(matches!(err, RunnerError::Module(e) if e.code == "AccessDenied"));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_runner`] to get a runner and the raw request receiver, or the
//! fluent [`MockRunner`] API.

use crate::args::ModuleArgs;
use crate::error::ModuleExecutionError;
use crate::message::ModuleRequest;
use crate::result::ExecutionResult;
use crate::runner::ChannelRunner;
use crate::tool::ExecutionTarget;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    module: String,
    response: Result<ExecutionResult, ModuleExecutionError>,
}

/// A module invocation observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub module: String,
    pub args: ModuleArgs,
    pub target: ExecutionTarget,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<RecordedCall>,
    mismatches: Vec<String>,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock runner with expectation tracking for fluent testing.
pub struct MockRunner {
    runner: ChannelRunner,
    state: Arc<Mutex<MockState>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ModuleRequest>(100);
        let state = Arc::new(Mutex::new(MockState::default()));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                state.calls.push(RecordedCall {
                    module: request.module.clone(),
                    args: request.args,
                    target: request.target,
                });

                let response = match state.expectations.pop_front() {
                    Some(exp) if exp.module == request.module => exp.response,
                    Some(exp) => {
                        state.mismatches.push(format!(
                            "expected module `{}`, got `{}`",
                            exp.module, request.module
                        ));
                        Err(ModuleExecutionError::new(
                            request.module,
                            "UnexpectedModule",
                            format!("mock expected `{}`", exp.module),
                        ))
                    }
                    None => {
                        state
                            .mismatches
                            .push(format!("unexpected call to `{}`", request.module));
                        Err(ModuleExecutionError::new(
                            request.module,
                            "UnexpectedCall",
                            "no expectation queued",
                        ))
                    }
                };
                drop(state);
                let _ = request.respond_to.send(response);
            }
        });

        Self {
            runner: ChannelRunner::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the runner for use in tests.
    pub fn runner(&self) -> ChannelRunner {
        self.runner.clone()
    }

    /// Expects the next invocation to target `module`.
    pub fn expect_module(&self, module: impl Into<String>) -> ModuleExpectationBuilder {
        ModuleExpectationBuilder {
            module: module.into(),
            state: self.state.clone(),
        }
    }

    /// Every call seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.state).calls.clone()
    }

    /// Arguments of the most recent call.
    pub fn last_args(&self) -> Option<ModuleArgs> {
        lock(&self.state).calls.last().map(|c| c.args.clone())
    }

    /// Panics unless every expectation was consumed by a matching call.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Unexpected module calls: {}", state.mismatches.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Builder for module expectations.
pub struct ModuleExpectationBuilder {
    module: String,
    state: Arc<Mutex<MockState>>,
}

impl ModuleExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, output: Value) {
        self.push(Ok(ExecutionResult::new(output)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ModuleExecutionError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ExecutionResult, ModuleExecutionError>) {
        lock(&self.state).expectations.push_back(Expectation {
            module: self.module,
            response,
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a runner and the receiver its requests arrive on.
///
/// Use this when a test needs to hold a request open, answer out of order, or drop
/// the responder.
pub fn create_mock_runner(buffer_size: usize) -> (ChannelRunner, mpsc::Receiver<ModuleRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelRunner::new(sender), receiver)
}

/// Waits for the next request on a receiver from [`create_mock_runner`].
pub async fn expect_run(receiver: &mut mpsc::Receiver<ModuleRequest>) -> Option<ModuleRequest> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;
    use crate::runner::ModuleRunner;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_mock_runner() {
        let (runner, mut receiver) = create_mock_runner(10);

        let task = tokio::spawn(async move {
            let mut args = ModuleArgs::new();
            args.insert("name", "bucket");
            runner
                .run_module("s3_bucket", args, ExecutionTarget::Remote)
                .await
        });

        let request = expect_run(&mut receiver).await.expect("Expected request");
        assert_eq!(request.module, "s3_bucket");
        assert_eq!(request.args.get("name"), Some(&json!("bucket")));
        request
            .respond_to
            .send(Ok(ExecutionResult::new(json!({"changed": true}))))
            .unwrap();

        let result = task.await.unwrap().unwrap();
        assert!(result.changed());
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_dropped() {
        let (runner, mut receiver) = create_mock_runner(1);
        let task = tokio::spawn(async move {
            runner
                .run_module("kms_key", ModuleArgs::new(), ExecutionTarget::Remote)
                .await
        });

        drop(expect_run(&mut receiver).await);
        assert_eq!(task.await.unwrap().unwrap_err(), RunnerError::Dropped);
    }

    #[tokio::test]
    async fn test_mock_runner_with_expectations() {
        let mock = MockRunner::new();
        mock.expect_module("ec2_vpc_net")
            .return_ok(json!({"changed": true, "vpc": {"id": "vpc-1"}}));

        let runner = mock.runner();
        let result = runner
            .run_module("ec2_vpc_net", ModuleArgs::new(), ExecutionTarget::Local)
            .await
            .unwrap();

        assert_eq!(result.get("vpc"), Some(&json!({"id": "vpc-1"})));
        assert_eq!(mock.calls()[0].target, ExecutionTarget::Local);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected module calls")]
    async fn test_verify_reports_wrong_module() {
        let mock = MockRunner::new();
        mock.expect_module("iam_role").return_ok(json!({}));

        let result = mock
            .runner()
            .run_module("iam_policy", ModuleArgs::new(), ExecutionTarget::Local)
            .await;
        assert!(matches!(result, Err(RunnerError::Module(e)) if e.code == "UnexpectedModule"));
        mock.verify();
    }
}
