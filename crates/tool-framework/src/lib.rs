//! # Tool Framework
//!
//! Resource-agnostic machinery for turning typed resource configs into canonical
//! module argument maps and handing them to an automation engine.
//!
//! ## Core Concepts
//!
//! - **[`Tool`]**: one implementation per resource kind. Pure and synchronous:
//!   `config -> ModuleArgs`.
//! - **[`ModuleArgs`]**: the ordered, flat argument map, with the shared inclusion
//!   rules (omit-if-absent, explicit-set, extension merge) as builder methods.
//! - **[`resolve`]**: priority resolution for mutually exclusive payload sources, in
//!   lenient or strict [`ResolutionMode`].
//! - **[`ModuleRunner`]**: the boundary to the engine. [`ChannelRunner`] and
//!   [`ModuleHost`] connect a runner to a [`ModuleBackend`] over a tokio channel;
//!   [`mock::MockRunner`] scripts responses for tests.
//!
//! ## Error Handling
//!
//! Normalization fails with [`NormalizeError`] before anything is sent. Runner
//! failures come back as [`RunnerError`] and are only annotated with the tool name
//! when converted into [`ToolError`].
//!
//! ## Observability
//!
//! See [`tracing::setup_tracing`] and the [`display`] helpers.

pub mod args;
pub mod display;
pub mod error;
pub mod host;
pub mod message;
pub mod mock;
pub mod resolve;
pub mod result;
pub mod runner;
pub mod tool;
pub mod tracing;

pub use serde_json;

// Re-export core types for convenience
pub use args::{first_present, ArgValue, ModuleArgs};
pub use error::{ModuleExecutionError, NormalizeError, RunnerError, ToolError};
pub use host::{ModuleBackend, ModuleHost};
pub use message::{ModuleRequest, Response};
pub use resolve::{choose, Alternative, ResolutionMode};
pub use result::ExecutionResult;
pub use runner::{ChannelRunner, ModuleRunner};
pub use tool::{ExecutionTarget, Tool, ToolCategory, ToolInfo};
