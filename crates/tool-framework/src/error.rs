//! # Framework Errors
//!
//! This module defines the error types shared by every tool. Normalization failures
//! are raised before any module runs; execution failures come back from the runner
//! and are only annotated with the tool that issued them.

use serde::{Deserialize, Serialize};

/// A precondition violation detected while building a canonical argument map.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    /// More than one mutually exclusive source was fully specified in strict mode.
    #[error("{tool}: conflicting {group} sources supplied: {}", sources.join(", "))]
    ConflictingSources {
        tool: &'static str,
        group: &'static str,
        sources: Vec<&'static str>,
    },

    /// No complete source was supplied for a group that requires one.
    #[error("{tool}: no {group} supplied (expected one of: {})", expected.join(", "))]
    MissingSource {
        tool: &'static str,
        group: &'static str,
        expected: Vec<&'static str>,
    },

    /// A field required by the current mode was not supplied.
    #[error("{tool}: missing required field `{field}`")]
    MissingField {
        tool: &'static str,
        field: &'static str,
    },
}

/// A failure reported by the module runner for one module invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("module `{module}` failed [{code}]: {message}")]
pub struct ModuleExecutionError {
    /// The module that was executed.
    pub module: String,
    /// The AWS-style error code (e.g. `AccessDenied`, `ThrottlingException`).
    pub code: String,
    /// Human-readable message from the runner.
    pub message: String,
}

impl ModuleExecutionError {
    pub fn new(module: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Errors returned by a [`ModuleRunner`](crate::ModuleRunner).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Module(#[from] ModuleExecutionError),

    #[error("Module runner closed")]
    Closed,

    #[error("Module runner dropped response channel")]
    Dropped,
}

/// Errors surfaced by a tool invocation.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("{tool}: {source}")]
    Execution {
        tool: &'static str,
        #[source]
        source: ModuleExecutionError,
    },

    #[error("Module runner closed")]
    RunnerClosed,

    #[error("Module runner dropped response channel")]
    RunnerDropped,
}

impl ToolError {
    /// Attaches tool context to a runner failure. Module errors are kept as-is.
    pub fn from_runner(tool: &'static str, error: RunnerError) -> Self {
        match error {
            RunnerError::Module(source) => ToolError::Execution { tool, source },
            RunnerError::Closed => ToolError::RunnerClosed,
            RunnerError::Dropped => ToolError::RunnerDropped,
        }
    }

    /// The runner-side error, if this failure came from module execution.
    pub fn execution_error(&self) -> Option<&ModuleExecutionError> {
        match self {
            ToolError::Execution { source, .. } => Some(source),
            _ => None,
        }
    }
}
