//! # Tool Trait
//!
//! The `Tool` trait is the contract every resource kind implements. A tool is a typed
//! config value; normalizing it produces the [`ModuleArgs`] for one module invocation.
//!
//! # Architecture Note
//! The constants describe *where* a tool goes (module, target) and the single method
//! describes *what* it sends. Everything else (settings, the runner, display) is
//! handled once by the caller, so a new resource kind only has to provide its field
//! rules.
//!
//! Normalization is synchronous and pure. It performs no I/O and reads no ambient
//! state, so any number of tools may be normalized concurrently.

use crate::args::ModuleArgs;
use crate::error::NormalizeError;
use crate::resolve::ResolutionMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the engine executes a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionTarget {
    /// On the managed host (the usual case for AWS modules).
    #[default]
    Remote,
    /// On the controller itself.
    Local,
}

/// Catalog grouping for tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    #[serde(rename = "aws_compute")]
    Compute,
    #[serde(rename = "aws_database")]
    Database,
    #[serde(rename = "aws_networking")]
    Networking,
    #[serde(rename = "aws_monitoring")]
    Monitoring,
    #[serde(rename = "aws_security")]
    Security,
    #[serde(rename = "aws_storage")]
    Storage,
}

impl ToolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Compute => "aws_compute",
            ToolCategory::Database => "aws_database",
            ToolCategory::Networking => "aws_networking",
            ToolCategory::Monitoring => "aws_monitoring",
            ToolCategory::Security => "aws_security",
            ToolCategory::Storage => "aws_storage",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource kind that can be normalized into module arguments.
pub trait Tool: Send + Sync {
    /// Tool name shown in logs and error context.
    const NAME: &'static str;
    /// Module the engine runs for this tool.
    const MODULE: &'static str;
    const CATEGORY: ToolCategory;
    const DESCRIPTION: &'static str;
    const TARGET: ExecutionTarget = ExecutionTarget::Remote;
    /// Argument holding the resource tag map, if the module takes tags.
    const TAGS_KEY: Option<&'static str> = Some("tags");

    /// Builds the canonical argument map.
    ///
    /// Fields are written in a fixed order and the extension map is merged last, so
    /// the same config always yields the same map.
    fn module_args(&self, mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError>;

    /// Shorthand for [`Tool::module_args`] in lenient mode.
    fn normalize(&self) -> Result<ModuleArgs, NormalizeError> {
        self.module_args(ResolutionMode::Lenient)
    }
}

/// Static description of a tool, for catalogs and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub module: &'static str,
    pub category: ToolCategory,
    pub description: &'static str,
    pub target: ExecutionTarget,
    pub tags_key: Option<&'static str>,
}

impl ToolInfo {
    pub fn of<T: Tool>() -> Self {
        Self {
            name: T::NAME,
            module: T::MODULE,
            category: T::CATEGORY,
            description: T::DESCRIPTION,
            target: T::TARGET,
            tags_key: T::TAGS_KEY,
        }
    }
}
