//! # Session, Settings & System Lifecycle
//!
//! Everything around a tool run that is not the tool itself:
//!
//! - [`SessionContext`] and [`SessionProvider`]: region, profile and account, passed
//!   around as values.
//! - [`ToolSettings`]: resolution mode, check mode, default tags and region
//!   injection, applied to each map before it is sent.
//! - [`ToolSystem`]: spawns a [`ModuleHost`](tool_framework::ModuleHost) on a backend
//!   and hands back a wired [`AwsTools`](crate::clients::AwsTools) facade.
//! - Tag and naming helpers shared by callers building configs.
//!
//! ## Shutdown
//!
//! The host exits once every runner clone is dropped. [`ToolSystem::shutdown`] drops
//! its own facade and awaits the host task, so any clone kept elsewhere must be
//! dropped first.
//!
//! Tracing setup lives in the framework; see [`setup_tracing`].

pub mod dry_run;
pub mod naming;
pub mod session;
pub mod settings;
pub mod tags;
pub mod tool_system;

pub use dry_run::DryRunBackend;
pub use naming::{validate_resource_name, NameError};
pub use session::{SessionContext, SessionProvider, StaticSessionProvider, DEFAULT_REGION};
pub use settings::{ToolSettings, CHECK_MODE_KEY};
pub use tags::{default_tags, merge_tags};
pub use tool_framework::tracing::setup_tracing;
pub use tool_system::ToolSystem;
