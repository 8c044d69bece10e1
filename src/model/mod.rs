//! Typed configuration for every resource kind.
//!
//! Each config is plain data: optional fields stay `None` until the caller sets them,
//! and anything without a typed field lands in `extra`. The field rules that turn a
//! config into module arguments live with each kind's [`Tool`](tool_framework::Tool)
//! impl.

pub mod common;
pub mod compute;
pub mod database;
pub mod monitoring;
pub mod networking;
pub mod request;
pub mod security;
pub mod storage;

pub use common::{tags, Extra, State, Tags};
pub use compute::*;
pub use database::*;
pub use monitoring::*;
pub use networking::*;
pub use request::ResourceRequest;
pub use security::*;
pub use storage::*;
