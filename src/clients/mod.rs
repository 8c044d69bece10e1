//! The [`AwsTools`] facade over a [`ModuleRunner`](tool_framework::ModuleRunner).

pub mod aws_tools;

pub use aws_tools::*;
