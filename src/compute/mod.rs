//! Compute tools: Lambda functions and their resource policies.

pub mod lambda_function;
pub mod lambda_policy;

pub use lambda_function::{dead_letter_config, environment_config, vpc_config};
pub use lambda_policy::{alb_permission, api_gateway_permission, s3_permission};
