//! Storage tools.

pub mod s3_bucket;

pub use s3_bucket::{bucket_policy, bucket_policy_statement, PublicAccessBlock};
