//! # S3 Bucket
//!
//! Field rules for `s3_bucket`, plus builders for the public access block and
//! bucket policies.

use crate::model::common::require;
use crate::model::S3Bucket;
use crate::policy::{self, Effect, PolicyDocument, PolicyStatement, Principal};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for S3Bucket {
    const NAME: &'static str = "s3_bucket";
    const MODULE: &'static str = "s3_bucket";
    const CATEGORY: ToolCategory = ToolCategory::Storage;
    const DESCRIPTION: &'static str = "Manage AWS S3 buckets";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("requester_pays", self.requester_pays.unwrap_or(false))
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert("bucket_key_enabled", self.bucket_key_enabled.unwrap_or(false))
            .insert(
                "delete_public_access_block",
                self.delete_public_access_block.unwrap_or(false),
            )
            .insert("object_lock_enabled", self.object_lock_enabled.unwrap_or(false))
            .insert("validate_bucket_name", self.validate_bucket_name.unwrap_or(true))
            .insert("dualstack", self.dualstack.unwrap_or(false))
            .insert("accelerate_enabled", self.accelerate.unwrap_or(false))
            .insert_present("policy", &self.policy)
            .insert_present("tags", &self.tags)
            .insert_some("versioning", &self.versioning)
            .insert_present("encryption", &self.encryption)
            .insert_present("encryption_key_id", &self.encryption_key_id)
            .insert_present("public_access", &self.public_access_block)
            .insert_present("acl", &self.acl)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

/// Public access block settings. Everything is blocked by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessBlock {
    pub block_public_acls: bool,
    pub block_public_policy: bool,
    pub ignore_public_acls: bool,
    pub restrict_public_buckets: bool,
}

impl Default for PublicAccessBlock {
    fn default() -> Self {
        Self {
            block_public_acls: true,
            block_public_policy: true,
            ignore_public_acls: true,
            restrict_public_buckets: true,
        }
    }
}

impl From<PublicAccessBlock> for Value {
    fn from(block: PublicAccessBlock) -> Self {
        json!(block)
    }
}

/// A bucket policy statement; principal and condition are omitted when absent.
pub fn bucket_policy_statement<A: AsRef<str>, R: AsRef<str>>(
    effect: Effect,
    actions: &[A],
    resources: &[R],
    principal: Option<Principal>,
    condition: Option<Value>,
) -> PolicyStatement {
    let mut stmt = policy::statement(effect, actions, resources);
    stmt.principal = principal;
    match condition {
        Some(condition) => stmt.with_condition(condition),
        None => stmt,
    }
}

pub fn bucket_policy(statements: Vec<PolicyStatement>) -> PolicyDocument {
    policy::document(statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bucket_defaults() {
        let args = S3Bucket::new("data").normalize().unwrap();
        assert_eq!(
            args.into_value(),
            json!({
                "name": "data",
                "state": "present",
                "requester_pays": false,
                "purge_tags": true,
                "bucket_key_enabled": false,
                "delete_public_access_block": false,
                "object_lock_enabled": false,
                "validate_bucket_name": true,
                "dualstack": false,
                "accelerate_enabled": false
            })
        );
    }

    #[test]
    fn test_versioning_false_kept_and_public_access_renamed() {
        let mut bucket = S3Bucket::new("data");
        bucket.versioning = Some(false);
        bucket.accelerate = Some(true);
        bucket.public_access_block = Some(
            PublicAccessBlock {
                block_public_policy: false,
                ..Default::default()
            }
            .into(),
        );

        let args = bucket.normalize().unwrap();
        assert_eq!(args.get("versioning"), Some(&json!(false)));
        assert_eq!(args.get("accelerate_enabled"), Some(&json!(true)));
        assert!(!args.contains_key("public_access_block"));
        assert_eq!(
            args.get("public_access"),
            Some(&json!({
                "block_public_acls": true,
                "block_public_policy": false,
                "ignore_public_acls": true,
                "restrict_public_buckets": true
            }))
        );
    }

    #[test]
    fn test_bucket_policy_document() {
        let deny_insecure = bucket_policy_statement(
            Effect::Deny,
            &["s3:*"],
            &["arn:aws:s3:::data", "arn:aws:s3:::data/*"],
            Some(Principal::Any),
            Some(json!({"Bool": {"aws:SecureTransport": "false"}})),
        );
        let read = bucket_policy_statement(
            Effect::Allow,
            &["s3:GetObject"],
            &["arn:aws:s3:::data/*"],
            None,
            None,
        );

        let mut bucket = S3Bucket::new("data");
        bucket.policy = Some(bucket_policy(vec![deny_insecure, read]).into());

        let args = bucket.normalize().unwrap();
        let doc = args.get("policy").unwrap();
        assert_eq!(doc["Version"], "2012-10-17");
        assert_eq!(doc["Statement"][0]["Principal"], "*");
        assert_eq!(
            doc["Statement"][1],
            json!({"Effect": "Allow", "Action": ["s3:GetObject"], "Resource": ["arn:aws:s3:::data/*"]})
        );
    }
}
