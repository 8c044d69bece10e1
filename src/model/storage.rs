use super::common::{Extra, State, Tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An S3 bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Bucket {
    pub name: String,
    pub state: State,
    pub policy: Option<Value>,
    pub requester_pays: Option<bool>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    /// Sent whenever set; `false` suspends versioning.
    pub versioning: Option<bool>,
    pub encryption: Option<String>,
    pub encryption_key_id: Option<String>,
    pub bucket_key_enabled: Option<bool>,
    /// Sent as `public_access`.
    pub public_access_block: Option<Value>,
    pub delete_public_access_block: Option<bool>,
    pub object_lock_enabled: Option<bool>,
    pub acl: Option<String>,
    /// Defaults to `true`.
    pub validate_bucket_name: Option<bool>,
    pub dualstack: Option<bool>,
    /// Sent as `accelerate_enabled`.
    pub accelerate: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl S3Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
